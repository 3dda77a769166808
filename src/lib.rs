//! # strand - longest shared byte strand
//!
//! strand finds the longest contiguous run of bytes that appears in two or
//! more files. All files are concatenated (each followed by its own
//! terminator) into one generalized suffix tree, built in linear time with
//! McCreight's algorithm; every node is labeled with the files passing
//! through it, and the deepest node seen by at least two files is the answer.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Suffix tree construction, labeling and the query
//! - [`corpus`] - Loading files and directories into documents
//! - [`output`] - Result formatting (text and JSON)
//! - [`utils`] - Configuration, hex encoding, progress spinners
//!
//! ## Quick Start
//!
//! ```
//! use strand::tree::SuffixTree;
//!
//! let tree = SuffixTree::build_labeled(&["XYZ", "XYZ"]).unwrap();
//! let found = tree.longest_common_substring().unwrap();
//!
//! assert_eq!(found.bytes, b"XYZ");
//! for occ in tree.occurrences(&found) {
//!     println!("document {} offset {}", occ.doc_id, occ.local_offset);
//! }
//! ```

pub mod corpus;
pub mod output;
pub mod tree;
pub mod utils;
