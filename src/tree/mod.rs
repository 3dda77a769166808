//! Generalized suffix tree module
//!
//! This module finds the longest byte run shared by two or more documents.
//! It builds one suffix tree over all documents (each followed by its own
//! terminator), labels every node with the documents passing through it, and
//! picks the deepest node seen by at least two documents.
//!
//! ## Architecture
//!
//! - `types`: Symbols, ids, results and errors
//! - `node`: Tree nodes and their transitions
//! - `builder`: Concatenation and McCreight construction
//! - `label`: Document labeling and position-to-document mapping
//! - `query`: Traversals and the longest-common-substring query
//!
//! ## Example
//!
//! ```
//! use strand::tree::SuffixTree;
//!
//! let tree = SuffixTree::build_labeled(&["33", "AA2222", "BBB2222", "CCC33333"]).unwrap();
//! let found = tree.longest_common_substring().unwrap();
//!
//! assert_eq!(found.bytes, b"2222");
//! assert_eq!(found.documents, vec![1, 2]);
//! ```

pub mod builder;
pub mod label;
pub mod node;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTree;
pub use node::SuffixNode;
pub use types::{
    CommonSubstring, DocId, NodeId, Occurrence, Symbol, TextPosition, TreeError, TreeStats, ROOT,
};
