//! Document loading
//!
//! Turns the paths given on the command line into the ordered document list
//! the suffix tree is built from. Files are read as-is; directories are
//! walked with gitignore rules applied and their files taken in path order.
//! Document ids follow the resulting order.

pub mod loader;

pub use loader::{load_documents, Document, LoadOptions, LoadedCorpus, SkippedFile};
