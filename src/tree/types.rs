//! Types for the generalized suffix tree
//!
//! This module defines the symbol alphabet, identifiers, query results and
//! error type shared by the builder, labeling pass and query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a document (its position in the input list)
pub type DocId = u32;

/// Index of a node in the tree's arena
pub type NodeId = u32;

/// Position in the concatenated text
pub type TextPosition = usize;

/// The root node always lives in the first arena slot
pub const ROOT: NodeId = 0;

/// A symbol of the concatenated text
///
/// Document bytes and document terminators live in disjoint variants, so
/// every byte value may appear in a document and each document gets its own
/// terminator no matter how many documents there are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A byte from a document
    Byte(u8),
    /// End-of-document marker, unique per document
    Terminator(DocId),
}

impl Symbol {
    /// The byte value, or `None` for a terminator
    #[inline]
    pub fn as_byte(self) -> Option<u8> {
        match self {
            Symbol::Byte(b) => Some(b),
            Symbol::Terminator(_) => None,
        }
    }

    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, Symbol::Terminator(_))
    }
}

/// Longest common substring result
///
/// An empty result (no bytes, no documents, no occurrences) means no
/// substring is shared by two or more documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSubstring {
    /// The shared bytes
    pub bytes: Vec<u8>,
    /// Documents containing the bytes, ascending
    pub documents: Vec<DocId>,
    /// Start of every occurrence in the concatenated text, ascending
    pub occurrences: Vec<TextPosition>,
}

impl CommonSubstring {
    /// Length of the shared run in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A single occurrence translated back into document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Document where the occurrence was found
    pub doc_id: DocId,
    /// Byte offset within the original document
    pub local_offset: usize,
    /// Position in the concatenated text
    pub global_offset: TextPosition,
}

/// Size figures for a built tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of documents
    pub doc_count: u32,
    /// Length of the concatenated text including terminators
    pub text_len: u64,
    /// Total nodes including the root
    pub node_count: u64,
    /// Leaves (equals `text_len`)
    pub leaf_count: u64,
    /// Internal nodes including the root
    pub internal_count: u64,
}

/// Errors raised by tree construction and queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// No documents were supplied
    NoDocuments,
    /// A query ran before the labeling pass
    NotLabeled,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NoDocuments => write!(f, "At least one document is required"),
            TreeError::NotLabeled => {
                write!(f, "Suffix tree must be labeled before it can be queried")
            }
        }
    }
}

impl std::error::Error for TreeError {}
