//! Suffix tree builder
//!
//! Builds a generalized suffix tree from a collection of documents by:
//! 1. Concatenating all documents, each followed by its own terminator
//! 2. Inserting every suffix with McCreight's algorithm
//!
//! Suffix links let each insertion resume where the previous one left off,
//! and the rescan along a suffix link jumps whole edges using node depths,
//! so the total work is linear in the text length.

use super::node::SuffixNode;
use super::types::*;

/// Generalized suffix tree over a list of documents
///
/// All nodes live in one arena; parents and suffix links are plain ids into
/// it. The tree is read-only once built and labeled.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Concatenated documents with terminators
    pub(crate) text: Vec<Symbol>,
    /// Start offset of each document in `text`
    pub(crate) boundaries: Vec<TextPosition>,
    /// Node arena, the root at index 0
    pub(crate) nodes: Vec<SuffixNode>,
    /// Whether the labeling pass has run
    pub(crate) labeled: bool,
}

impl SuffixTree {
    /// Build the tree from documents
    ///
    /// Nodes are not labeled yet; call [`SuffixTree::label`] before querying.
    pub fn build<D: AsRef<[u8]>>(documents: &[D]) -> Result<Self, TreeError> {
        if documents.is_empty() {
            return Err(TreeError::NoDocuments);
        }

        let (text, boundaries) = concatenate(documents);

        // Every suffix gets one leaf, plus at most n - 1 internal nodes and the root
        let mut nodes = Vec::with_capacity(text.len() * 2);
        let mut root = SuffixNode::new(0, 0, ROOT);
        root.suffix_link = Some(ROOT);
        nodes.push(root);

        let mut tree = Self {
            text,
            boundaries,
            nodes,
            labeled: false,
        };
        tree.insert_suffixes();
        Ok(tree)
    }

    /// Build the tree and run the labeling pass
    pub fn build_labeled<D: AsRef<[u8]>>(documents: &[D]) -> Result<Self, TreeError> {
        let mut tree = Self::build(documents)?;
        tree.label();
        Ok(tree)
    }

    fn insert_suffixes(&mut self) {
        let n = self.text.len();
        let mut node = ROOT;
        let mut depth = 0usize;

        for i in 0..n {
            // Scan: extend the match below the current node. Terminators are
            // unique, so `i + depth` never runs past this suffix's terminator.
            while self.node(node).depth == depth {
                let Some(child) = self.node(node).get_child(self.text[i + depth]) else {
                    break;
                };
                node = child;
                depth += 1;
                let (child_start, child_depth) = (self.node(node).start, self.node(node).depth);
                while depth < child_depth && self.text[child_start + depth] == self.text[i + depth]
                {
                    depth += 1;
                }
            }

            if depth < self.node(node).depth {
                node = self.split_edge(node, depth);
            }
            self.new_leaf(i, node, depth);

            let link = match self.node(node).suffix_link {
                Some(link) => link,
                None => self.resolve_suffix_link(node),
            };
            node = link;
            depth = depth.saturating_sub(1);
        }
    }

    /// Insert an internal node at `depth` on the edge into `node`
    fn split_edge(&mut self, node: NodeId, depth: usize) -> NodeId {
        let start = self.node(node).start;
        let parent = self.node(node).parent;
        let parent_depth = self.node(parent).depth;

        let mut mid = SuffixNode::new(start, depth, parent);
        mid.set_child(self.text[start + depth], node);
        let mid_id = self.push_node(mid);

        self.node_mut(node).parent = mid_id;
        let key = self.text[start + parent_depth];
        self.node_mut(parent).set_child(key, mid_id);
        mid_id
    }

    /// Attach the leaf for the suffix starting at `start` below `node`
    fn new_leaf(&mut self, start: TextPosition, node: NodeId, depth: usize) -> NodeId {
        let leaf = SuffixNode::new(start, self.text.len() - start, node);
        let key = self.text[start + depth];
        let leaf_id = self.push_node(leaf);
        self.node_mut(node).set_child(key, leaf_id);
        leaf_id
    }

    /// Find (or create) the node for this node's path label minus its first symbol
    ///
    /// Rescans from the parent's suffix link target. The path is known to
    /// exist, so only the first symbol of each edge is looked at and whole
    /// edges are skipped by depth.
    fn resolve_suffix_link(&mut self, node: NodeId) -> NodeId {
        let start = self.node(node).start;
        let target_depth = self.node(node).depth - 1;
        let parent = self.node(node).parent;

        let mut current = self
            .node(parent)
            .suffix_link
            .expect("parent of an unlinked node always has a suffix link");
        while self.node(current).depth < target_depth {
            let key = self.text[start + self.node(current).depth + 1];
            current = self
                .node(current)
                .get_child(key)
                .expect("suffix link path exists in the tree");
        }
        if self.node(current).depth > target_depth {
            current = self.split_edge(current, target_depth);
        }

        self.node_mut(node).suffix_link = Some(current);
        current
    }

    fn push_node(&mut self, node: SuffixNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Get a node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> &SuffixNode {
        &self.nodes[id as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SuffixNode {
        &mut self.nodes[id as usize]
    }

    pub fn root(&self) -> &SuffixNode {
        self.node(ROOT)
    }

    /// Concatenated text including terminators
    pub fn text(&self) -> &[Symbol] {
        &self.text
    }

    /// Start offset of each document in the concatenated text
    pub fn boundaries(&self) -> &[TextPosition] {
        &self.boundaries
    }

    pub fn document_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get size figures for this tree
    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count() as u64;
        TreeStats {
            doc_count: self.boundaries.len() as u32,
            text_len: self.text.len() as u64,
            node_count: self.nodes.len() as u64,
            leaf_count,
            internal_count: self.nodes.len() as u64 - leaf_count,
        }
    }
}

/// Join documents into one symbol sequence, each followed by its terminator
///
/// Returns the text and the start offset of every document.
fn concatenate<D: AsRef<[u8]>>(documents: &[D]) -> (Vec<Symbol>, Vec<TextPosition>) {
    let total: usize = documents.iter().map(|d| d.as_ref().len() + 1).sum();
    let mut text = Vec::with_capacity(total);
    let mut boundaries = Vec::with_capacity(documents.len());

    for (doc_id, doc) in documents.iter().enumerate() {
        boundaries.push(text.len());
        text.extend(doc.as_ref().iter().map(|&b| Symbol::Byte(b)));
        text.push(Symbol::Terminator(doc_id as DocId));
    }

    (text, boundaries)
}
