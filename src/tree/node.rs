//! Suffix tree node
//!
//! A node stands for `text[start..start + depth]` of the concatenated text.
//! Edge labels are never stored: the label of the edge into a node is
//! `text[start + parent.depth..start + depth]`.

use super::types::*;
use roaring::RoaringBitmap;

/// A node in the compressed trie of suffixes
#[derive(Debug, Clone)]
pub struct SuffixNode {
    /// Representative start position in the concatenated text
    pub(crate) start: TextPosition,
    /// String depth (length of the path label from the root)
    pub(crate) depth: usize,
    /// Parent node (the root is its own parent)
    pub(crate) parent: NodeId,
    /// Suffix link, filled in during construction
    pub(crate) suffix_link: Option<NodeId>,
    /// Transitions keyed by the first symbol of the edge label, in insertion order
    pub(crate) children: Vec<(Symbol, NodeId)>,
    /// Documents whose suffixes pass through this node
    pub(crate) labels: RoaringBitmap,
}

impl SuffixNode {
    pub(crate) fn new(start: TextPosition, depth: usize, parent: NodeId) -> Self {
        Self {
            start,
            depth,
            parent,
            suffix_link: None,
            children: Vec::new(),
            labels: RoaringBitmap::new(),
        }
    }

    /// Child reached by the edge whose label starts with `symbol`
    #[inline]
    pub fn get_child(&self, symbol: Symbol) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, child)| child)
    }

    /// Insert a transition, or replace the existing one for `symbol` in place
    pub fn set_child(&mut self, symbol: Symbol, node: NodeId) {
        match self.children.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = node,
            None => self.children.push((symbol, node)),
        }
    }

    #[inline]
    pub fn has_outgoing_transition_matching(&self, symbol: Symbol) -> bool {
        self.children.iter().any(|(s, _)| *s == symbol)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn start(&self) -> TextPosition {
        self.start
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Transitions in insertion order
    pub fn children(&self) -> &[(Symbol, NodeId)] {
        &self.children
    }

    /// Document-label set; empty until the tree is labeled
    pub fn labels(&self) -> &RoaringBitmap {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = SuffixNode::new(3, 4, ROOT);
        assert!(node.is_leaf());
        assert_eq!(node.start(), 3);
        assert_eq!(node.depth(), 4);
        assert_eq!(node.suffix_link(), None);
        assert!(node.labels().is_empty());
    }

    #[test]
    fn test_set_and_get_child() {
        let mut node = SuffixNode::new(0, 0, ROOT);
        node.set_child(Symbol::Byte(b'a'), 1);
        node.set_child(Symbol::Terminator(0), 2);

        assert_eq!(node.get_child(Symbol::Byte(b'a')), Some(1));
        assert_eq!(node.get_child(Symbol::Terminator(0)), Some(2));
        assert_eq!(node.get_child(Symbol::Byte(b'b')), None);
        assert!(node.has_outgoing_transition_matching(Symbol::Byte(b'a')));
        assert!(!node.has_outgoing_transition_matching(Symbol::Terminator(1)));
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_replace_child_keeps_position() {
        let mut node = SuffixNode::new(0, 0, ROOT);
        node.set_child(Symbol::Byte(b'a'), 1);
        node.set_child(Symbol::Byte(b'b'), 2);
        node.set_child(Symbol::Byte(b'a'), 7);

        assert_eq!(
            node.children(),
            &[(Symbol::Byte(b'a'), 7), (Symbol::Byte(b'b'), 2)]
        );
    }
}
