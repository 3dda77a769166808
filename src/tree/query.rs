//! Traversals and the longest-common-substring query
//!
//! Every traversal uses an explicit work stack, so long shared runs (deep
//! trees) cannot exhaust the call stack.

use super::builder::SuffixTree;
use super::node::SuffixNode;
use super::types::*;

impl SuffixTree {
    /// Apply `visitor` to every node below `from`, children before parents
    ///
    /// Children are visited in transition insertion order; `from` is visited last.
    pub fn traverse_postorder<F>(&self, from: NodeId, mut visitor: F)
    where
        F: FnMut(NodeId, &SuffixNode),
    {
        // (node, index of the next child to descend into)
        let mut stack = vec![(from, 0usize)];

        while let Some((id, next)) = stack.pop() {
            let node = self.node(id);
            match node.children().get(next) {
                Some(&(_, child)) => {
                    stack.push((id, next + 1));
                    stack.push((child, 0));
                }
                None => visitor(id, node),
            }
        }
    }

    /// Node ids below `from` in post-order
    pub(crate) fn postorder(&self, from: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        self.traverse_postorder(from, |id, _| order.push(id));
        order
    }

    /// All leaf descendants of `from`, pre-order over children in insertion order
    pub fn collect_leaves(&self, from: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                leaves.push(id);
            } else {
                stack.extend(node.children().iter().rev().map(|&(_, child)| child));
            }
        }

        leaves
    }

    /// Find the longest substring shared by two or more documents
    ///
    /// Returns an empty result when nothing is shared (including the
    /// single-document case). When several nodes tie on depth, the first one
    /// reached in pre-order over children in insertion order wins.
    pub fn longest_common_substring(&self) -> Result<CommonSubstring, TreeError> {
        let deepest = self.deepest_shared_node()?;
        if deepest == ROOT {
            return Ok(CommonSubstring::default());
        }

        let node = self.node(deepest);

        // A node shared by two documents never spans a terminator
        let bytes = self.text[node.start()..node.start() + node.depth()]
            .iter()
            .filter_map(|s| s.as_byte())
            .collect();

        let mut occurrences: Vec<TextPosition> = self
            .collect_leaves(deepest)
            .into_iter()
            .map(|leaf| self.node(leaf).start())
            .collect();
        occurrences.sort_unstable();

        Ok(CommonSubstring {
            bytes,
            documents: node.labels().iter().collect(),
            occurrences,
        })
    }

    /// Deepest node whose label set has at least two documents
    ///
    /// Only descends through children that qualify themselves: label sets
    /// shrink going down, so nothing below a single-document child can qualify.
    fn deepest_shared_node(&self) -> Result<NodeId, TreeError> {
        if !self.labeled {
            return Err(TreeError::NotLabeled);
        }

        let mut best = ROOT;
        let mut best_depth = 0;
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.depth() > best_depth {
                best = id;
                best_depth = node.depth();
            }
            stack.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|&(_, child)| child)
                    .filter(|&child| self.node(child).labels().len() >= 2),
            );
        }

        Ok(best)
    }

    /// Translate every occurrence of a result into document coordinates
    pub fn occurrences(&self, found: &CommonSubstring) -> Vec<Occurrence> {
        found
            .occurrences
            .iter()
            .filter_map(|&global| {
                self.to_local_offset(global)
                    .map(|(doc_id, local_offset)| Occurrence {
                        doc_id,
                        local_offset,
                        global_offset: global,
                    })
            })
            .collect()
    }
}
