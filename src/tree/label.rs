//! Document labeling
//!
//! Marks every node with the set of documents whose suffixes pass through
//! it, and maps text positions back to documents through the boundary table.

use super::builder::SuffixTree;
use super::types::*;
use roaring::RoaringBitmap;

impl SuffixTree {
    /// Compute the document-label set of every node
    ///
    /// Leaves get their owning document; internal nodes get the union of
    /// their children. Runs post-order so children are done first. Running
    /// it again recomputes the same sets.
    pub fn label(&mut self) {
        let order = self.postorder(ROOT);

        for id in order {
            let node = self.node(id);
            let mut labels = RoaringBitmap::new();
            if node.is_leaf() {
                labels.insert(self.owner(node.start));
            } else {
                for &(_, child) in node.children() {
                    labels |= self.node(child).labels();
                }
            }
            self.node_mut(id).labels = labels;
        }

        self.labeled = true;
    }

    /// Whether [`SuffixTree::label`] has run
    pub fn is_labeled(&self) -> bool {
        self.labeled
    }

    /// Find the document owning a position in the concatenated text
    ///
    /// A document's terminator belongs to that document.
    #[inline]
    pub(crate) fn owner(&self, pos: TextPosition) -> DocId {
        // The first boundary is always 0, so the partition point is at least 1
        let next = self.boundaries.partition_point(|&start| start <= pos);
        (next - 1) as DocId
    }

    /// Translate a position in the concatenated text into `(document, offset)`
    ///
    /// Returns `None` for positions past the end of the text.
    pub fn to_local_offset(&self, global: TextPosition) -> Option<(DocId, usize)> {
        if global >= self.text.len() {
            return None;
        }
        let doc_id = self.owner(global);
        Some((doc_id, global - self.boundaries[doc_id as usize]))
    }
}
