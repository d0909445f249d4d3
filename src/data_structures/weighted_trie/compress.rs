// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path compression.
//!
//! Every non-root node with exactly one child is fused with that child: the
//! labels are combined with [`MergeLabel::merge`] and the child's weight and
//! children move up. Chains are followed until a node with zero or several
//! children is reached. The root carries no label and is never fused.

use tracing::debug;

use super::error::TrieResult;
use super::label::{Label, MergeLabel};
use super::node::{Node, NodeId};
use super::Trie;

impl<L: Label + MergeLabel> Trie<L> {
    /// Returns a path-compressed copy of this trie.
    ///
    /// Siblings are re-ordered by their merged labels.
    ///
    /// # Errors
    ///
    /// [`TrieError::DuplicateLabel`](super::TrieError::DuplicateLabel) if two
    /// siblings end up with the same merged label.
    pub fn compressed(&self) -> TrieResult<Trie<L>> {
        let root = &self[self.root];
        let mut out = Trie {
            nodes: Vec::with_capacity(self.len()),
            root: NodeId(0),
        };
        let out_root = out.push(Node::new(root.stored_label().cloned(), root.weight()));

        self.compress_children(self.root, &mut out, out_root)?;
        Ok(out)
    }

    /// Compresses this trie in place.
    ///
    /// On error the trie is left unchanged.
    pub fn path_compress(&mut self) -> TrieResult<()> {
        let compressed = self.compressed()?;
        debug!(
            nodes_before = self.len(),
            nodes_after = compressed.len(),
            "Compressed trie"
        );
        *self = compressed;
        Ok(())
    }

    fn compress_children(&self, src: NodeId, out: &mut Trie<L>, dst: NodeId) -> TrieResult<()> {
        let mut pending = vec![(src, dst)];

        while let Some((src, dst)) = pending.pop() {
            for child in self[src].children().iter() {
                let Some(mut label) = self[child].stored_label().cloned() else {
                    continue;
                };

                let mut tail = child;
                while self[tail].children().len() == 1 {
                    let Some(only) = self[tail].children().first() else {
                        break;
                    };
                    if let Some(next) = self[only].stored_label() {
                        label = label.merge(next);
                    }
                    tail = only;
                }

                let fused = out.insert_child(dst, label, self[tail].weight())?;
                pending.push((tail, fused));
            }
        }
        Ok(())
    }
}
