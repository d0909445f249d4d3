// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Union of two tries.
//!
//! Weights are added at matching label paths:
//!
//! - leaf + leaf: the weights are summed
//! - leaf + internal (either side): the internal shape is kept and the
//!   leaf's weight is added to every one of its leaves
//! - internal + internal: children of the right operand are merged into the
//!   left operand by label, recursing where labels coincide
//!
//! Union never fails: equal labels on both sides are the merge case, not a
//! duplicate.

use std::ops::{Add, AddAssign};

use tracing::debug;

use super::label::Label;
use super::node::NodeId;
use super::Trie;

impl<L: Label> Trie<L> {
    /// Merges the subtree `src` of `other` into the subtree `dst` of `self`.
    ///
    /// Matching pairs still to merge are kept on an explicit stack.
    pub(crate) fn union_at(&mut self, dst: NodeId, other: &Trie<L>, src: NodeId) {
        let mut pending = vec![(dst, src)];

        while let Some((dst, src)) = pending.pop() {
            let source = &other[src];

            match (self[dst].is_leaf(), source.is_leaf()) {
                (true, true) => self.nodes[dst.index()].add_weight(source.weight()),
                (true, false) => {
                    let carried = self[dst].weight();
                    self.copy_children(dst, other, src);
                    self.broadcast_weight(dst, carried);
                }
                (false, true) => self.broadcast_weight(dst, source.weight()),
                (false, false) => {
                    for child in source.children().iter() {
                        let Some(label) = other[child].stored_label() else {
                            continue;
                        };
                        match self[dst].children().find(label, &self.nodes) {
                            Some(existing) => pending.push((existing, child)),
                            None => {
                                let copied = self.copy_subtree(other, child);
                                let attached = self.attach(dst, copied);
                                debug_assert!(attached.is_ok(), "label was checked to be absent");
                            }
                        }
                    }
                }
            }
        }
    }
}

impl<L: Label> AddAssign<&Trie<L>> for Trie<L> {
    fn add_assign(&mut self, rhs: &Trie<L>) {
        let before = self.len();
        self.union_at(self.root, rhs, rhs.root);
        debug!(
            nodes_before = before,
            nodes_after = self.len(),
            "Merged trie"
        );
    }
}

impl<L: Label> AddAssign<Trie<L>> for Trie<L> {
    fn add_assign(&mut self, rhs: Trie<L>) {
        *self += &rhs;
    }
}

impl<L: Label> Add<&Trie<L>> for &Trie<L> {
    type Output = Trie<L>;

    fn add(self, rhs: &Trie<L>) -> Trie<L> {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<L: Label> Add<Trie<L>> for Trie<L> {
    type Output = Trie<L>;

    fn add(mut self, rhs: Trie<L>) -> Trie<L> {
        self += &rhs;
        self
    }
}

impl<L: Label> Add<&Trie<L>> for Trie<L> {
    type Output = Trie<L>;

    fn add(mut self, rhs: &Trie<L>) -> Trie<L> {
        self += rhs;
        self
    }
}
