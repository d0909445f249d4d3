// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered child list of a trie node.
//!
//! A [`ChildList`] holds the [`NodeId`]s of a node's children sorted by
//! ascending label. The labels themselves live in the owning arena, so every
//! operation that needs to compare labels borrows the arena slice.

use std::cmp::Ordering;
use std::iter::Copied;
use std::slice::Iter;

use super::node::{structurally_equal, Node, NodeId};

/// Children of a trie node, kept in strictly ascending label order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildList {
    ids: Vec<NodeId>,
}

impl ChildList {
    /// Creates an empty child list.
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the node has no children (is a leaf).
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Iterates over the children in ascending label order.
    pub fn iter(&self) -> Copied<Iter<'_, NodeId>> {
        self.ids.iter().copied()
    }

    /// The child with the smallest label.
    pub fn first(&self) -> Option<NodeId> {
        self.ids.first().copied()
    }

    /// Returns the sibling stored right after `id`, if any.
    ///
    /// Returns `None` both for the last child and for an `id` that is not in
    /// this list.
    pub fn next_after(&self, id: NodeId) -> Option<NodeId> {
        let position = self.position(id)?;
        self.ids.get(position + 1).copied()
    }

    /// Position of `id` within this list.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == id)
    }

    /// Finds the child labelled `label`.
    pub fn find<L: Ord>(&self, label: &L, nodes: &[Node<L>]) -> Option<NodeId> {
        self.search(label, nodes)
            .ok()
            .map(|position| self.ids[position])
    }

    /// Inserts `id` keeping ascending label order.
    ///
    /// The label is read from `nodes[id]`. Returns `false` and leaves the list
    /// untouched if a child with an equal label already exists or the node
    /// carries no label.
    pub fn insert_ordered<L: Ord>(&mut self, id: NodeId, nodes: &[Node<L>]) -> bool {
        let Some(label) = nodes[id.index()].stored_label() else {
            return false;
        };

        match self.search(label, nodes) {
            Ok(_) => false,
            Err(position) => {
                self.ids.insert(position, id);
                true
            }
        }
    }

    /// Removes `id` from the list. Returns `false` if it was not present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.position(id) {
            Some(position) => {
                self.ids.remove(position);
                true
            }
            None => false,
        }
    }

    /// Moves the handles out, leaving this list empty.
    pub fn take(&mut self) -> ChildList {
        std::mem::take(self)
    }

    /// Rewrites the parent reference of every child to `owner`.
    ///
    /// Must be called whenever a list is built for, or moved to, a new owner.
    pub fn update_parent_refs<L>(&self, owner: NodeId, nodes: &mut [Node<L>]) {
        for id in self.iter() {
            nodes[id.index()].set_parent(Some(owner));
        }
    }

    /// Pairwise comparison against a child list living in another arena.
    ///
    /// Equal iff both lists have the same length and, in order, every pair of
    /// children has equal labels and structurally equal subtrees.
    pub fn equals<L: PartialEq>(
        &self,
        nodes: &[Node<L>],
        other: &ChildList,
        other_nodes: &[Node<L>],
    ) -> bool {
        self.labels_match(nodes, other, other_nodes)
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| structurally_equal(nodes, left, other_nodes, right))
    }

    /// Same length and pairwise equal labels; subtrees are not compared.
    pub(crate) fn labels_match<L: PartialEq>(
        &self,
        nodes: &[Node<L>],
        other: &ChildList,
        other_nodes: &[Node<L>],
    ) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(left, right)| {
                nodes[left.index()].stored_label() == other_nodes[right.index()].stored_label()
            })
    }

    /// Appends `id` without checking order; callers copy already sorted lists.
    pub(crate) fn push_sorted(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    fn search<L: Ord>(&self, label: &L, nodes: &[Node<L>]) -> Result<usize, usize> {
        self.ids
            .binary_search_by(|probe| match nodes[probe.index()].stored_label() {
                Some(probe_label) => probe_label.cmp(label),
                None => Ordering::Less,
            })
    }
}

impl<'a> IntoIterator for &'a ChildList {
    type Item = NodeId;
    type IntoIter = Copied<Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
