// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node types for the weighted trie.
//!
//! Nodes live in the arena of their [`Trie`] and refer to each other through
//! [`NodeId`]s. The parent reference is non-owning; ownership of a subtree is
//! expressed by the parent's [`ChildList`].

use std::fmt;

use super::child_list::ChildList;
use super::error::{TrieError, TrieResult};
use super::iter::{Ancestors, LeafCursor, Leaves};
use super::label::Label;
use super::Trie;

/// Handle of a node inside the arena of one [`Trie`].
///
/// A `NodeId` is only meaningful for the trie that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the weighted trie.
///
/// The weight is only meaningful while the node is a leaf.
#[derive(Debug, Clone)]
pub struct Node<L> {
    label: Option<L>,
    weight: f64,
    parent: Option<NodeId>,
    pub(crate) children: ChildList,
}

impl<L> Node<L> {
    pub(crate) fn new(label: Option<L>, weight: f64) -> Self {
        Self {
            label,
            weight,
            parent: None,
            children: ChildList::new(),
        }
    }

    /// The node's label; always `None` for a root.
    pub fn label(&self) -> Option<&L> {
        match self.parent {
            Some(_) => self.label.as_ref(),
            None => None,
        }
    }

    /// The stored label, including the label a detached root keeps for
    /// when it is grafted as a child.
    pub fn stored_label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// The node's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The structural parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children in ascending label order.
    pub fn children(&self) -> &ChildList {
        &self.children
    }

    /// `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `true` if the node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn set_stored_label(&mut self, label: L) {
        self.label = Some(label);
    }

    pub(crate) fn set_weight_unchecked(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub(crate) fn add_weight(&mut self, delta: f64) {
        self.weight += delta;
    }
}

/// Structural equality of two subtrees, possibly in different arenas.
///
/// Leaves are equal when their weights are; internal nodes when their child
/// lists carry the same labels and pairwise equal subtrees. A leaf never
/// equals an internal node. Pending pairs live on a heap stack, so deep
/// chains compare without recursion.
pub(crate) fn structurally_equal<L: PartialEq>(
    nodes: &[Node<L>],
    id: NodeId,
    other_nodes: &[Node<L>],
    other_id: NodeId,
) -> bool {
    let mut pending = vec![(id, other_id)];

    while let Some((left_id, right_id)) = pending.pop() {
        let left = &nodes[left_id.index()];
        let right = &other_nodes[right_id.index()];

        match (left.is_leaf(), right.is_leaf()) {
            (true, true) if left.weight == right.weight => {}
            (false, false) if left.children.labels_match(nodes, &right.children, other_nodes) => {
                pending.extend(left.children.iter().zip(right.children.iter()));
            }
            _ => return false,
        }
    }
    true
}

/// Borrowed view of one node together with its trie.
///
/// `NodeRef` is the read-side handle for navigation: parent, children,
/// ancestors, leaves and path lookup all hand out further `NodeRef`s.
pub struct NodeRef<'a, L> {
    trie: &'a Trie<L>,
    id: NodeId,
}

impl<'a, L> Clone for NodeRef<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L> Copy for NodeRef<'a, L> {}

impl<'a, L> NodeRef<'a, L> {
    pub(crate) fn new(trie: &'a Trie<L>, id: NodeId) -> Self {
        Self { trie, id }
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The trie this node belongs to.
    pub fn trie(&self) -> &'a Trie<L> {
        self.trie
    }

    /// The underlying node.
    pub fn node(&self) -> &'a Node<L> {
        &self.trie[self.id]
    }

    /// The node's label; `None` for the root.
    pub fn label(&self) -> Option<&'a L> {
        self.node().label()
    }

    /// The node's weight.
    pub fn weight(&self) -> f64 {
        self.node().weight()
    }

    /// `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// `true` if the node is the root of its trie.
    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, L>> {
        self.node()
            .parent()
            .map(|parent| NodeRef::new(self.trie, parent))
    }

    /// The children in ascending label order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, L>> + 'a {
        let trie = self.trie;
        self.node()
            .children()
            .iter()
            .map(move |child| NodeRef::new(trie, child))
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.node().children().len()
    }

    /// This node followed by its ancestors up to the root.
    pub fn ancestors(&self) -> Ancestors<'a, L> {
        Ancestors::new(self.trie, self.id)
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Cursor positioned on the left-most leaf below this node.
    pub fn leaf_cursor(&self) -> LeafCursor<'a, L> {
        LeafCursor::begin(self.trie, self.id)
    }

    /// The leaves below this node, left to right.
    pub fn leaves(&self) -> Leaves<'a, L> {
        Leaves::new(self.leaf_cursor())
    }
}

impl<'a, L: Label> NodeRef<'a, L> {
    /// The child labelled `label`.
    pub fn child(&self, label: &L) -> Option<NodeRef<'a, L>> {
        self.node()
            .children()
            .find(label, self.trie.nodes())
            .map(|child| NodeRef::new(self.trie, child))
    }

    /// Labels from the root down to this node.
    pub fn path(&self) -> Vec<L> {
        let mut path: Vec<L> = self
            .ancestors()
            .filter_map(|node| node.label().cloned())
            .collect();
        path.reverse();
        path
    }

    /// Descends along `path` as far as labels match.
    ///
    /// Stops at the first label without a matching child and returns the last
    /// node reached; an empty path returns this node.
    pub fn lookup(&self, path: &[L]) -> NodeRef<'a, L> {
        let mut current = *self;
        for label in path {
            match current.child(label) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// The leaf with the greatest weight below this node.
    ///
    /// Ties keep the leaf met first in left-to-right order.
    pub fn max_leaf(&self) -> TrieResult<NodeRef<'a, L>> {
        let mut best: Option<NodeRef<'a, L>> = None;
        for leaf in self.leaves() {
            let heavier = best.map_or(true, |current| leaf.weight() > current.weight());
            if heavier {
                best = Some(leaf);
            }
        }
        best.ok_or(TrieError::EmptyTraversal)
    }
}

impl<'a, 'b, L: PartialEq> PartialEq<NodeRef<'b, L>> for NodeRef<'a, L> {
    fn eq(&self, other: &NodeRef<'b, L>) -> bool {
        structurally_equal(self.trie.nodes(), self.id, other.trie.nodes(), other.id)
    }
}

impl<'a, L: fmt::Debug> fmt::Debug for NodeRef<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("label", &self.label())
            .field("weight", &self.weight())
            .field("children", &self.child_count())
            .finish()
    }
}
