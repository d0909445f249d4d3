// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Weighted labeled trie.
//!
//! A [`Trie`] is a prefix tree whose edges carry labels and whose leaves carry
//! `f64` weights. Siblings are kept in ascending label order and labels are
//! unique among siblings.
//!
//! # Features
//!
//! - Manual assembly with [`Trie::add_child`], [`Trie::set_label`] and
//!   [`Trie::set_weight`]
//! - Structural equality (`==`)
//! - Best-effort path lookup and maximum-weight leaf
//! - Leaf and ancestor traversal
//! - Union of two tries with `+` / `+=`
//! - Path compression of single-child chains
//!
//! # Representation
//!
//! All nodes of a trie are stored in one arena and refer to each other by
//! [`NodeId`]. The parent reference of a node is non-owning. Cloning or moving
//! a trie keeps every parent reference valid because handles are arena
//! relative; grafting a subtree from another trie re-points the parent
//! references of the copy at its new owner.
//!
//! # Example
//!
//! ```
//! use weighted_trie::data_structures::weighted_trie::Trie;
//!
//! let mut a: Trie<i32> = Trie::leaf(2.1);
//! a.set_label(21);
//! let mut b: Trie<i32> = Trie::leaf(81.0);
//! b.set_label(100);
//!
//! let mut root = Trie::new();
//! root.add_child(&a).unwrap();
//! root.add_child(&b).unwrap();
//!
//! assert_eq!(root.leaf_count(), 2);
//! assert_eq!(root.max_leaf().unwrap().label(), Some(&100));
//! assert!(root.add_child(&a).is_err());
//! ```

mod child_list;
mod compress;
mod error;
mod iter;
mod label;
mod node;
mod union;

#[cfg(test)]
mod tests;

use std::ops::Index;

use tracing::debug;

pub use child_list::ChildList;
pub use error::{TrieError, TrieResult};
pub use iter::{Ancestors, LeafCursor, Leaves};
pub use label::{Label, MergeLabel};
pub use node::{Node, NodeId, NodeRef};

/// A weighted labeled trie.
///
/// The root carries no label. A detached trie may hold a stored root label
/// (see [`Trie::set_label`]) which becomes the child's label when the trie is
/// grafted into another with [`Trie::add_child`].
#[derive(Debug, Clone)]
pub struct Trie<L> {
    nodes: Vec<Node<L>>,
    root: NodeId,
}

impl<L> Trie<L> {
    /// Creates a trie consisting of a bare root with weight `0.0`.
    pub fn new() -> Self {
        Self::leaf(0.0)
    }

    /// Creates a single-leaf trie with the given weight.
    pub fn leaf(weight: f64) -> Self {
        Self {
            nodes: vec![Node::new(None, weight)],
            root: NodeId(0),
        }
    }

    /// Handle of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// View of the root node.
    pub fn root(&self) -> NodeRef<'_, L> {
        NodeRef::new(self, self.root)
    }

    /// View of the node `id`, or `None` if `id` is not a node of this trie.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, L>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// View of the node `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this trie.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, L> {
        assert!(id.index() < self.nodes.len(), "node {id} is not part of this trie");
        NodeRef::new(self, id)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the trie is a bare root without children.
    pub fn is_empty(&self) -> bool {
        self[self.root].is_leaf()
    }

    /// The root's weight.
    pub fn weight(&self) -> f64 {
        self[self.root].weight()
    }

    /// The label a detached trie carries for grafting.
    pub fn stored_label(&self) -> Option<&L> {
        self[self.root].stored_label()
    }

    /// Sets the stored root label used when this trie is grafted as a child.
    ///
    /// There is no public way to set a node's parent: parent references are
    /// arena handles and are only written when [`Trie::add_child`] grafts a
    /// copy or when the trie restructures itself.
    pub fn set_label(&mut self, label: L) {
        let root = self.root;
        self.nodes[root.index()].set_stored_label(label);
    }

    /// Sets the root's weight; ignored if the root has children.
    pub fn set_weight(&mut self, weight: f64) {
        self.set_node_weight(self.root, weight);
    }

    /// Sets the weight of node `id`; ignored on internal nodes.
    pub fn set_node_weight(&mut self, id: NodeId, weight: f64) {
        let node = &mut self.nodes[id.index()];
        if node.is_leaf() {
            node.set_weight_unchecked(weight);
        } else {
            debug!(node = %id, weight, "Ignoring weight update on internal node");
        }
    }

    /// Cursor on the left-most leaf of the trie.
    pub fn leaf_cursor(&self) -> LeafCursor<'_, L> {
        self.root().leaf_cursor()
    }

    /// Leaves of the trie, left to right.
    pub fn leaves(&self) -> Leaves<'_, L> {
        self.root().leaves()
    }

    /// Node `id` followed by its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, L> {
        self.node(id).ancestors()
    }

    /// Number of edges between node `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth()
    }

    /// Number of leaves below the root.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Sum of all leaf weights; the root's own weight for a bare root.
    pub fn total_weight(&self) -> f64 {
        if self.is_empty() {
            return self.weight();
        }
        self.leaves().map(|leaf| leaf.weight()).sum()
    }

    pub(crate) fn nodes(&self) -> &[Node<L>] {
        &self.nodes
    }

    fn push(&mut self, node: Node<L>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds `weight` to every leaf below `id`.
    pub(crate) fn broadcast_weight(&mut self, id: NodeId, weight: f64) {
        let leaves: Vec<NodeId> = self.node(id).leaves().map(|leaf| leaf.id()).collect();
        for leaf in leaves {
            self.nodes[leaf.index()].add_weight(weight);
        }
    }

    /// Deep-copies the subtree `src_id` of `src` into this arena.
    ///
    /// The copy is detached: its parent is unset until it is attached. The
    /// parent references inside the copy point at the copied nodes.
    pub(crate) fn copy_subtree(&mut self, src: &Trie<L>, src_id: NodeId) -> NodeId
    where
        L: Clone,
    {
        let source = &src.nodes[src_id.index()];
        let id = self.push(Node::new(source.stored_label().cloned(), source.weight()));
        self.copy_children(id, src, src_id);
        id
    }

    /// Gives the leaf `id` copies of the children of `src_id` in `src`.
    ///
    /// Walks the source subtree with an explicit stack of `(copy, source)`
    /// pairs still waiting for their children.
    pub(crate) fn copy_children(&mut self, id: NodeId, src: &Trie<L>, src_id: NodeId)
    where
        L: Clone,
    {
        let mut pending = vec![(id, src_id)];

        while let Some((dst, from)) = pending.pop() {
            let source = &src.nodes[from.index()];
            let mut children = ChildList::with_capacity(source.children().len());
            for child in source.children().iter() {
                let original = &src.nodes[child.index()];
                let copy = self.push(Node::new(original.stored_label().cloned(), original.weight()));
                children.push_sorted(copy);
                pending.push((copy, child));
            }
            children.update_parent_refs(dst, &mut self.nodes);
            self.nodes[dst.index()].children = children;
        }
    }
}

impl<L: Label> Trie<L> {
    /// Grafts a copy of `subtree` under the root.
    ///
    /// This replaces manual parent assignment: the copy's parent references
    /// are set here, pointing into this trie. See [`Trie::add_child_at`].
    pub fn add_child(&mut self, subtree: &Trie<L>) -> TrieResult<NodeId> {
        self.add_child_at(self.root, subtree)
    }

    /// Grafts a copy of `subtree` as a child of `parent`.
    ///
    /// The child's label is the stored label of `subtree`'s root. The copy is
    /// inserted in label order and its parent references are rewritten to
    /// point into this trie.
    ///
    /// # Errors
    ///
    /// * [`TrieError::MissingLabel`] if `subtree` has no stored label.
    /// * [`TrieError::DuplicateLabel`] if `parent` already has a child with
    ///   that label. The trie is left unchanged.
    pub fn add_child_at(&mut self, parent: NodeId, subtree: &Trie<L>) -> TrieResult<NodeId> {
        let label = subtree.stored_label().ok_or(TrieError::MissingLabel)?;
        if self.nodes[parent.index()]
            .children()
            .find(label, &self.nodes)
            .is_some()
        {
            debug!(parent = %parent, ?label, "Rejecting child with duplicate label");
            return Err(TrieError::duplicate_label(label));
        }

        let child = self.copy_subtree(subtree, subtree.root);
        self.attach(parent, child)?;
        Ok(child)
    }

    /// Creates a new child of `parent` with the given label and weight.
    ///
    /// # Errors
    ///
    /// [`TrieError::DuplicateLabel`] if `parent` already has a child labelled
    /// `label`.
    pub fn insert_child(&mut self, parent: NodeId, label: L, weight: f64) -> TrieResult<NodeId> {
        if self.nodes[parent.index()]
            .children()
            .find(&label, &self.nodes)
            .is_some()
        {
            debug!(parent = %parent, ?label, "Rejecting child with duplicate label");
            return Err(TrieError::duplicate_label(&label));
        }

        let child = self.push(Node::new(Some(label), weight));
        self.attach(parent, child)?;
        Ok(child)
    }

    /// Relabels node `id`, moving it to its new position among its siblings.
    ///
    /// For the root this sets the stored label.
    ///
    /// # Errors
    ///
    /// [`TrieError::DuplicateLabel`] if a sibling already carries `label`.
    /// The trie is left unchanged.
    pub fn set_node_label(&mut self, id: NodeId, label: L) -> TrieResult<()> {
        let Some(parent) = self.nodes[id.index()].parent() else {
            self.nodes[id.index()].set_stored_label(label);
            return Ok(());
        };

        match self.nodes[parent.index()].children().find(&label, &self.nodes) {
            Some(existing) if existing == id => return Ok(()),
            Some(_) => return Err(TrieError::duplicate_label(&label)),
            None => {}
        }

        let mut siblings = self.nodes[parent.index()].children.take();
        siblings.remove(id);
        self.nodes[id.index()].set_stored_label(label);
        let inserted = siblings.insert_ordered(id, &self.nodes);
        self.nodes[parent.index()].children = siblings;
        debug_assert!(inserted, "relabelled node must fit among its siblings");
        Ok(())
    }

    /// Descends from the root along `path` as far as labels match.
    ///
    /// Returns the last node reached; a path whose first label has no
    /// matching child returns the root.
    pub fn lookup(&self, path: &[L]) -> NodeRef<'_, L> {
        self.root().lookup(path)
    }

    /// Like [`Trie::lookup`] but starting at node `id`.
    pub fn lookup_from(&self, id: NodeId, path: &[L]) -> NodeRef<'_, L> {
        self.node(id).lookup(path)
    }

    /// The leaf with the greatest weight; ties keep the left-most leaf.
    ///
    /// # Errors
    ///
    /// [`TrieError::EmptyTraversal`] if the trie has no leaves below the root.
    pub fn max_leaf(&self) -> TrieResult<NodeRef<'_, L>> {
        self.root().max_leaf()
    }

    /// Label path and weight of every leaf, left to right.
    pub fn leaf_paths(&self) -> Vec<(Vec<L>, f64)> {
        self.leaves()
            .map(|leaf| (leaf.path(), leaf.weight()))
            .collect()
    }

    /// Inserts the detached node `child` below `parent` and points its
    /// parent reference at `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> TrieResult<()> {
        let mut children = self.nodes[parent.index()].children.take();
        let inserted = children.insert_ordered(child, &self.nodes);
        self.nodes[parent.index()].children = children;

        if !inserted {
            return Err(match self.nodes[child.index()].stored_label() {
                Some(label) => TrieError::duplicate_label(label),
                None => TrieError::MissingLabel,
            });
        }

        self.nodes[child.index()].set_parent(Some(parent));
        Ok(())
    }
}

impl<L> Default for Trie<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Index<NodeId> for Trie<L> {
    type Output = Node<L>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<L: PartialEq> PartialEq for Trie<L> {
    fn eq(&self, other: &Self) -> bool {
        node::structurally_equal(&self.nodes, self.root, &other.nodes, other.root)
    }
}
