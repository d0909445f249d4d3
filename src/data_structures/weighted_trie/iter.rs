// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Traversal over the weighted trie.
//!
//! Two traversals are provided:
//!
//! - [`Ancestors`] walks from a node up to the root.
//! - [`LeafCursor`] / [`Leaves`] visit the leaves below a node left to right.
//!   Advancing from a leaf walks up until an ancestor has a sibling after the
//!   node just left, then descends to that sibling's left-most leaf.

use std::iter::FusedIterator;

use super::error::{TrieError, TrieResult};
use super::node::{NodeId, NodeRef};
use super::Trie;

/// Iterator from a node up to the root, both included.
#[derive(Debug)]
pub struct Ancestors<'a, L> {
    trie: &'a Trie<L>,
    next: Option<NodeId>,
}

impl<'a, L> Ancestors<'a, L> {
    pub(crate) fn new(trie: &'a Trie<L>, start: NodeId) -> Self {
        Self {
            trie,
            next: Some(start),
        }
    }
}

impl<'a, L> Iterator for Ancestors<'a, L> {
    type Item = NodeRef<'a, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.trie[current].parent();
        Some(NodeRef::new(self.trie, current))
    }
}

impl<'a, L> FusedIterator for Ancestors<'a, L> {}

/// Cursor over the leaves below a scope node.
///
/// The cursor starts on the left-most leaf and moves right with
/// [`advance`](LeafCursor::advance). Once past the last leaf it sits on the
/// end sentinel, where [`current`](LeafCursor::current) fails with
/// [`TrieError::EmptyTraversal`]. A childless, labelless root has no
/// leaves; any other childless scope is its own single leaf.
#[derive(Debug)]
pub struct LeafCursor<'a, L> {
    trie: &'a Trie<L>,
    scope: NodeId,
    current: Option<NodeId>,
}

impl<'a, L> LeafCursor<'a, L> {
    pub(crate) fn begin(trie: &'a Trie<L>, scope: NodeId) -> Self {
        let node = &trie[scope];
        let current = if node.is_leaf() && node.is_root() && node.stored_label().is_none() {
            None
        } else {
            Some(leftmost_leaf(trie, scope))
        };

        Self {
            trie,
            scope,
            current,
        }
    }

    /// `true` once the cursor has moved past the last leaf.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The leaf under the cursor.
    pub fn current(&self) -> TrieResult<NodeRef<'a, L>> {
        self.current
            .map(|id| NodeRef::new(self.trie, id))
            .ok_or(TrieError::EmptyTraversal)
    }

    /// Moves to the next leaf; a no-op on the end sentinel.
    pub fn advance(&mut self) {
        let Some(mut node) = self.current else {
            return;
        };

        self.current = loop {
            if node == self.scope {
                break None;
            }
            let Some(parent) = self.trie[node].parent() else {
                break None;
            };
            if let Some(sibling) = self.trie[parent].children().next_after(node) {
                break Some(leftmost_leaf(self.trie, sibling));
            }
            node = parent;
        };
    }
}

fn leftmost_leaf<L>(trie: &Trie<L>, mut id: NodeId) -> NodeId {
    while let Some(first) = trie[id].children().first() {
        id = first;
    }
    id
}

/// Iterator over the leaves below a node, left to right.
#[derive(Debug)]
pub struct Leaves<'a, L> {
    cursor: LeafCursor<'a, L>,
}

impl<'a, L> Leaves<'a, L> {
    pub(crate) fn new(cursor: LeafCursor<'a, L>) -> Self {
        Self { cursor }
    }
}

impl<'a, L> Iterator for Leaves<'a, L> {
    type Item = NodeRef<'a, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let leaf = self.cursor.current().ok()?;
        self.cursor.advance();
        Some(leaf)
    }
}

impl<'a, L> FusedIterator for Leaves<'a, L> {}

#[cfg(test)]
mod tests {
    use crate::data_structures::weighted_trie::Trie;

    fn sample() -> Trie<char> {
        "children = {
            a children = {
                x 1.0 children = {},
                y 2.0 children = {}
            },
            b 3.0 children = {},
            c children = {
                z children = {
                    w 4.0 children = {}
                }
            }
        }"
        .parse()
        .expect("sample parses")
    }

    #[test]
    fn test_leaves_left_to_right() {
        let trie = sample();
        let labels: Vec<char> = trie
            .leaves()
            .map(|leaf| *leaf.label().expect("leaf has a label"))
            .collect();
        assert_eq!(labels, vec!['x', 'y', 'b', 'w']);
    }

    #[test]
    fn test_cursor_reaches_end_once() {
        let trie = sample();
        let mut cursor = trie.leaf_cursor();
        let mut visited = 0;
        while !cursor.is_end() {
            assert!(cursor.current().is_ok());
            cursor.advance();
            visited += 1;
        }
        assert_eq!(visited, 4);
        assert!(cursor.current().is_err());

        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn test_subtree_leaves_stay_in_scope() {
        let trie = sample();
        let a = trie.lookup(&['a']);
        let labels: Vec<char> = a.leaves().map(|leaf| *leaf.label().unwrap()).collect();
        assert_eq!(labels, vec!['x', 'y']);
    }

    #[test]
    fn test_bare_root_has_no_leaves() {
        let trie: Trie<char> = Trie::leaf(2.0);
        assert_eq!(trie.leaves().count(), 0);
        assert!(trie.leaf_cursor().is_end());
    }

    #[test]
    fn test_labelled_leaf_is_its_own_leaf() {
        let trie = sample();
        let b = trie.lookup(&['b']);
        let leaves: Vec<_> = b.leaves().map(|leaf| leaf.id()).collect();
        assert_eq!(leaves, vec![b.id()]);

        let mut single: Trie<char> = Trie::leaf(3.0);
        single.set_label('s');
        let mut cursor = single.leaf_cursor();
        assert_eq!(cursor.current().unwrap().weight(), 3.0);
        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn test_ancestors_reach_root() {
        let trie = sample();
        let w = trie.lookup(&['c', 'z', 'w']);
        let labels: Vec<Option<char>> = w.ancestors().map(|node| node.label().copied()).collect();
        assert_eq!(labels, vec![Some('w'), Some('z'), Some('c'), None]);
        assert_eq!(w.depth(), 3);
        assert_eq!(w.path(), vec!['c', 'z', 'w']);
    }
}
