// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for child lists, cursors and relabeling.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::weighted_trie::{ChildList, Node, NodeId, Trie};
use crate::tests::{int_trie_strategy, string_trie_strategy};

// Strategy for arenas of labelled, detached nodes
fn arena_strategy() -> impl Strategy<Value = Vec<Node<i32>>> {
    prop::collection::vec(-20i32..20, 0..40).prop_map(|labels| {
        labels
            .into_iter()
            .map(|label| Node::new(Some(label), 1.0))
            .collect()
    })
}

proptest! {
    // Property: the list stays sorted and holds exactly one node per distinct label
    #[test]
    fn prop_insert_ordered_sorted_and_unique(nodes in arena_strategy()) {
        let mut list = ChildList::new();
        let mut seen = BTreeSet::new();

        for index in 0..nodes.len() {
            let label = nodes[index].stored_label().copied();
            let fresh = label.map_or(false, |label| seen.insert(label));

            let before = list.clone();
            let inserted = list.insert_ordered(NodeId(index), &nodes);
            prop_assert_eq!(inserted, fresh);
            if !inserted {
                prop_assert_eq!(&list, &before);
            }
        }

        let labels: Vec<i32> = list
            .iter()
            .filter_map(|id| nodes[id.index()].stored_label().copied())
            .collect();
        let expected: Vec<i32> = seen.into_iter().collect();
        prop_assert_eq!(labels, expected);
    }

    // Property: find agrees with a linear scan
    #[test]
    fn prop_find_matches_scan(nodes in arena_strategy(), probe in -25i32..25) {
        let mut list = ChildList::new();
        for index in 0..nodes.len() {
            let _ = list.insert_ordered(NodeId(index), &nodes);
        }

        let scanned = list
            .iter()
            .find(|id| nodes[id.index()].stored_label() == Some(&probe));
        prop_assert_eq!(list.find(&probe, &nodes), scanned);
    }

    // Property: the cursor protocol and the iterator visit the same leaves
    #[test]
    fn prop_cursor_matches_iterator(trie in string_trie_strategy()) {
        let mut cursor = trie.leaf_cursor();
        let mut visited = Vec::new();
        while let Ok(leaf) = cursor.current() {
            visited.push(leaf.id());
            cursor.advance();
        }
        prop_assert!(cursor.is_end());

        let iterated: Vec<NodeId> = trie.leaves().map(|leaf| leaf.id()).collect();
        prop_assert_eq!(visited, iterated);
    }

    // Property: each subtree's leaves are a contiguous run of the trie's leaves
    #[test]
    fn prop_subtree_leaves_are_contiguous(trie in int_trie_strategy()) {
        let all: Vec<NodeId> = trie.leaves().map(|leaf| leaf.id()).collect();

        for child in trie.root().children() {
            let below: Vec<NodeId> = child.leaves().map(|leaf| leaf.id()).collect();
            if child.is_leaf() {
                prop_assert_eq!(&below, &vec![child.id()]);
            }
            let start = all.iter().position(|id| *id == below[0]);
            prop_assert!(start.is_some());
            let start = start.unwrap_or_default();
            prop_assert_eq!(&all[start..start + below.len()], below.as_slice());
        }
    }

    // Property: ancestors end at the root and depth equals path length
    #[test]
    fn prop_ancestors_reach_root(trie in int_trie_strategy()) {
        for leaf in trie.leaves() {
            let chain: Vec<NodeId> = leaf.ancestors().map(|node| node.id()).collect();
            prop_assert_eq!(chain.first().copied(), Some(leaf.id()));
            prop_assert_eq!(chain.last().copied(), Some(trie.root_id()));
            prop_assert_eq!(leaf.depth(), leaf.path().len());
            prop_assert_eq!(trie.lookup(&leaf.path()).id(), leaf.id());
        }
    }

    // Property: relabeling to a fresh label keeps siblings sorted
    #[test]
    fn prop_relabel_keeps_order(trie in int_trie_strategy(), fresh in 100i64..200) {
        let mut trie: Trie<i64> = trie;
        let Some(first) = trie.root().children().next().map(|child| child.id()) else {
            return Ok(());
        };

        trie.set_node_label(first, fresh).unwrap();
        let labels: Vec<i64> = trie
            .root()
            .children()
            .filter_map(|child| child.label().copied())
            .collect();
        prop_assert_eq!(labels.last().copied(), Some(fresh));
        prop_assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
