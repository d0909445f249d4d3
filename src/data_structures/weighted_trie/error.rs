// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the weighted trie.
//!
//! This module defines the error types that can occur while building,
//! traversing, reading or restructuring a [`Trie`](super::Trie).

use crate::format::ParseError;

/// Errors that can occur in weighted trie operations.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// A sibling with the same label already exists.
    #[error("There is already a child with label {label}")]
    DuplicateLabel {
        /// Debug rendering of the rejected label.
        label: String,
    },

    /// The text representation of a trie violates the grammar.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] ParseError),

    /// A leaf was requested where none exists (end sentinel, leafless tree).
    #[error("Traversal is empty: no leaf at this position")]
    EmptyTraversal,

    /// A subtree without a stored label cannot become a child.
    #[error("Subtree has no label and cannot be added as a child")]
    MissingLabel,

    /// Reading or writing the text representation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrieError {
    /// Creates a [`TrieError::DuplicateLabel`] for `label`.
    pub fn duplicate_label<L: std::fmt::Debug>(label: &L) -> Self {
        Self::DuplicateLabel {
            label: format!("{label:?}"),
        }
    }
}

/// Result type for weighted trie operations
pub type TrieResult<T> = Result<T, TrieError>;
