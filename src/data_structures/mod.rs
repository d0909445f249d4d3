// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures.
//!
//! Single-threaded, exclusively owned structures; no unsafe code.

pub mod weighted_trie;

// Re-export common data structures
pub use weighted_trie::{Trie, TrieError, TrieResult};
