// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test modules.
//!
//! - Unit tests across the trie, format, config and error components
//! - Property-based tests using proptest
//! - Shared fixtures and strategies


pub use test_utils::{
    create_test_dir, int_trie_strategy, shape_strategy, string_trie_strategy, Shape, TestFixture,
};
