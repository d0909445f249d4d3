// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Weighted Trie Library
//!
//! A labeled prefix tree whose leaves carry weights, with an ordered child
//! list per node, a text format, union and path compression.
//!
//! # Architecture
//!
//! - [`data_structures::weighted_trie`]: the trie, its child lists and
//!   traversals
//! - [`format`]: reading and writing the text format
//! - [`config`]: layered configuration for the format and logging
//! - [`error`]: application errors and error reporting
//!
//! # Example
//!
//! ```
//! use weighted_trie::Trie;
//!
//! let left: Trie<String> = "1.0 children = {}".parse().unwrap();
//! let right: Trie<String> = "children = {a 2.0 children = {}}".parse().unwrap();
//! let expected: Trie<String> = "children = {a 3.0 children = {}}".parse().unwrap();
//! assert_eq!(&left + &right, expected);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod format;

#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::weighted_trie::{NodeId, NodeRef, Trie, TrieError, TrieResult};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    let installed =
        error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    if !installed {
        tracing::debug!("Error reporter already installed");
    }
}
