// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text format for weighted tries.
//!
//! A trie is written as nested child lists. Internal nodes (and an internal
//! root, without label) are `children = { ... }`, leaves are
//! `<label> <weight> children = {}`, and a single-leaf trie is
//! `<weight> children = {}`.
//!
//! Besides [`TrieParser`] and [`TrieWriter`], [`Trie`] implements
//! [`FromStr`] and [`Display`](fmt::Display) with the default configuration.
//!
//! # Example
//!
//! ```
//! use weighted_trie::data_structures::weighted_trie::Trie;
//!
//! let trie: Trie<String> = "children = {a 1.5 children = {}, b 2.5 children = {}}"
//!     .parse()
//!     .unwrap();
//! let text = trie.to_string();
//! assert_eq!(text.parse::<Trie<String>>().unwrap(), trie);
//! ```

mod error;
mod parser;
mod writer;

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

pub use error::{ParseError, ParseErrorKind, DEFAULT_CONTEXT_LENGTH};
pub use parser::{TrieParser, CHILDREN_KEYWORD};
pub use writer::TrieWriter;

use crate::data_structures::weighted_trie::{Label, Trie, TrieError, TrieResult};

/// Parses `input` with the default configuration.
pub fn parse_str<L: Label + FromStr>(input: &str) -> TrieResult<Trie<L>> {
    TrieParser::new().parse_str(input)
}

/// Reads a trie from `source` with the default configuration.
pub fn read_trie<L, R>(source: &mut R) -> TrieResult<Trie<L>>
where
    L: Label + FromStr,
    R: Read + ?Sized,
{
    TrieParser::new().read(source)
}

/// Returns the text of `trie` with the default configuration.
pub fn to_text<L: fmt::Display>(trie: &Trie<L>) -> String {
    TrieWriter::new().to_text(trie)
}

/// Writes `trie` to `sink` with the default configuration.
pub fn write_trie<L, W>(sink: &mut W, trie: &Trie<L>) -> TrieResult<()>
where
    L: fmt::Display,
    W: Write + ?Sized,
{
    TrieWriter::new().write(sink, trie)?;
    Ok(())
}

impl<L: Label + FromStr> FromStr for Trie<L> {
    type Err = TrieError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_str(input)
    }
}

impl<L: fmt::Display> fmt::Display for Trie<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TrieWriter::new().render(f, self.root())
    }
}
