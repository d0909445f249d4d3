// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Indented writer for the trie text format.
//!
//! Output mirrors the grammar read by [`TrieParser`](super::TrieParser):
//!
//! ```text
//! children = {
//!     a 1.5 children = {},
//!     b children = {
//!         c 2.0 children = {}
//!     }
//! }
//! ```
//!
//! Weights use the shortest representation that reads back to the same
//! `f64`, so writing and reading a trie is lossless.

use std::fmt::{self, Display};
use std::io::{self, Write};

use super::parser::CHILDREN_KEYWORD;
use crate::config::FormatConfig;
use crate::data_structures::weighted_trie::{NodeRef, Trie};

/// Pending output while rendering a subtree.
enum Step<'a, L> {
    /// A node to print, at its nesting depth.
    Node { node: NodeRef<'a, L>, depth: usize },
    /// Line break and indentation before a child.
    Separator { first: bool, depth: usize },
    /// The closing brace of a child list.
    Close { depth: usize },
}

/// Writer for the trie text format.
#[derive(Debug, Clone, Default)]
pub struct TrieWriter {
    config: FormatConfig,
}

impl TrieWriter {
    /// Creates a writer with the default format configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given format configuration.
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Writes `trie` followed by a newline to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write<L, W>(&self, sink: &mut W, trie: &Trie<L>) -> io::Result<()>
    where
        L: Display,
        W: Write + ?Sized,
    {
        let mut text = self.to_text(trie);
        text.push('\n');
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }

    /// Returns the text representation of `trie`.
    pub fn to_text<L: Display>(&self, trie: &Trie<L>) -> String {
        let mut text = String::with_capacity(trie.len() * 24);
        // Writing into a String cannot fail.
        let _ = self.render(&mut text, trie.root());
        text
    }

    /// Renders the subtree at `node`, indenting relative to its depth.
    ///
    /// Output is produced from an explicit stack of pending steps, so
    /// arbitrarily deep tries render without recursion.
    pub fn render<L, W>(&self, out: &mut W, node: NodeRef<'_, L>) -> fmt::Result
    where
        L: Display,
        W: fmt::Write + ?Sized,
    {
        let mut steps = vec![Step::Node {
            node,
            depth: node.depth(),
        }];

        while let Some(step) = steps.pop() {
            match step {
                Step::Node { node, depth } => {
                    if let Some(label) = node.label() {
                        write!(out, "{label} ")?;
                    }

                    if node.is_leaf() {
                        write!(out, "{:?} {CHILDREN_KEYWORD} = {{}}", node.weight())?;
                        continue;
                    }

                    write!(out, "{CHILDREN_KEYWORD} = {{")?;
                    steps.push(Step::Close { depth });

                    let children: Vec<_> = node.children().collect();
                    for (position, child) in children.into_iter().enumerate().rev() {
                        steps.push(Step::Node {
                            node: child,
                            depth: depth + 1,
                        });
                        steps.push(Step::Separator {
                            first: position == 0,
                            depth: depth + 1,
                        });
                    }
                }
                Step::Separator { first, depth } => {
                    out.write_str(if first { "\n" } else { ",\n" })?;
                    self.indent(out, depth)?;
                }
                Step::Close { depth } => {
                    out.write_char('\n')?;
                    self.indent(out, depth)?;
                    out.write_char('}')?;
                }
            }
        }
        Ok(())
    }

    fn indent<W: fmt::Write + ?Sized>(&self, out: &mut W, depth: usize) -> fmt::Result {
        write!(out, "{:width$}", "", width = depth * self.config.indent_width)
    }
}
