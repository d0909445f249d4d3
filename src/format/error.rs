// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the trie text format.

use std::fmt;

/// Number of input bytes shown as context in parse errors
pub const DEFAULT_CONTEXT_LENGTH: usize = 40;

/// What went wrong while reading the text format.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A keyword or punctuation did not match.
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// The token the grammar required.
        expected: String,
        /// The token actually present.
        found: String,
    },

    /// A weight could not be parsed as a floating-point value.
    #[error("expected a weight, found '{0}'")]
    InvalidWeight(String),

    /// A label could not be parsed as the label type.
    #[error("expected a label, found '{0}'")]
    InvalidLabel(String),

    /// The input ended while a token was still required.
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(String),

    /// Non-whitespace content follows the root.
    #[error("unexpected trailing input")]
    TrailingInput,

    /// Nesting is deeper than the configured maximum.
    #[error("nesting exceeds maximum depth of {0}")]
    TooDeep(usize),
}

/// Parse error with the byte position and a snippet of the input there.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
    context: String,
}

impl ParseError {
    /// Creates a parse error.
    pub fn new(kind: ParseErrorKind, position: usize, context: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            context: context.into(),
        }
    }

    /// The error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset where the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Input following the error position.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;
        if !self.context.is_empty() {
            write!(f, " (near '{}')", self.context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
