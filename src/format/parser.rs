// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Recursive-descent reader for the trie text format.
//!
//! Grammar:
//!
//! ```text
//! ROOT     -> LEAF | "children" "=" "{" NODELIST "}"
//! NODELIST -> NODE ("," NODE)*
//! NODE     -> LABEL (LEAF | "children" "=" "{" NODELIST "}")
//! LEAF     -> WEIGHT "children" "=" "{" "}"
//! ```
//!
//! Tokens are the punctuation characters `{`, `}`, `,`, `=` and words, i.e.
//! maximal runs of characters that are neither whitespace nor punctuation.
//! Whitespace between tokens is ignored.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use tracing::trace;

use super::error::{ParseError, ParseErrorKind, DEFAULT_CONTEXT_LENGTH};
use crate::config::FormatConfig;
use crate::data_structures::weighted_trie::{Label, NodeId, Trie, TrieError, TrieResult};

/// Keyword introducing a child list.
pub const CHILDREN_KEYWORD: &str = "children";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'s> {
    OpenBrace,
    CloseBrace,
    Comma,
    Equals,
    Word(&'s str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => f.write_str("{"),
            Token::CloseBrace => f.write_str("}"),
            Token::Comma => f.write_str(","),
            Token::Equals => f.write_str("="),
            Token::Word(word) => f.write_str(word),
        }
    }
}

fn is_punctuation(byte: u8) -> bool {
    matches!(byte, b'{' | b'}' | b',' | b'=')
}

/// Splits the input into tokens, tracking the byte position.
#[derive(Debug, Clone)]
struct Scanner<'s> {
    input: &'s str,
    position: usize,
}

impl<'s> Scanner<'s> {
    fn new(input: &'s str) -> Self {
        Self { input, position: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input.as_bytes()[self.position..];
        let skipped = rest
            .iter()
            .take_while(|byte| byte.is_ascii_whitespace())
            .count();
        self.position += skipped;
    }

    /// Position of the next token.
    fn token_start(&mut self) -> usize {
        self.skip_whitespace();
        self.position
    }

    fn next_token(&mut self) -> Option<Token<'s>> {
        self.skip_whitespace();
        let bytes = self.input.as_bytes();
        let &first = bytes.get(self.position)?;

        let token = match first {
            b'{' => Token::OpenBrace,
            b'}' => Token::CloseBrace,
            b',' => Token::Comma,
            b'=' => Token::Equals,
            _ => {
                let start = self.position;
                let end = bytes[start..]
                    .iter()
                    .position(|&byte| byte.is_ascii_whitespace() || is_punctuation(byte))
                    .map_or(bytes.len(), |offset| start + offset);
                self.position = end;
                return Some(Token::Word(&self.input[start..end]));
            }
        };

        self.position += 1;
        Some(token)
    }

    fn peek_token(&self) -> Option<Token<'s>> {
        self.clone().next_token()
    }

    fn is_at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.position >= self.input.len()
    }

    fn context_at(&self, position: usize) -> String {
        self.input
            .get(position..)
            .unwrap_or_default()
            .chars()
            .take(DEFAULT_CONTEXT_LENGTH)
            .collect()
    }
}

/// Reader for the trie text format.
///
/// # Example
///
/// ```
/// use weighted_trie::format::TrieParser;
/// use weighted_trie::data_structures::weighted_trie::Trie;
///
/// let trie: Trie<char> = TrieParser::new()
///     .parse_str("children = {a 1.5 children = {}, b 2.5 children = {}}")
///     .unwrap();
/// assert_eq!(trie.max_leaf().unwrap().label(), Some(&'b'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieParser {
    config: FormatConfig,
}

impl TrieParser {
    /// Creates a parser with the default format configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given format configuration.
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Parses a complete trie from `input`.
    ///
    /// # Errors
    ///
    /// * [`TrieError::MalformedInput`] for any grammar violation, including
    ///   trailing content after the root.
    /// * [`TrieError::DuplicateLabel`] if two siblings share a label.
    pub fn parse_str<L>(&self, input: &str) -> TrieResult<Trie<L>>
    where
        L: Label + FromStr,
    {
        let mut reader = TrieReader {
            scanner: Scanner::new(input),
            max_depth: self.config.max_depth,
            trie: Trie::new(),
        };

        reader.parse_root()?;

        let end = reader.scanner.token_start();
        if !reader.scanner.is_at_end() {
            return Err(reader.error_at(ParseErrorKind::TrailingInput, end));
        }

        trace!(nodes = reader.trie.len(), "Parsed trie");
        Ok(reader.trie)
    }

    /// Reads the whole of `source` and parses it as a trie.
    ///
    /// # Errors
    ///
    /// As [`TrieParser::parse_str`], plus [`TrieError::Io`] if reading fails.
    pub fn read<L, R>(&self, source: &mut R) -> TrieResult<Trie<L>>
    where
        L: Label + FromStr,
        R: Read + ?Sized,
    {
        let mut input = String::new();
        source.read_to_string(&mut input)?;
        self.parse_str(&input)
    }
}

/// State of one parse run.
struct TrieReader<'s, L> {
    scanner: Scanner<'s>,
    max_depth: usize,
    trie: Trie<L>,
}

impl<'s, L: Label + FromStr> TrieReader<'s, L> {
    fn parse_root(&mut self) -> TrieResult<()> {
        let start = self.scanner.token_start();
        match self.scanner.peek_token() {
            Some(Token::Word(CHILDREN_KEYWORD)) => {
                let root = self.trie.root_id();
                self.parse_children_block(root)
            }
            Some(_) => {
                let weight = self.parse_leaf()?;
                self.trie.set_weight(weight);
                Ok(())
            }
            None => Err(self.error_at(
                ParseErrorKind::UnexpectedEof(format!("a weight or '{CHILDREN_KEYWORD}'")),
                start,
            )),
        }
    }

    /// `"children" "=" "{" NODELIST "}"`
    ///
    /// Nested lists are tracked on an explicit stack of open parents, so the
    /// nesting depth is bounded by `max_depth` only.
    fn parse_children_block(&mut self, parent: NodeId) -> TrieResult<()> {
        self.open_list(1)?;
        let mut open = vec![parent];

        while let Some(&parent) = open.last() {
            let label = self.parse_label()?;

            if let Some(Token::Word(CHILDREN_KEYWORD)) = self.scanner.peek_token() {
                self.open_list(open.len() + 1)?;
                let node = self.trie.insert_child(parent, label, 0.0)?;
                trace!(node = %node, depth = open.len(), "Parsing internal node");
                open.push(node);
                continue;
            }

            let weight = self.parse_leaf()?;
            self.trie.insert_child(parent, label, weight)?;

            // Close finished lists until a comma introduces the next sibling.
            loop {
                let start = self.scanner.token_start();
                match self.scanner.next_token() {
                    Some(Token::Comma) => break,
                    Some(Token::CloseBrace) => {
                        open.pop();
                        if open.is_empty() {
                            return Ok(());
                        }
                    }
                    Some(found) => {
                        return Err(self.error_at(
                            ParseErrorKind::UnexpectedToken {
                                expected: "',' or '}'".to_string(),
                                found: found.to_string(),
                            },
                            start,
                        ))
                    }
                    None => {
                        return Err(self.error_at(
                            ParseErrorKind::UnexpectedEof("',' or '}'".to_string()),
                            start,
                        ))
                    }
                }
            }
        }
        Ok(())
    }

    /// `"children" "=" "{"` opening a list at nesting level `depth`.
    fn open_list(&mut self, depth: usize) -> TrieResult<()> {
        if depth > self.max_depth {
            let start = self.scanner.token_start();
            return Err(self.error_at(ParseErrorKind::TooDeep(self.max_depth), start));
        }

        self.expect_keyword(CHILDREN_KEYWORD)?;
        self.expect(Token::Equals)?;
        self.expect(Token::OpenBrace)
    }

    fn parse_label(&mut self) -> TrieResult<L> {
        let start = self.scanner.token_start();
        match self.scanner.next_token() {
            Some(Token::Word(word)) => L::from_str(word)
                .map_err(|_| self.error_at(ParseErrorKind::InvalidLabel(word.to_string()), start)),
            Some(found) => Err(self.error_at(
                ParseErrorKind::UnexpectedToken {
                    expected: "a label".to_string(),
                    found: found.to_string(),
                },
                start,
            )),
            None => Err(self.error_at(ParseErrorKind::UnexpectedEof("a label".to_string()), start)),
        }
    }

    /// `WEIGHT "children" "=" "{" "}"`
    fn parse_leaf(&mut self) -> TrieResult<f64> {
        let start = self.scanner.token_start();
        let weight = match self.scanner.next_token() {
            Some(Token::Word(word)) => match word.parse::<f64>() {
                Ok(weight) if !weight.is_nan() => weight,
                _ => {
                    return Err(self.error_at(ParseErrorKind::InvalidWeight(word.to_string()), start))
                }
            },
            Some(found) => {
                return Err(self.error_at(ParseErrorKind::InvalidWeight(found.to_string()), start))
            }
            None => {
                return Err(self.error_at(ParseErrorKind::UnexpectedEof("a weight".to_string()), start))
            }
        };

        self.expect_keyword(CHILDREN_KEYWORD)?;
        self.expect(Token::Equals)?;
        self.expect(Token::OpenBrace)?;
        self.expect(Token::CloseBrace)?;
        Ok(weight)
    }

    fn expect_keyword(&mut self, keyword: &str) -> TrieResult<()> {
        let start = self.scanner.token_start();
        match self.scanner.next_token() {
            Some(Token::Word(word)) if word == keyword => Ok(()),
            Some(found) => Err(self.error_at(
                ParseErrorKind::UnexpectedToken {
                    expected: format!("'{keyword}'"),
                    found: found.to_string(),
                },
                start,
            )),
            None => Err(self.error_at(ParseErrorKind::UnexpectedEof(format!("'{keyword}'")), start)),
        }
    }

    fn expect(&mut self, expected: Token<'static>) -> TrieResult<()> {
        let start = self.scanner.token_start();
        match self.scanner.next_token() {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(self.error_at(
                ParseErrorKind::UnexpectedToken {
                    expected: format!("'{expected}'"),
                    found: found.to_string(),
                },
                start,
            )),
            None => Err(self.error_at(ParseErrorKind::UnexpectedEof(format!("'{expected}'")), start)),
        }
    }

    fn error_at(&self, kind: ParseErrorKind, position: usize) -> TrieError {
        TrieError::MalformedInput(ParseError::new(
            kind,
            position,
            self.scanner.context_at(position),
        ))
    }
}
