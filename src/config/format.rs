// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text format configuration module.
//!
//! Settings shared by the trie reader and writer.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted indentation step
const MAX_INDENT_WIDTH: usize = 16;

/// Text format configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Spaces per nesting level when writing
    pub indent_width: usize,

    /// Deepest child-list nesting accepted when reading
    pub max_depth: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_depth: 512,
        }
    }
}

impl Validate for FormatConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "format.indent_width".to_string(),
                message: format!("must be between 1 and {MAX_INDENT_WIDTH}"),
            });
        }

        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
