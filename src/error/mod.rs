// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the weighted trie tools.
//!
//! Library operations report [`TrieError`](crate::data_structures::weighted_trie::TrieError);
//! this module wraps those together with configuration and I/O failures
//! into [`AppError`] and provides error reporting through `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::weighted_trie::TrieError;

pub mod config;

/// Result type alias used by the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations, including reading the text format.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors for JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: AppError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: AppError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Installs the global error reporter.
///
/// Returns `false` if a reporter was already installed; the first one stays.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Reports `context` through the global reporter, or to stderr if none is
/// installed.
pub fn report_error(context: &ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
