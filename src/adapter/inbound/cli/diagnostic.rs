//! Miette-based error diagnostics for CLI error presentation.
//!
//! The struct fields are used by miette's derive macros at runtime to
//! render formatted error output with code snippets and annotations.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(riftwatch::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build from a TOML syntax error, pointing at its span when known.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: impl Into<String>) -> Self {
        let (offset, len) = err
            .span()
            .map_or((0, 0), |span| (span.start, span.end.saturating_sub(span.start)));
        Self::new(err.message(), src, offset, len)
            .with_help("see `riftwatch config init` for a documented template")
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
