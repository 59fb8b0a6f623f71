//! Error types for the styled-system core.
//!
//! Styling data never fails: unknown tokens, unknown media conditions and
//! malformed values all degrade to literal output. The errors here cover the
//! structural cases only: reading configuration and using a context outside
//! of the provider that owns it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by configuration loading and context lookup.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A context accessor was called outside of its provider scope.
    #[error("{accessor} must be used within a `{provider}` scope")]
    MissingProvider {
        /// The accessor that was called (e.g. `use_theme`).
        accessor: &'static str,
        /// The provider that must enclose the call.
        provider: &'static str,
    },

    /// Theme configuration or style document could not be parsed.
    #[error("failed to parse {what}{}: {message}", location(.path))]
    ConfigParse {
        /// What was being parsed (e.g. "theme config").
        what: &'static str,
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Parser error message.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported config format for {}: expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A color mode name other than `light`, `dark` or `system`.
    #[error("unknown color mode `{0}`: expected light, dark or system")]
    UnknownColorMode(String),

    /// I/O error while reading configuration.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl StyleError {
    pub(crate) fn yaml(what: &'static str, path: Option<PathBuf>, err: serde_yaml::Error) -> Self {
        StyleError::ConfigParse {
            what,
            path,
            message: err.to_string(),
        }
    }

    pub(crate) fn json(what: &'static str, path: Option<PathBuf>, err: serde_json::Error) -> Self {
        StyleError::ConfigParse {
            what,
            path,
            message: err.to_string(),
        }
    }
}

/// Result type for stylekit operations.
pub type Result<T> = std::result::Result<T, StyleError>;
