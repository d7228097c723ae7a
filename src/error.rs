//! Unified error types for solovina.
//!
//! This module provides the error hierarchy for the library, with
//! context chaining for catalog and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

use crate::carousel::CarouselError;

/// Main error type for solovina operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShowcaseError {
    /// Errors while loading or validating a project catalog
    #[error("Failed to load catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// The carousel refused its input
    #[error("Carousel unavailable: {0}")]
    Carousel(#[from] CarouselError),

    /// Reading a catalog or config file failed
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup or teardown failed
    #[error("Terminal error: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A config value could not be used
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Catalog contains no projects")]
    Empty,

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Unknown project '{project_id}' referenced by {context}")]
    UnknownProject { project_id: String, context: String },

    #[error("Progress for '{project_id}' at {month} is {percent}% (must be 0-100)")]
    PercentOutOfRange {
        project_id: String,
        month: String,
        percent: u16,
    },

    #[error("Invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid featured statistics: {0}")]
    InvalidFeatured(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for solovina operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ShowcaseError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a terminal error
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ShowcaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for ShowcaseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// failure deep in catalog loading reads like
/// `"loading data/catalog.yaml: validating catalog: Duplicate project id"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ShowcaseError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: ShowcaseError, new_ctx: &str) -> ShowcaseError {
    match err {
        ShowcaseError::Catalog {
            context: existing,
            source,
        } => ShowcaseError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ShowcaseError::Io {
            path,
            message,
            source,
        } => ShowcaseError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ShowcaseError::Terminal { message, source } => ShowcaseError::Terminal {
            message: chain_context(new_ctx, &message),
            source,
        },
        ShowcaseError::Config(msg) => ShowcaseError::Config(chain_context(new_ctx, &msg)),
        ShowcaseError::Validation(msg) => {
            ShowcaseError::Validation(chain_context(new_ctx, &msg))
        }
        other @ ShowcaseError::Carousel(_) => other,
    }
}

/// `"outer: inner"`, or just `outer` when there is no inner context yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
