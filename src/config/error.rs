//! Load error types
//!
//! Every fatal error names the offending field path so the caller can report
//! it verbatim and abort.

use std::fmt;
use std::path::PathBuf;

/// Result type for loading configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fatal configuration load error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ConfigError {
    /// Schema violation carried by this error, if any
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            Self::Io { .. } | Self::Parse(_) => None,
        }
    }
}

/// The document is not well-formed YAML
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ParseError {
    pub message: String,

    /// 1-based line, when the parser reports one
    pub line: Option<usize>,

    /// 1-based column, when the parser reports one
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(
                f,
                "Failed to parse YAML config at line {line} column {column}: {}",
                self.message
            ),
            _ => write!(f, "Failed to parse YAML config: {}", self.message),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        Self {
            message: err.to_string(),
            line: location.as_ref().map(serde_yaml::Location::line),
            column: location.as_ref().map(serde_yaml::Location::column),
        }
    }
}

/// Well-formed YAML that violates the schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required field: {path}")]
    Missing { path: String },

    #[error("Invalid type for {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Invalid value for {path}: {value} (allowed: {})", allowed.join(", "))]
    NotAllowed {
        path: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid range for {path}: {value} (expected {constraint})")]
    OutOfRange {
        path: String,
        value: String,
        constraint: String,
    },

    #[error("Invalid parameter {path}: {reason}")]
    InvalidParameter { path: String, reason: String },
}

impl SchemaError {
    /// Dotted path of the offending field
    pub fn path(&self) -> &str {
        match self {
            Self::Missing { path }
            | Self::TypeMismatch { path, .. }
            | Self::NotAllowed { path, .. }
            | Self::OutOfRange { path, .. }
            | Self::InvalidParameter { path, .. } => path,
        }
    }
}
