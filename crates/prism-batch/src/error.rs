//! Error types for the batch protocol.
//!
//! [`QueryError`] rejects a single case and never stops the batch.
//! [`BatchError`] aborts the batch as a whole.

use std::fmt;
use std::io;

use prism_core::GeometryError;

use crate::config::ConfigError;

/// Why a single query was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// One of the nine tokens is not an integer.
    MalformedInput {
        /// 1-based position of the token within the query.
        position: usize,
        /// The token as read.
        token: String,
    },
    /// The integers parse but do not describe a valid box and surface points.
    Geometry(GeometryError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { position, token } => {
                write!(f, "token {position} of 9 is not an integer: {token:?}")
            }
            Self::Geometry(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::MalformedInput { .. } => None,
        }
    }
}

impl From<GeometryError> for QueryError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

/// Errors that abort a batch.
#[derive(Debug)]
pub enum BatchError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The input ended before the case count.
    MissingCount,
    /// The case count is not a non-negative integer.
    InvalidCount {
        /// The token as read.
        token: String,
    },
    /// The input ended before every promised query was read.
    Truncated {
        /// Number of queries the count promised.
        expected: usize,
        /// Number of complete queries actually read.
        found: usize,
    },
    /// Tokens remain after the last promised query.
    TrailingInput {
        /// The first unexpected token.
        token: String,
    },
    /// The batch configuration is invalid.
    Config(ConfigError),
    /// Every worker thread exited before the batch finished.
    WorkersLost,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingCount => write!(f, "input is empty: expected a case count"),
            Self::InvalidCount { token } => {
                write!(f, "case count is not a non-negative integer: {token:?}")
            }
            Self::Truncated { expected, found } => {
                write!(f, "input ended after {found} of {expected} queries")
            }
            Self::TrailingInput { token } => {
                write!(f, "unexpected input after the last query: {token:?}")
            }
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::WorkersLost => write!(f, "worker pool exited before the batch finished"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BatchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for BatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Axis, Query};
    use std::error::Error;

    #[test]
    fn malformed_input_names_position_and_token() {
        let e = QueryError::MalformedInput {
            position: 4,
            token: "1.5".into(),
        };
        assert_eq!(e.to_string(), "token 4 of 9 is not an integer: \"1.5\"");
        assert!(e.source().is_none());
    }

    #[test]
    fn geometry_error_converts_and_chains() {
        let geo = Query::new([0, 1, 1], [0, 0, 0], [0, 0, 0]).unwrap_err();
        assert_eq!(
            geo,
            GeometryError::InvalidDimension {
                axis: Axis::X,
                value: 0
            }
        );
        let e: QueryError = geo.clone().into();
        assert_eq!(e.to_string(), geo.to_string());
        assert!(e.source().is_some());
    }

    #[test]
    fn truncated_display() {
        let e = BatchError::Truncated {
            expected: 3,
            found: 1,
        };
        assert_eq!(e.to_string(), "input ended after 1 of 3 queries");
    }

    #[test]
    fn io_error_converts() {
        let e: BatchError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(e, BatchError::Io(_)));
        assert!(e.source().is_some());
    }

    #[test]
    fn config_error_converts() {
        let e: BatchError = ConfigError::EmptyLabel.into();
        assert!(matches!(e, BatchError::Config(ConfigError::EmptyLabel)));
    }
}
