//! Batch configuration and validation.

use std::fmt;

use prism_surface::Strategy;

/// Largest accepted number of decimals in result lines.
pub const MAX_DECIMALS: usize = 15;

// ── BatchConfig ────────────────────────────────────────────────────

/// Configuration for a [`BatchRunner`](crate::BatchRunner).
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of solver threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`). `Some(1)` solves
    /// on the caller's thread.
    pub worker_count: Option<usize>,
    /// Decimals printed per distance. Default: 2.
    pub decimals: usize,
    /// Prefix of every result line. Default: `"Universe"`.
    pub label: String,
    /// Face-pairing strategy. Default: [`Strategy::Exhaustive`].
    pub strategy: Strategy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            decimals: 2,
            label: "Universe".into(),
            strategy: Strategy::default(),
        }
    }
}

impl BatchConfig {
    /// Configuration that solves everything on the caller's thread.
    pub fn sequential() -> Self {
        Self {
            worker_count: Some(1),
            ..Self::default()
        }
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == Some(0) {
            return Err(ConfigError::InvalidWorkerCount { configured: 0 });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidPrecision {
                configured: self.decimals,
            });
        }
        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 16),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BatchConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit worker count of zero.
    InvalidWorkerCount {
        /// The configured value.
        configured: usize,
    },
    /// More decimals than an `f64` carries.
    InvalidPrecision {
        /// The configured value.
        configured: usize,
    },
    /// The line label is empty or whitespace.
    EmptyLabel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkerCount { configured } => {
                write!(f, "worker_count must be at least 1, got {configured}")
            }
            Self::InvalidPrecision { configured } => {
                write!(f, "decimals must be at most {MAX_DECIMALS}, got {configured}")
            }
            Self::EmptyLabel => write!(f, "label must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
