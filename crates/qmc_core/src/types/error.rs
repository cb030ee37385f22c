//! Error types for quasi-random point generation.
//!
//! Every failure is surfaced to the caller; a failed call leaves the
//! generator's cursor and accumulators exactly as they were, so retrying
//! with the same arguments fails the same way.

use thiserror::Error;

/// Errors raised by generators, randomisers, table loading and configuration.
///
/// # Variants
///
/// - `PrecisionExhausted`: a request runs past the supported point count
/// - `DimensionMismatch`: a table has fewer dimensions than requested
/// - `InvalidResolution`: a lattice resolution is out of range
/// - `MalformedTable`: a generating matrix or vector could not be parsed
/// - `MultipleReplications`: a single-replication call on a multi-replication randomiser
/// - `InvalidConfig`: an inconsistent [`SequenceConfig`](crate::config::SequenceConfig)
/// - `Io`: a table or configuration file could not be read
///
/// # Examples
///
/// ```
/// use qmc_core::types::QmcError;
///
/// let err = QmcError::DimensionMismatch { requested: 1200, available: 1111 };
/// assert!(err.to_string().contains("1200"));
/// ```
#[derive(Error, Debug)]
pub enum QmcError {
    /// The cursor would move past the generator's supported point count.
    #[error("Precision exhausted: {requested} points requested, generator supports {supported}")]
    PrecisionExhausted {
        /// Total number of points the request would reach
        requested: u128,
        /// Maximum number of points the generator supports
        supported: u128,
    },

    /// The supplied table does not provide the requested dimension.
    #[error("Dimension mismatch: requested {requested} dimensions, table provides {available}")]
    DimensionMismatch {
        /// Requested dimension
        requested: usize,
        /// Dimensions available in the table
        available: usize,
    },

    /// A lattice resolution `m` is outside the supported range.
    #[error("Invalid resolution: requested 2^{requested} points, supported up to 2^{supported}")]
    InvalidResolution {
        /// Requested log2 point count
        requested: u32,
        /// Largest supported log2 point count
        supported: u32,
    },

    /// A generating matrix or vector table is not well formed.
    #[error("Malformed table at line {line}: {reason}")]
    MalformedTable {
        /// One-based line number (0 when the table as a whole is at fault)
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// A single-replication operation was called on a randomiser holding several.
    #[error("Randomiser holds {replications} replications; use the replicated API")]
    MultipleReplications {
        /// Number of replications held
        replications: usize,
    },

    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A table or configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QmcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QmcError::PrecisionExhausted {
            requested: 5_000_000_000,
            supported: 4_294_967_296,
        };
        assert!(err.to_string().contains("5000000000"));
        assert!(err.to_string().contains("4294967296"));

        let err = QmcError::InvalidResolution {
            requested: 21,
            supported: 20,
        };
        assert_eq!(
            err.to_string(),
            "Invalid resolution: requested 2^21 points, supported up to 2^20"
        );

        let err = QmcError::MalformedTable {
            line: 3,
            reason: "expected 32 entries, found 31".to_string(),
        };
        assert!(err.to_string().starts_with("Malformed table at line 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.col");
        let err: QmcError = io.into();
        assert!(matches!(err, QmcError::Io(_)));
        assert!(err.to_string().contains("missing.col"));
    }
}
