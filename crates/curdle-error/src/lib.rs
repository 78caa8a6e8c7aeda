//! Error taxonomy for the curdle score store.
//!
//! Every fallible operation in the workspace returns [`Result`]. The
//! [`CurdleError`] `Display` text is the human-readable diagnostic that the
//! top-level caller reports; there is no shared error state to reset or
//! caller-managed string to free.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = CurdleError> = std::result::Result<T, E>;

/// All failure modes of a score adjustment, first failure wins via `?`.
#[derive(Debug, Error)]
pub enum CurdleError {
    /// Caller-supplied input cannot be represented in a record.
    #[error("invalid input: {detail}")]
    InvalidInput {
        /// What was rejected and why.
        detail: String,
    },

    /// Effective-uid elevation or restoration failed.
    #[error("privilege operation failed: {detail}")]
    Privilege {
        /// The failed uid transition, with the OS error text.
        detail: String,
    },

    /// Open/seek/read/write failure on the score store.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The store violates the fixed-record layout.
    #[error("corrupt score store: {detail}")]
    CorruptStore {
        /// Which structural invariant was violated, and where.
        detail: String,
    },

    /// A structurally valid record holds an unparseable score field.
    #[error("unparseable score record: {detail}")]
    Parse {
        /// The offending field text.
        detail: String,
    },

    /// An accumulated score left the representable range.
    #[error("score {score} outside representable range {min}..={max}")]
    Overflow {
        /// The out-of-range accumulated value.
        score: i128,
        /// Lower bound of the active range.
        min: i64,
        /// Upper bound of the active range.
        max: i64,
    },
}

impl CurdleError {
    /// Construct an [`CurdleError::InvalidInput`].
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            detail: detail.into(),
        }
    }

    /// Construct a [`CurdleError::Privilege`].
    pub fn privilege(detail: impl Into<String>) -> Self {
        Self::Privilege {
            detail: detail.into(),
        }
    }

    /// Construct a [`CurdleError::CorruptStore`].
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::CorruptStore {
            detail: detail.into(),
        }
    }

    /// Construct a [`CurdleError::Parse`].
    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse {
            detail: detail.into(),
        }
    }

    /// Stable taxonomy label, independent of the diagnostic text.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid-input",
            Self::Privilege { .. } => "privilege",
            Self::Io(_) => "io",
            Self::CorruptStore { .. } => "corrupt-store",
            Self::Parse { .. } => "parse",
            Self::Overflow { .. } => "overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_text_names_the_violation() {
        let err = CurdleError::corrupt("record at offset 42 not newline-terminated");
        assert_eq!(
            err.to_string(),
            "corrupt score store: record at offset 42 not newline-terminated"
        );
        assert_eq!(err.kind(), "corrupt-store");
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CurdleError::from(io);
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn overflow_reports_value_and_range() {
        let err = CurdleError::Overflow {
            score: 10_000_000_000,
            min: -999_999_999,
            max: 9_999_999_999,
        };
        assert!(err.to_string().contains("10000000000"));
        assert_eq!(err.kind(), "overflow");
    }
}
