//! Error handling for hash primitives

use core::fmt;

use dhash_api::{Error as ApiError, Result as ApiResult};

/// The error type for hash primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// `update` or `finalize` called on a state that was already finalized
    UseAfterFinalize {
        /// Algorithm whose state was reused
        algorithm: &'static str,
    },

    /// Processing error during a hash operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hash primitive operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for hash operations
pub type HashResult<T> = Result<T>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::UseAfterFinalize { algorithm } => {
                write!(f, "{} state used after finalization", algorithm)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UseAfterFinalize { algorithm } => {
                ApiError::UseAfterFinalize { context: algorithm }
            }
            Error::Processing { operation, details } => ApiError::Other {
                context: operation,
                message: details,
            },
            Error::Other(msg) => ApiError::Other {
                context: "algorithms",
                message: msg,
            },
        }
    }
}

/// Convert a primitives result to an API result with additional context
#[inline]
pub fn to_api_result<T>(r: Result<T>, ctx: &'static str) -> ApiResult<T> {
    r.map_err(|e| ApiError::from(e).with_context(ctx))
}

// Re-export API error handling traits for convenience
pub use dhash_api::error::ResultExt;

pub mod validate;
