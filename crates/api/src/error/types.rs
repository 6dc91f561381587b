//! Error type definitions for hashing operations

/// Primary error type for hashing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Invalid construction parameter
    InvalidParameter {
        /// Parameter or operation name
        context: &'static str,
        /// What was wrong with it
        message: &'static str,
    },

    /// A hash state was updated or finalized after it had already been finalized
    UseAfterFinalize {
        /// Algorithm whose state was misused
        context: &'static str,
    },

    /// A known-answer self test did not reproduce its expected digest
    SelfTestFailed {
        /// Name of the failing vector
        context: &'static str,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Additional details
        message: &'static str,
    },
}

/// Result type for hashing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::UseAfterFinalize { .. } => Self::UseAfterFinalize { context },
            Self::SelfTestFailed { .. } => Self::SelfTestFailed { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// True for the misuse class of errors (state reused after finalization)
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::UseAfterFinalize { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::UseAfterFinalize { context } => {
                write!(f, "{}: hash state used after finalization", context)
            }
            Self::SelfTestFailed { context } => {
                write!(f, "Self test failed: {}", context)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
