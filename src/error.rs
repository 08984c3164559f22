// 🚨 Challenge Errors - Shape vs. value failures
// Every routine that accepts a host value reports one of two kinds

use thiserror::Error;

// ============================================================================
// ERROR KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong container or element type (not a string, not a list, not a record)
    Type,
    /// Right shape, but a field violates a domain constraint
    Value,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Type => "TypeError",
            ErrorKind::Value => "ValueError",
        }
    }
}

// ============================================================================
// CHALLENGE ERROR
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("type error: {0}")]
    Type(String),

    #[error("value error: {0}")]
    Value(String),
}

impl ChallengeError {
    pub fn type_error(message: impl Into<String>) -> Self {
        ChallengeError::Type(message.into())
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        ChallengeError::Value(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ChallengeError::Type(_) => ErrorKind::Type,
            ChallengeError::Value(_) => ErrorKind::Value,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ChallengeError::Type(msg) | ChallengeError::Value(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChallengeError>;

// ============================================================================
// TESTS
// ============================================================================
