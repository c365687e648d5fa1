//! Contest error types.

use super::types::Id;

/// Errors returned by contest operations.
///
/// Validation errors are reported before anything is mutated. An
/// [`OutOfMemory`](ContestError::OutOfMemory) from an insertion likewise
/// leaves the contest as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContestError {
    /// An id is negative, out of range, or repeated where ids must be distinct.
    #[error("invalid id: {0}")]
    InvalidId(i64),

    /// A name contains characters other than lowercase letters and spaces.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("state {0} already exists")]
    StateAlreadyExists(Id),

    #[error("state {0} does not exist")]
    StateNotExist(Id),

    #[error("judge {0} already exists")]
    JudgeAlreadyExists(Id),

    #[error("judge {0} does not exist")]
    JudgeNotExist(Id),

    /// A state tried to vote for itself.
    #[error("state {0} cannot vote for itself")]
    SameState(Id),

    /// Audience percentage outside `1..=100`.
    #[error("audience percent must be in 1..=100, got {0}")]
    InvalidPercent(i64),

    /// Scoring configuration failed validation.
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("out of memory")]
    OutOfMemory,
}

/// Result alias for contest operations.
pub type ContestResult<T> = Result<T, ContestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ContestError::InvalidId(-3).to_string(), "invalid id: -3");
        assert_eq!(
            ContestError::InvalidName("Spain".into()).to_string(),
            "invalid name: \"Spain\""
        );
        assert_eq!(
            ContestError::InvalidPercent(0).to_string(),
            "audience percent must be in 1..=100, got 0"
        );
        assert_eq!(ContestError::SameState(4).to_string(), "state 4 cannot vote for itself");
    }
}
