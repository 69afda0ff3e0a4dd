//! Argument errors

/// Result alias for every fallible gear query.
pub type GearResult<T> = Result<T, GearError>;

/// All the possible argument issues we might encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GearError {
    /// (InvalidToothCount) A gear needs at least one tooth
    #[error("(InvalidToothCount) A gear needs at least one tooth, got: {teeth}")]
    InvalidToothCount { teeth: i64 },
}
