use thiserror::Error;

/// The only way a query can fail.
///
/// Every strategy reports a miss with the same value, so callers never need
/// to know which structure answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LookupError {
    #[error("no entry matches the requested key")]
    NotFound,
}

/// Returned when a strategy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lookup strategy `{0}` (expected `linear`, `sorted-binary` or `hash`)")]
pub struct ParseStrategyError(pub String);
