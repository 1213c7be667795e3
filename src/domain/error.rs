//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input data.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed planting entry (expected block.varietal.clone): {0:?}")]
    MalformedEntry(String),
}
