// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level failures.
///
/// `Validation` covers inputs that break a domain constraint and is never
/// retried. `Conflict` is the uniqueness-violation surface, including races
/// lost at commit time when the database constraint fires after a clean
/// pre-check. `Persistence` carries infrastructure failures unchanged and is
/// never downgraded to a validation problem.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
