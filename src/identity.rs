//! Identifier generation shared by the task and project contexts.
//!
//! Identifiers are ULIDs: lexicographic order approximates creation order, so
//! listing records by identifier reads chronologically without consulting
//! timestamps.

use std::fmt;
use std::sync::Mutex;
use thiserror::Error;
use ulid::{Generator, Ulid};

/// Errors raised while minting identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdGenerationError {
    /// The random component overflowed within a single millisecond.
    #[error("identifier space exhausted for the current millisecond")]
    Exhausted,
    /// The generator lock was poisoned by a panicking holder.
    #[error("identifier generator unavailable: {0}")]
    Unavailable(String),
}

/// Source of new, globally unique, sortable identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenerationError`] when no identifier can be produced.
    fn next_ulid(&self) -> Result<Ulid, IdGenerationError>;
}

/// ULID generator that stays strictly increasing within one process.
///
/// Two identifiers minted in the same millisecond still compare in mint order.
#[derive(Default)]
pub struct MonotonicUlidGenerator {
    inner: Mutex<Generator>,
}

impl MonotonicUlidGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for MonotonicUlidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonotonicUlidGenerator").finish_non_exhaustive()
    }
}

impl IdGenerator for MonotonicUlidGenerator {
    fn next_ulid(&self) -> Result<Ulid, IdGenerationError> {
        let mut generator = self
            .inner
            .lock()
            .map_err(|err| IdGenerationError::Unavailable(err.to_string()))?;
        generator
            .generate()
            .map_err(|_| IdGenerationError::Exhausted)
    }
}
