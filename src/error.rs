//! Typed errors. Callers pattern-match the tags below; nothing here is a
//! stringly-typed escape hatch, following the teacher crate's use of
//! `thiserror` for its single `Unsolvable` type.

use thiserror::Error;

/// Why a puzzle or solution string failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The string's length did not match `w^4`.
    #[error("puzzle length {actual} does not match the expected {expected} cells")]
    BadLength { expected: usize, actual: usize },

    /// A character outside `{'.', '0'..=char(n)}` was found.
    #[error("invalid character {ch:?} at position {index}")]
    BadChar { index: usize, ch: char },

    /// A non-empty digit repeats within some row, column, or block.
    #[error("digit repeats within house #{house_index}")]
    DuplicateInHouse { house_index: usize },
}

/// Errors from the solver, scorer, and generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SudokuError {
    /// The input string failed [`ValidationError`] checks.
    #[error("invalid puzzle input: {0}")]
    Validation(#[from] ValidationError),

    /// Propagation hit a dead cell before search, or search exhausted every
    /// branch without finding a completion.
    #[error("puzzle has no solution")]
    Unsolvable,

    /// The scorer required a unique solution but the solver found more than one.
    #[error("puzzle does not have a unique solution")]
    NonUnique,

    /// Hole-punching could not produce a unique-solution puzzle within its
    /// retry budget.
    #[error("failed to generate a puzzle: {0}")]
    GenerationError(String),

    /// The scorer's reconstructed solution disagreed with the one supplied.
    /// This indicates a bug in this crate, not a malformed input.
    #[error("internal inconsistency while scoring: {0}")]
    Internal(String),
}
