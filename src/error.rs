use thiserror::Error;

/// Reasons a code table could not be built.
///
/// None of these are recoverable by retrying: the input has to change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No symbols were supplied.
    #[error("cannot build a code for an empty alphabet")]
    EmptyAlphabet,
    /// The symbol at `position` already appeared earlier in the input.
    #[error("symbol at position {position} appears more than once")]
    DuplicateSymbol { position: usize },
    /// More nodes were pushed than the queue was sized for. Never happens
    /// while every merge removes two nodes and inserts one.
    #[error("priority queue capacity of {capacity} nodes exceeded")]
    CapacityExceeded { capacity: usize },
    /// The sum of two weights does not fit in a `usize`.
    #[error("total weight overflows usize")]
    WeightOverflow,
}
