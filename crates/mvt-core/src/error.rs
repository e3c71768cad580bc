//! # Error Types
//!
//! The toolkit raises exactly one error: the strict root builder rejects an
//! empty leaf list. Every other degenerate case is a value, not an error —
//! the lenient tree builder returns an empty tree, proof generation returns
//! `None` for an absent target, and folding an empty proof returns an empty
//! string. Operations are pure and deterministic, so no error is retryable;
//! a failure repeats identically on the same input.

use thiserror::Error;

/// Error raised by tree construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The strict root builder was given zero leaves. A root is a commitment
    /// to a leaf set; an empty set has nothing to commit to.
    #[error("cannot compute a Merkle root from an empty leaf list")]
    EmptyInput,
}
