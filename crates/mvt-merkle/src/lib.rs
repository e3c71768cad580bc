//! # mvt-merkle — Merkle Tree Engine
//!
//! Builds binary Merkle trees over ordered lists of hex digest strings,
//! generates inclusion proofs, and folds proofs back to a root without
//! reconstructing the tree.
//!
//! ## Structure
//!
//! - [`reduce`] — one level to its parent level; owns the duplicate-last
//!   padding policy for odd-length levels.
//! - [`build`] — full tree construction; strict ([`build_root`]) and
//!   lenient ([`build_tree`]) empty-input variants.
//! - [`proof`] — sibling-path generation and direction-driven folding.
//!
//! ## Crate Policy
//!
//! - Engine functions are pure: no I/O, no shared state, and caller-supplied
//!   slices are never mutated. Padding operates on private copies only.
//! - Digests are opaque strings. Comparison is exact and case-sensitive;
//!   normalization, if wanted, is the caller's concern.
//! - Iterative throughout — tree depth never translates into stack depth.

pub mod build;
pub mod proof;
pub mod reduce;

pub use build::{build_root, build_tree};
pub use proof::{fold_proof, generate_proof, verify_proof, Direction, Proof, ProofNode};
pub use reduce::{pad_level, reduce_level};
