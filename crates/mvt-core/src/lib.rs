//! # mvt-core — Foundational Primitives for the Merkle Verification Toolkit
//!
//! This crate is the bedrock of the toolkit. It defines the digest primitive
//! and the error hierarchy; the tree engine (`mvt-merkle`) and the CLI shell
//! (`mvt-cli`) both build on it. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One pair-hash rule.** Parent digests are always
//!    `SHA256(left_hex ++ right_hex)` over the *textual* hex concatenation.
//!    Both the level reducer and the proof fold call [`pair_hash()`]; there
//!    is no second code path that could drift.
//!
//! 2. **Digests are opaque strings to everything above this crate.** The
//!    engine compares digests with exact, case-sensitive string equality and
//!    never normalizes. Lowercase output is a property of the producing
//!    primitive, not an invariant the engine enforces on its inputs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mvt-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;

pub use digest::{leaf_hash, pair_hash, sha256_hex};
pub use error::TreeError;
