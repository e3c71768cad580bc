//! # SHA-256 Digest Primitive
//!
//! The single hashing primitive for the toolkit. Three entry points:
//!
//! - [`sha256_hex`] — raw bytes to a lowercase 64-char hex digest.
//! - [`pair_hash`] — the parent rule: hash the textual concatenation of two
//!   hex digests. Shared by the level reducer and the proof fold.
//! - [`leaf_hash`] — hash an external raw value (e.g. an address) into a
//!   leaf digest. Normalization of the value, if any, belongs to the caller.
//!
//! ## Invariant
//!
//! `pair_hash` concatenates the hex *text* of its operands, not their
//! decoded bytes. Concatenation order is load-bearing: proof verification
//! folds siblings with exactly this rule, so the two sides must never
//! disagree on it.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of raw bytes as a lowercase hex string.
///
/// Deterministic and total: any input byte string is accepted, the output
/// is always 64 hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compute a parent digest from an ordered pair of child digests.
///
/// The children are concatenated as hex text (`left ++ right`) and the
/// result is the SHA-256 of those ASCII bytes.
pub fn pair_hash(left: &str, right: &str) -> String {
    let mut input = String::with_capacity(left.len() + right.len());
    input.push_str(left);
    input.push_str(right);
    sha256_hex(input.as_bytes())
}

/// Hash a raw external value into a leaf digest.
///
/// The value is hashed exactly as given. Callers that want case-insensitive
/// membership (the address-verification shell does) must normalize before
/// calling.
pub fn leaf_hash(value: &str) -> String {
    sha256_hex(value.as_bytes())
}
