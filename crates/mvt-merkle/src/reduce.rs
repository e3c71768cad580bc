//! # Level Reducer
//!
//! Produces a parent level from one level of digests: adjacent digests are
//! paired in order and each pair is hashed into one parent digest. An
//! odd-length level is first padded by duplicating its last element, so the
//! final digest pairs with a copy of itself rather than being carried up
//! unpaired.
//!
//! ## Invariant
//!
//! Both functions copy; the caller's slice is never touched. A level of
//! length ≤ 1 passes through unchanged — the builder treats a single digest
//! as terminal and never reduces it.

use mvt_core::pair_hash;

/// Return a copy of `level`, padded to even length by duplicating the last
/// element. Levels of length ≤ 1 are returned as-is: a singleton is a
/// terminal level, not half a pair.
pub fn pad_level(level: &[String]) -> Vec<String> {
    let mut padded = level.to_vec();
    if padded.len() > 1 && padded.len() % 2 != 0 {
        if let Some(last) = padded.last().cloned() {
            padded.push(last);
        }
    }
    padded
}

/// Reduce one level to its parent level.
///
/// Pads a private copy to even length, then hashes consecutive pairs
/// `(level[2k], level[2k+1])` with [`pair_hash`], preserving pair order.
/// One parent digest per pair.
pub fn reduce_level(level: &[String]) -> Vec<String> {
    if level.len() <= 1 {
        return level.to_vec();
    }
    let padded = pad_level(level);
    let mut next = Vec::with_capacity(padded.len() / 2);
    for i in (0..padded.len()).step_by(2) {
        next.push(pair_hash(&padded[i], &padded[i + 1]));
    }
    next
}
