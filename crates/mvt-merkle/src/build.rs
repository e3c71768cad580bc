//! # Tree Builder
//!
//! Iteratively applies the level reducer until a single digest remains.
//! Two variants with different empty-input policies:
//!
//! - [`build_root`] is strict: zero leaves is an error, because a root is a
//!   commitment to a leaf set and an empty set has nothing to commit to.
//! - [`build_tree`] is lenient: zero leaves yields an empty tree.
//!
//! For any non-empty input the two agree on the root digest.
//!
//! ## Stored levels carry the padding duplicate
//!
//! `build_tree` records each working level *after* padding, so an odd
//! level's duplicate occupies a real slot. Proof generation indexes
//! siblings as `index ± 1` on stored levels; the padded slot keeps that
//! lookup in bounds at the tail of every level.

use mvt_core::TreeError;

use crate::reduce::{pad_level, reduce_level};

/// Compute the Merkle root of a non-empty leaf list.
///
/// A singleton list is its own root. Tree depth is `ceil(log2(n))`; the
/// loop runs once per level, so large leaf counts never grow the stack.
///
/// # Errors
///
/// [`TreeError::EmptyInput`] when `leaves` is empty.
pub fn build_root(leaves: &[String]) -> Result<String, TreeError> {
    if leaves.is_empty() {
        return Err(TreeError::EmptyInput);
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = reduce_level(&level);
    }
    Ok(level[0].clone())
}

/// Build the full tree: level 0 is the (padded) leaf level, the last level
/// holds exactly the root. Returns an empty tree for empty input.
///
/// The caller's `leaves` slice is never mutated; padding happens on the
/// private working copy that ends up stored in the tree.
pub fn build_tree(leaves: &[String]) -> Vec<Vec<String>> {
    if leaves.is_empty() {
        return Vec::new();
    }
    let mut levels = Vec::new();
    let mut working = pad_level(leaves);
    loop {
        levels.push(working.clone());
        if working.len() == 1 {
            break;
        }
        working = pad_level(&reduce_level(&working));
    }
    levels
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn hex_leaves() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[0-9a-f]{2,64}", 1..24)
    }

    proptest! {
        /// Root computation is deterministic.
        #[test]
        fn build_root_deterministic(l in hex_leaves()) {
            prop_assert_eq!(build_root(&l).unwrap(), build_root(&l).unwrap());
        }

        /// The strict and lenient variants agree on the root.
        #[test]
        fn variants_agree(l in hex_leaves()) {
            let tree = build_tree(&l);
            let last = tree.last().expect("non-empty input yields levels");
            prop_assert_eq!(last.len(), 1);
            prop_assert_eq!(&last[0], &build_root(&l).unwrap());
        }

        /// The caller's leaf list survives both builders untouched.
        #[test]
        fn builders_never_mutate(l in hex_leaves()) {
            let before = l.clone();
            let _ = build_root(&l);
            let _ = build_tree(&l);
            prop_assert_eq!(l, before);
        }
    }
}
