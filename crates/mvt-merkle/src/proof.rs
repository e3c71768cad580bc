//! # Proof Engine
//!
//! Generates inclusion proofs from a leaf list and folds proofs back to a
//! root. Generation walks the stored tree bottom-up collecting sibling
//! digests with direction tags; folding needs only the proof itself and the
//! pair-hash rule — it never reconstructs the tree, which is the point:
//! O(log n) verification from O(log n) data.
//!
//! A proof is self-contained. It holds no reference to the tree that
//! produced it, and the first node is special: its direction records the
//! target leaf's own pairing role (even index = left, odd = right) and is
//! not consulted when folding.

use serde::{Deserialize, Serialize};

use mvt_core::pair_hash;

use crate::build::build_tree;

/// Which side a sibling digest occupies when concatenated for hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sibling is concatenated before the running digest.
    Left,
    /// Sibling is concatenated after the running digest.
    Right,
}

/// One step of an inclusion proof: a digest and its side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    /// The digest carried at this step (the target leaf for the first
    /// node, a sibling for every later node).
    pub digest: String,
    /// The side this digest occupies when pairing.
    pub direction: Direction,
}

/// An inclusion proof, ordered from the target leaf upward to (but not
/// including) the root.
pub type Proof = Vec<ProofNode>;

/// Generate an inclusion proof for `target` over `leaves`.
///
/// Returns `None` when the target is the empty string, the leaf list is
/// empty, or the target is absent. With duplicate leaves the first
/// occurrence is proven — lookup is exact, case-sensitive string equality.
///
/// The first proof node is `(target, own-role)`; each later node is the
/// sibling at that level, tagged with the side it must take when folding.
pub fn generate_proof(target: &str, leaves: &[String]) -> Option<Proof> {
    if target.is_empty() || leaves.is_empty() {
        return None;
    }
    let mut index = leaves.iter().position(|leaf| leaf == target)?;

    let tree = build_tree(leaves);
    let mut proof = Vec::with_capacity(tree.len());
    proof.push(ProofNode {
        digest: target.to_string(),
        direction: if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        },
    });

    // Stored levels are padded, so the sibling slot exists even at the
    // tail of an odd level. The root level contributes no node.
    for level in &tree[..tree.len() - 1] {
        let (sibling, direction) = if index % 2 == 0 {
            (index + 1, Direction::Right)
        } else {
            (index - 1, Direction::Left)
        };
        proof.push(ProofNode {
            digest: level[sibling].clone(),
            direction,
        });
        index /= 2;
    }

    Some(proof)
}

/// Fold a proof back to its root digest.
///
/// The accumulator starts at the first node's digest; each later node is
/// paired on its tagged side. Returns the empty string for an empty proof.
pub fn fold_proof(proof: &[ProofNode]) -> String {
    let Some((first, rest)) = proof.split_first() else {
        return String::new();
    };
    let mut acc = first.digest.clone();
    for node in rest {
        acc = match node.direction {
            Direction::Right => pair_hash(&acc, &node.digest),
            Direction::Left => pair_hash(&node.digest, &acc),
        };
    }
    acc
}

/// Verify a proof against an expected root.
///
/// Exact string comparison of the folded root, no normalization. An empty
/// proof verifies nothing and is always rejected.
pub fn verify_proof(proof: &[ProofNode], expected_root: &str) -> bool {
    !proof.is_empty() && fold_proof(proof) == expected_root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_root;

    fn leaves(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_leaf_proof_fixture() {
        // Proof for "b2" over ["a1","b2","c3"]: own role right (index 1),
        // sibling "a1" on the left, then h(c3c3) on the right.
        let l = leaves(&["a1", "b2", "c3"]);
        let proof = generate_proof("b2", &l).unwrap();
        assert_eq!(
            proof,
            vec![
                ProofNode {
                    digest: "b2".to_string(),
                    direction: Direction::Right,
                },
                ProofNode {
                    digest: "a1".to_string(),
                    direction: Direction::Left,
                },
                ProofNode {
                    digest: "f8cf4f31a4804ca169fb1f73bf43543cd789ff829d28a252e624d0f8ff2b75d0"
                        .to_string(),
                    direction: Direction::Right,
                },
            ]
        );

        let root = build_root(&l).unwrap();
        assert_eq!(fold_proof(&proof), root);
        assert!(verify_proof(&proof, &root));
    }

    #[test]
    fn test_padded_tail_leaf_is_provable() {
        // "c3" sits at the last even index of an odd level; its sibling is
        // the padding duplicate of itself.
        let l = leaves(&["a1", "b2", "c3"]);
        let proof = generate_proof("c3", &l).unwrap();
        assert_eq!(proof[0].direction, Direction::Left);
        assert_eq!(proof[1].digest, "c3");
        assert_eq!(proof[1].direction, Direction::Right);
        assert!(verify_proof(&proof, &build_root(&l).unwrap()));
    }

    #[test]
    fn test_absent_target_is_none() {
        let l = leaves(&["a1", "b2", "c3"]);
        assert_eq!(generate_proof("d4", &l), None);
    }

    #[test]
    fn test_empty_inputs_are_none() {
        assert_eq!(generate_proof("a1", &[]), None);
        assert_eq!(generate_proof("", &leaves(&["a1"])), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let l = leaves(&["A1", "b2"]);
        assert_eq!(generate_proof("a1", &l), None);
        assert!(generate_proof("A1", &l).is_some());
    }

    #[test]
    fn test_duplicate_target_uses_first_occurrence() {
        let l = leaves(&["dd", "a1", "dd", "b2"]);
        let proof = generate_proof("dd", &l).unwrap();
        // Index 0, not 2: own role left, first sibling is "a1".
        assert_eq!(proof[0].direction, Direction::Left);
        assert_eq!(proof[1].digest, "a1");
        assert!(verify_proof(&proof, &build_root(&l).unwrap()));
    }

    #[test]
    fn test_singleton_proof_is_just_the_leaf() {
        let l = leaves(&["a1"]);
        let proof = generate_proof("a1", &l).unwrap();
        assert_eq!(proof.len(), 1);
        assert_eq!(fold_proof(&proof), "a1");
        assert!(verify_proof(&proof, "a1"));
    }

    #[test]
    fn test_proof_length_matches_nonterminal_levels() {
        for n in [2usize, 3, 4, 5, 8, 9] {
            let l: Vec<String> = (0..n).map(|i| format!("{i:02x}")).collect();
            let tree = crate::build::build_tree(&l);
            let proof = generate_proof(&l[0], &l).unwrap();
            assert_eq!(proof.len(), tree.len(), "n={n}");
        }
    }

    #[test]
    fn test_fold_empty_proof_is_empty_string() {
        assert_eq!(fold_proof(&[]), "");
    }

    #[test]
    fn test_verify_empty_proof_rejected() {
        assert!(!verify_proof(&[], ""));
    }

    #[test]
    fn test_verify_rejects_wrong_root() {
        let l = leaves(&["a1", "b2", "c3"]);
        let proof = generate_proof("b2", &l).unwrap();
        assert!(!verify_proof(&proof, "00"));
    }

    #[test]
    fn test_tampered_sibling_rejected() {
        let l = leaves(&["a1", "b2", "c3"]);
        let root = build_root(&l).unwrap();
        let mut proof = generate_proof("b2", &l).unwrap();
        proof[1].digest = "ff".to_string();
        assert!(!verify_proof(&proof, &root));
    }

    #[test]
    fn test_flipped_direction_rejected() {
        let l = leaves(&["a1", "b2", "c3"]);
        let root = build_root(&l).unwrap();
        let mut proof = generate_proof("b2", &l).unwrap();
        proof[1].direction = Direction::Right;
        assert!(!verify_proof(&proof, &root));
    }

    #[test]
    fn test_proof_json_shape() {
        // External interface: [{"digest": ..., "direction": "left"|"right"}]
        let l = leaves(&["a1", "b2", "c3"]);
        let proof = generate_proof("b2", &l).unwrap();
        let json = serde_json::to_value(&proof).unwrap();
        assert_eq!(json[0]["digest"], "b2");
        assert_eq!(json[0]["direction"], "right");
        assert_eq!(json[1]["direction"], "left");

        let back: Proof = serde_json::from_value(json).unwrap();
        assert_eq!(back, proof);
    }
}
