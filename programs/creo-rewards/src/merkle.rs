//! Sorted-pair keccak Merkle verification for self-service claims.
//!
//! Leaves commit to `(claimant, amount, reason)`; interior nodes hash
//! their children in byte order, so proofs carry no left/right flags.
//! Leaves and interior nodes hash in distinct domains (0x00 / 0x01
//! prefix), so an interior node can never collide with a leaf
//! commitment.

use anchor_lang::prelude::*;
use solana_keccak_hasher as keccak;

const LEAF_PREFIX: &[u8] = &[0x00];
const NODE_PREFIX: &[u8] = &[0x01];

/// Leaf commitment for one reward allocation.
pub fn leaf_hash(claimant: &Pubkey, amount: u64, reason: &str) -> [u8; 32] {
    keccak::hashv(&[
        LEAF_PREFIX,
        claimant.as_ref(),
        &amount.to_le_bytes(),
        reason.as_bytes(),
    ])
    .0
}

/// Walks the proof from `leaf` to the root and compares.
pub fn verify_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32]) -> bool {
    let mut node = *leaf;
    for sibling in proof {
        node = hash_pair(&node, sibling);
    }
    node == *root
}

fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[NODE_PREFIX, a, b]).0
    } else {
        keccak::hashv(&[NODE_PREFIX, b, a]).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves() -> Vec<[u8; 32]> {
        vec![
            leaf_hash(&Pubkey::new_unique(), 100, "welcome"),
            leaf_hash(&Pubkey::new_unique(), 250, "top fan"),
            leaf_hash(&Pubkey::new_unique(), 50, "early"),
            leaf_hash(&Pubkey::new_unique(), 600, "moderator"),
        ]
    }

    /// Builds a 4-leaf tree and returns (root, proof for leaves[index]).
    fn tree_of_four(leaves: &[[u8; 32]], index: usize) -> ([u8; 32], Vec<[u8; 32]>) {
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        let root = hash_pair(&n01, &n23);
        let proof = match index {
            0 => vec![leaves[1], n23],
            1 => vec![leaves[0], n23],
            2 => vec![leaves[3], n01],
            3 => vec![leaves[2], n01],
            _ => unreachable!(),
        };
        (root, proof)
    }

    #[test]
    fn single_leaf_tree() {
        let leaf = leaf_hash(&Pubkey::new_unique(), 1, "only");
        assert!(verify_proof(&[], &leaf, &leaf));
        assert!(!verify_proof(&[], &leaf, &[0u8; 32]));
    }

    #[test]
    fn two_leaf_tree() {
        let claimant = Pubkey::new_unique();
        let a = leaf_hash(&claimant, 100, "welcome");
        let b = leaf_hash(&Pubkey::new_unique(), 200, "welcome");
        let root = hash_pair(&a, &b);

        assert!(verify_proof(&[b], &root, &a));
        assert!(verify_proof(&[a], &root, &b));
        // same claimant, wrong amount: different leaf, proof fails
        let forged = leaf_hash(&claimant, 101, "welcome");
        assert!(!verify_proof(&[b], &root, &forged));
    }

    #[test]
    fn four_leaf_tree_all_positions() {
        let leaves = leaves();
        for index in 0..4 {
            let (root, proof) = tree_of_four(&leaves, index);
            assert!(verify_proof(&proof, &root, &leaves[index]));
        }
    }

    #[test]
    fn non_committed_leaf_fails() {
        let leaves = leaves();
        let (root, proof) = tree_of_four(&leaves, 0);
        let outsider = leaf_hash(&Pubkey::new_unique(), 100, "welcome");
        assert!(!verify_proof(&proof, &root, &outsider));
    }

    #[test]
    fn truncated_proof_fails() {
        let leaves = leaves();
        let (root, proof) = tree_of_four(&leaves, 0);
        assert!(!verify_proof(&proof[..1], &root, &leaves[0]));
    }

    #[test]
    fn leaf_and_node_hashes_use_distinct_domains() {
        // A leaf whose serialized fields are byte-identical to two
        // concatenated 32-byte nodes must not collide with their
        // interior hash.
        let a = [1u8; 32];
        let b = [2u8; 32];
        let claimant = Pubkey::new_from_array(a);
        let amount = u64::from_le_bytes(b[..8].try_into().unwrap());
        let reason = core::str::from_utf8(&b[8..]).unwrap();
        assert_ne!(leaf_hash(&claimant, amount, reason), hash_pair(&a, &b));
    }

    #[test]
    fn leaf_binds_every_field() {
        let claimant = Pubkey::new_unique();
        let base = leaf_hash(&claimant, 100, "welcome");
        assert_ne!(base, leaf_hash(&claimant, 100, "welcomed"));
        assert_ne!(base, leaf_hash(&claimant, 99, "welcome"));
        assert_ne!(base, leaf_hash(&Pubkey::new_unique(), 100, "welcome"));
    }
}
