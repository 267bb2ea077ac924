//! The bottom-up level-collapse algorithm used for both root recomputation and
//! proof generation.

use std::collections::BTreeMap;

use crate::digest::{DigestBytes, HashAlgorithm};
use crate::key::{self, Key};
use crate::proof::ProofObject;
use crate::zero_ladder::ZeroLadder;

/// Produces `M[i+1]` from `M[i]`: pairs every entry with its sibling (falling back
/// to the zero hash for the subtree height `i` when the sibling is absent) and
/// writes the parent digest. The pair-dedup rule (`entry().or_insert_with`)
/// guarantees each parent is written exactly once regardless of whether the left
/// or right child is visited first, since the sibling lookup is symmetric.
fn collapse_one_level<H: HashAlgorithm>(
    current: &BTreeMap<Key, DigestBytes>,
    zero_at_level: DigestBytes,
) -> BTreeMap<Key, DigestBytes> {
    let mut next = BTreeMap::new();
    for (&k, &h) in current {
        let sibling_key = key::sibling(k);
        let sibling_hash = current.get(&sibling_key).copied().unwrap_or(zero_at_level);
        let (left, right) = if key::is_left(k) {
            (h, sibling_hash)
        } else {
            (sibling_hash, h)
        };
        next.entry(key::parent(k))
            .or_insert_with(|| H::hash_pair(&left, &right));
    }
    next
}

/// Recomputes the root from only the materialized leaves. O(n · 256) for n leaves.
pub(crate) fn compute_root<H: HashAlgorithm>(
    leaves: &BTreeMap<Key, DigestBytes>,
    zero: &ZeroLadder<H>,
) -> DigestBytes {
    if leaves.is_empty() {
        return zero.empty_root();
    }

    let mut current = leaves.clone();
    for level in 0..256 {
        current = collapse_one_level::<H>(&current, zero.at(level));
    }

    *current
        .values()
        .next()
        .expect("collapsing a non-empty leaf set always yields exactly one root entry")
}

/// Builds the 256-sibling proof for `key` by collapsing the level progression
/// once (O(n · 256)) rather than recomputing it from scratch at every depth.
pub(crate) fn generate_proof<H: HashAlgorithm>(
    leaves: &BTreeMap<Key, DigestBytes>,
    zero: &ZeroLadder<H>,
    key: Key,
) -> ProofObject {
    let mut proof = ProofObject::new();
    let mut current = leaves.clone();
    let mut cursor = key;

    for depth in 0..256 {
        if depth > 0 {
            current = collapse_one_level::<H>(&current, zero.at(depth - 1));
        }
        let sibling_key = key::sibling(cursor);
        let sibling = current
            .get(&sibling_key)
            .copied()
            .unwrap_or_else(|| zero.at(depth));
        proof.append_sibling(sibling);
        cursor = key::parent(cursor);
    }

    proof
}
