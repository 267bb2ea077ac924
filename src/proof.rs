//! Inclusion / non-inclusion proofs and the single validation algorithm both share.

use crate::digest::{DigestBytes, HashAlgorithm};
use crate::key::{self, Key};

/// An ordered sequence of sibling digests from leaf to root.
///
/// Index `i` holds the sibling encountered at depth `i` from the leaf (the sibling
/// at level `i` along the key's path to the root). A proof owns its sibling buffer
/// outright: it carries no reference back into the engine that produced it, and
/// remains meaningful against the root at the time of its generation even after the
/// engine that produced it mutates further.
#[derive(Clone, Debug, Default, PartialEq, Eq, bincode::Encode, bincode::Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofObject {
    siblings: Vec<DigestBytes>,
    valid: bool,
}

impl ProofObject {
    /// An empty, not-yet-populated proof.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sibling digest and marks the proof as populated.
    pub fn append_sibling(&mut self, sibling: DigestBytes) {
        self.siblings.push(sibling);
        self.valid = true;
    }

    /// The sibling digest at the given depth from the leaf.
    ///
    /// # Panics
    /// Panics if `depth >= self.len()`. An out-of-range proof access is a
    /// programming error, not a recoverable condition.
    #[must_use]
    pub fn sibling(&self, depth: usize) -> DigestBytes {
        self.siblings[depth]
    }

    #[must_use]
    pub fn siblings(&self) -> &[DigestBytes] {
        &self.siblings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Whether the proof has been populated (at least one sibling appended, or
    /// constructed directly `From` a complete sibling vector).
    ///
    /// This does *not* check length; `is_populated() && len() == 256` is the
    /// eligibility condition the validation functions enforce.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.valid
    }

    fn is_eligible_for_validation(&self) -> bool {
        self.valid && self.siblings.len() == 256
    }
}

impl From<Vec<DigestBytes>> for ProofObject {
    fn from(siblings: Vec<DigestBytes>) -> Self {
        let valid = !siblings.is_empty();
        Self { siblings, valid }
    }
}

/// The single algorithm used for both inclusion and non-inclusion validation:
/// hash `starting_digest` up the path recorded in `proof` and compare against
/// `expected_root`.
///
/// Returns `false` without hashing anything if `proof` is malformed: wrong length,
/// or not populated.
#[must_use]
pub fn verify<H: HashAlgorithm>(
    key: Key,
    starting_digest: DigestBytes,
    proof: &ProofObject,
    expected_root: DigestBytes,
) -> bool {
    if !proof.is_eligible_for_validation() {
        return false;
    }

    let mut current = starting_digest;
    let mut cursor = key;
    for depth in 0..256 {
        let sibling = proof.sibling(depth);
        current = if key::is_left(cursor) {
            H::hash_pair(&current, &sibling)
        } else {
            H::hash_pair(&sibling, &current)
        };
        cursor = key::parent(cursor);
    }
    current == expected_root
}

/// Validates an inclusion proof: does hashing `value` up the path reconstruct
/// `expected_root`?
#[must_use]
pub fn verify_inclusion<H: HashAlgorithm>(
    key: Key,
    value: &[u8],
    proof: &ProofObject,
    expected_root: DigestBytes,
) -> bool {
    verify::<H>(key, H::hash(value), proof, expected_root)
}

/// Validates a non-inclusion proof: does hashing the null digest up the path
/// reconstruct `expected_root`?
#[must_use]
pub fn verify_non_inclusion<H: HashAlgorithm>(
    key: Key,
    proof: &ProofObject,
    expected_root: DigestBytes,
) -> bool {
    verify::<H>(key, H::hash(&[]), proof, expected_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Sha256;
    use crate::zero_ladder::ZeroLadder;

    #[test]
    fn fresh_proof_is_not_populated() {
        assert!(!ProofObject::new().is_populated());
    }

    #[test]
    fn append_sibling_marks_populated() {
        let mut proof = ProofObject::new();
        proof.append_sibling([0u8; 32]);
        assert!(proof.is_populated());
        assert_eq!(proof.len(), 1);
    }

    #[test]
    fn wrong_length_proof_fails_validation_without_hashing() {
        let mut proof = ProofObject::new();
        proof.append_sibling([0u8; 32]);
        assert!(!verify::<Sha256>(Key::zero(), [0u8; 32], &proof, [0u8; 32]));
    }

    #[test]
    fn unpopulated_full_length_proof_is_not_eligible() {
        let proof = ProofObject::from(vec![[0u8; 32]; 0]);
        assert!(!proof.is_eligible_for_validation());
    }

    #[test]
    fn all_zero_hash_proof_validates_empty_tree_non_inclusion() {
        let z = ZeroLadder::<Sha256>::build();
        let siblings: Vec<_> = (0..256).map(|level| z.at(level)).collect();
        let proof = ProofObject::from(siblings);
        assert!(verify_non_inclusion::<Sha256>(
            Key::from(12345u64),
            &proof,
            z.empty_root()
        ));
    }

    #[test]
    #[should_panic]
    fn sibling_out_of_range_panics() {
        let proof = ProofObject::new();
        let _ = proof.sibling(0);
    }
}
