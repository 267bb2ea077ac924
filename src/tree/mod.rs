//! The sparse leaf store, root maintenance, proof generation/validation, and the
//! batch update API. This is the component the rest of the crate exists to support.

mod collapse;

use std::collections::BTreeMap;

use tracing::debug;

use crate::digest::{DigestBytes, HashAlgorithm, Sha256};
use crate::key::Key;
use crate::proof::{self, ProofObject};
use crate::zero_ladder::ZeroLadder;

/// An authenticated key-value store backed by a fixed-depth-256 Sparse Merkle Tree.
///
/// Generic over the digest algorithm (defaults to SHA-256). Single-threaded
/// mutator / multiple-reader by contract: the crate itself does not lock, so
/// mutating methods (`set_*`, `remove_*`, `clear`, `batch_*`) must not run
/// concurrently with any other call on the same engine. `TreeEngine` is `Send`
/// and carries no thread-affine state, so an embedder is free to put it behind
/// whatever lock fits its access pattern.
pub struct TreeEngine<H: HashAlgorithm = Sha256> {
    leaves: BTreeMap<Key, DigestBytes>,
    zero: ZeroLadder<H>,
    root: DigestBytes,
}

impl<H: HashAlgorithm> TreeEngine<H> {
    /// Creates an empty engine. `root()` starts at `Z[256]`, the root of the fully
    /// empty tree.
    #[must_use]
    pub fn new() -> Self {
        let zero = ZeroLadder::build();
        let root = zero.empty_root();
        Self {
            leaves: BTreeMap::new(),
            zero,
            root,
        }
    }

    /// The current root digest.
    #[must_use]
    pub fn root(&self) -> DigestBytes {
        self.root
    }

    /// Number of materialized (non-empty) leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The null digest, `Z[0]`, used as the "absent" sentinel.
    #[must_use]
    pub fn null_digest(&self) -> DigestBytes {
        self.zero.null()
    }

    /// The stored digest at `key`, or `Z[0]` if the key has never been set (or was
    /// last set to `Z[0]`, which normalizes to removal).
    #[must_use]
    pub fn get_leaf(&self, key: Key) -> DigestBytes {
        self.leaves.get(&key).copied().unwrap_or_else(|| self.zero.null())
    }

    /// Whether `key` is present in the sparse leaf store.
    #[must_use]
    pub fn has_leaf(&self, key: Key) -> bool {
        self.leaves.contains_key(&key)
    }

    /// Sets the digest at `key` directly, skipping the value-to-digest hash.
    /// Setting `Z[0]` is equivalent to [`Self::remove_leaf`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_leaf_hash(&mut self, key: Key, digest: DigestBytes) {
        self.apply_set_hash(key, digest);
        self.recompute_root();
    }

    /// Hashes `value` and stores the result at `key`.
    pub fn set_leaf_value(&mut self, key: Key, value: &[u8]) {
        self.set_leaf_hash(key, H::hash(value));
    }

    /// Erases `key` from the store.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_leaf(&mut self, key: Key) {
        self.leaves.remove(&key);
        self.recompute_root();
    }

    /// Applies every `(key, digest)` update, then recomputes the root exactly
    /// once. A duplicate key within `updates` resolves to last-write-wins by
    /// iteration order.
    #[tracing::instrument(level = "debug", skip(self, updates))]
    pub fn batch_set_hash(&mut self, updates: impl IntoIterator<Item = (Key, DigestBytes)>) {
        for (key, digest) in updates {
            self.apply_set_hash(key, digest);
        }
        self.recompute_root();
    }

    /// Hashes every value, applies all the resulting updates, then recomputes the
    /// root exactly once.
    pub fn batch_set_value<'a>(&mut self, updates: impl IntoIterator<Item = (Key, &'a [u8])>) {
        let hashed: Vec<_> = updates
            .into_iter()
            .map(|(key, value)| (key, H::hash(value)))
            .collect();
        self.batch_set_hash(hashed);
    }

    /// Erases every key in `keys`, then recomputes the root exactly once.
    #[tracing::instrument(level = "debug", skip(self, keys))]
    pub fn batch_remove(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.leaves.remove(&key);
        }
        self.recompute_root();
    }

    /// Empties the store. `root()` returns to `Z[256]`.
    pub fn clear(&mut self) {
        self.leaves.clear();
        self.root = self.zero.empty_root();
    }

    /// Produces the 256-sibling proof for `key`'s path from leaf to root.
    ///
    /// On an empty tree every sibling is `Z[d]`, and the result is a valid
    /// non-inclusion proof for any key.
    #[must_use]
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn generate_proof(&self, key: Key) -> ProofObject {
        collapse::generate_proof(&self.leaves, &self.zero, key)
    }

    /// Validates an inclusion proof against this engine's current root.
    #[must_use]
    pub fn validate_proof(&self, key: Key, value: &[u8], proof: &ProofObject) -> bool {
        proof::verify_inclusion::<H>(key, value, proof, self.root)
    }

    /// Validates a non-inclusion proof against this engine's current root.
    #[must_use]
    pub fn validate_non_inclusion(&self, key: Key, proof: &ProofObject) -> bool {
        proof::verify_non_inclusion::<H>(key, proof, self.root)
    }

    /// Validates an inclusion proof against a caller-supplied root rather than
    /// this engine's current one. This is the shape an external verifier with no
    /// live engine actually needs, since it only pins a previously-published root.
    #[must_use]
    pub fn validate_proof_against(
        key: Key,
        value: &[u8],
        proof: &ProofObject,
        expected_root: DigestBytes,
    ) -> bool {
        proof::verify_inclusion::<H>(key, value, proof, expected_root)
    }

    /// Validates a non-inclusion proof against a caller-supplied root.
    #[must_use]
    pub fn validate_non_inclusion_against(
        key: Key,
        proof: &ProofObject,
        expected_root: DigestBytes,
    ) -> bool {
        proof::verify_non_inclusion::<H>(key, proof, expected_root)
    }

    fn apply_set_hash(&mut self, key: Key, digest: DigestBytes) {
        if digest == self.zero.null() {
            self.leaves.remove(&key);
        } else {
            self.leaves.insert(key, digest);
        }
    }

    fn recompute_root(&mut self) {
        self.root = collapse::compute_root(&self.leaves, &self.zero);
        debug!(leaves = self.leaves.len(), "recomputed root");
    }
}

impl<H: HashAlgorithm> Default for TreeEngine<H> {
    fn default() -> Self {
        Self::new()
    }
}
