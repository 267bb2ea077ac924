//! The hashing capability the tree engine depends on.

/// Fixed-width output of a [`HashAlgorithm`]. All algorithms in this crate produce 32 bytes,
/// matching the reference SHA-256 instantiation.
pub type DigestBytes = [u8; 32];

/// A pure, deterministic, collision-resistant hash function.
///
/// The tree engine depends on nothing beyond this single operation: no algebraic
/// structure, no incremental/streaming API. Implementors may assume `data` is the
/// full input; there is no notion of domain separation at this layer.
pub trait HashAlgorithm: Clone {
    /// Hash an arbitrary-length byte sequence to a fixed-width digest.
    fn hash(data: &[u8]) -> DigestBytes;

    /// Hash the concatenation of two digests, as used when combining sibling hashes
    /// into a parent. Equivalent to `Self::hash(&[left, right].concat())` but avoids
    /// the intermediate allocation on the engine's hot path.
    fn hash_pair(left: &DigestBytes, right: &DigestBytes) -> DigestBytes {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left);
        buf[32..].copy_from_slice(right);
        Self::hash(&buf)
    }
}

/// The reference digest algorithm: SHA-256.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl HashAlgorithm for Sha256 {
    fn hash(data: &[u8]) -> DigestBytes {
        use sha2::Digest as _;
        let mut hasher = sha2::Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Render a digest as lowercase hex, two characters per byte, no separators.
#[must_use]
pub fn to_hex(digest: &DigestBytes) -> String {
    hex::encode(digest)
}

/// Parse a digest from the format produced by [`to_hex`].
///
/// # Errors
/// Returns an error if `s` is not valid hex or does not decode to exactly 32 bytes.
pub fn from_hex(s: &str) -> Result<DigestBytes, crate::error::BindingError> {
    let bytes = hex::decode(s).map_err(|source| crate::error::BindingError::InvalidHex {
        input: s.to_string(),
        source,
    })?;
    DigestBytes::try_from(bytes.as_slice()).map_err(|_| crate::error::BindingError::WrongDigestWidth {
        input: s.to_string(),
        expected: 32,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_matches_known_vector() {
        let got = Sha256::hash(&[]);
        assert_eq!(
            to_hex(&got),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hex_round_trips() {
        let digest = Sha256::hash(b"hello world");
        let rendered = to_hex(&digest);
        assert_eq!(rendered.len(), 64);
        assert_eq!(from_hex(&rendered).unwrap(), digest);
    }

    #[test]
    fn from_hex_rejects_wrong_width() {
        assert!(from_hex("abcd").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn hash_pair_matches_manual_concatenation() {
        let left = Sha256::hash(b"left");
        let right = Sha256::hash(b"right");
        let mut concatenated = Vec::with_capacity(64);
        concatenated.extend_from_slice(&left);
        concatenated.extend_from_slice(&right);
        assert_eq!(Sha256::hash_pair(&left, &right), Sha256::hash(&concatenated));
    }
}
