#![warn(clippy::all, clippy::pedantic)]

//! An authenticated key-value store backed by a fixed-depth-256 Sparse Merkle
//! Tree: a single root digest commits to the entire 2²⁵⁶-leaf mapping, and short
//! O(256)-hash proofs attest either that a key holds a given value (inclusion) or
//! that a key is unset (non-inclusion).

pub mod bindings;
pub mod digest;
pub mod error;
pub mod key;
pub mod proof;
mod tree;
mod zero_ladder;

pub use digest::{DigestBytes, HashAlgorithm, Sha256};
pub use error::BindingError;
pub use key::Key;
pub use proof::ProofObject;
pub use tree::TreeEngine;
pub use zero_ladder::ZeroLadder;
