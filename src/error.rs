//! Typed failures for the binding layer.
//!
//! Everything inside the tree engine itself is infallible given well-formed inputs
//! (see the crate-level docs on failure semantics); these errors exist only at the
//! boundary where untrusted strings are parsed into keys and digests.

/// Errors from decoding keys and digests at a language-binding boundary.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("'{input}' is not a valid decimal 256-bit key")]
    InvalidDecimalKey { input: String },

    #[error("decimal key '{input}' overflows 256 bits")]
    KeyOverflow { input: String },

    #[error("'{input}' is not valid hex: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("'{input}' decodes to {actual} bytes, expected {expected}")]
    WrongDigestWidth {
        input: String,
        expected: usize,
        actual: usize,
    },
}
