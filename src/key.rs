//! The 256-bit leaf position.
//!
//! A key is interpreted MSB-first as a root-to-leaf path: bit 0 (LSB) distinguishes
//! sibling leaves at the bottom, bit 255 (MSB) distinguishes the two children of the
//! root. Level 0 is the leaf level; level 256 is the root.

pub use primitive_types::U256 as Key;

/// The sibling leaf position at the bottom level: flips bit 0.
#[must_use]
pub fn sibling(key: Key) -> Key {
    key ^ Key::one()
}

/// Whether `key` is the left (even) child of its parent.
#[must_use]
pub fn is_left(key: Key) -> bool {
    key & Key::one() == Key::zero()
}

/// The parent position one level up: drops bit 0.
#[must_use]
pub fn parent(key: Key) -> Key {
    key >> 1
}
