//! Codecs used when the engine is exposed across a language boundary that lacks
//! 256-bit integers: keys travel as decimal strings, values and digests as hex.
//!
//! Nothing in [`crate::tree`] depends on this module; it exists purely for
//! callers sitting on the other side of an FFI/RPC boundary.

use crate::error::BindingError;
use crate::key::Key;

/// Parses a base-10 string into a 256-bit key.
///
/// # Errors
/// Returns [`BindingError::InvalidDecimalKey`] if `s` contains a non-digit
/// character (after an optional leading `+`), or [`BindingError::KeyOverflow`] if
/// the value does not fit in 256 bits.
pub fn parse_key(s: &str) -> Result<Key, BindingError> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BindingError::InvalidDecimalKey {
            input: s.to_string(),
        });
    }

    let ten = Key::from(10u64);
    let mut value = Key::zero();
    for digit in digits.bytes() {
        let (scaled, overflowed_mul) = value.overflowing_mul(ten);
        let (added, overflowed_add) = scaled.overflowing_add(Key::from(u64::from(digit - b'0')));
        if overflowed_mul || overflowed_add {
            return Err(BindingError::KeyOverflow {
                input: s.to_string(),
            });
        }
        value = added;
    }
    Ok(value)
}

/// Renders a 256-bit key as a decimal string.
#[must_use]
pub fn key_to_decimal(key: Key) -> String {
    key.to_string()
}

/// Parses a hex-encoded value into raw bytes, for use with `set_leaf_value`.
///
/// # Errors
/// Returns [`BindingError::InvalidHex`] if `s` is not valid hex.
pub fn parse_value(s: &str) -> Result<Vec<u8>, BindingError> {
    hex::decode(s).map_err(|source| BindingError::InvalidHex {
        input: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_small_decimal() {
        assert_eq!(parse_key("42").unwrap(), Key::from(42u64));
    }

    #[test]
    fn parses_key_spanning_all_256_bits() {
        let max = Key::MAX;
        let rendered = key_to_decimal(max);
        assert_eq!(parse_key(&rendered).unwrap(), max);
    }

    #[test]
    fn rejects_non_digit_input() {
        assert!(parse_key("12x4").is_err());
        assert!(parse_key("").is_err());
        assert!(parse_key("-5").is_err());
    }

    #[test]
    fn rejects_overflowing_decimal() {
        let too_big = format!("{}0", Key::MAX);
        assert!(matches!(
            parse_key(&too_big),
            Err(BindingError::KeyOverflow { .. })
        ));
    }

    #[test]
    fn decimal_round_trips() {
        let key = Key::from(123_456_789u64);
        assert_eq!(parse_key(&key_to_decimal(key)).unwrap(), key);
    }

    #[test]
    fn parse_value_decodes_hex() {
        assert_eq!(parse_value("0a0b").unwrap(), vec![0x0a, 0x0b]);
    }

    #[test]
    fn parse_value_rejects_non_hex() {
        assert!(parse_value("zz").is_err());
    }
}
