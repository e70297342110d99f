//! Base-36 / base-62 integer codec.
//!
//! Values are unsigned 128-bit integers, written most-significant digit first
//! with no leading zero digits. Zero encodes to the single digit `0`.

use crate::domain::Base;
use crate::error::{CodecError, CodecResult};

/// Widest value the codec can hold.
pub const MAX_BITS: u32 = u128::BITS;

/// Upper bound on encoded length: base 36 needs 25 digits for 128 bits.
const MAX_DIGITS: usize = 25;

/// Encode `value` in `base`.
#[must_use]
pub fn encode(mut value: u128, base: Base) -> String {
    let alphabet = base.alphabet();
    let radix = u128::from(base.radix());

    if value == 0 {
        return char::from(alphabet.digit(0)).to_string();
    }

    let mut buf = [0u8; MAX_DIGITS];
    let mut start = buf.len();
    while value > 0 {
        // remainder < radix <= 62
        #[allow(clippy::cast_possible_truncation)]
        let rem = (value % radix) as usize;
        value /= radix;
        start -= 1;
        buf[start] = alphabet.digit(rem);
    }

    buf[start..].iter().copied().map(char::from).collect()
}

/// Decode `input` as a big-endian numeral in `base`.
///
/// `bit_limit` caps the bit length of the result; `0` leaves only the
/// 128-bit ceiling of the return type. The cap is checked after every digit
/// is accumulated, least-significant digit first, so oversized input is
/// rejected as soon as the running sum crosses it.
///
/// # Errors
///
/// - [`CodecError::EmptyInput`] if `input` is empty
/// - [`CodecError::IllegalCharacters`] if `input` has a byte outside the alphabet
/// - [`CodecError::BitLimitExceeded`] if the value is wider than the limit
pub fn decode(input: &str, base: Base, bit_limit: u32) -> CodecResult<u128> {
    if input.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let alphabet = base.alphabet();
    if !alphabet.contains_all(input) {
        return Err(CodecError::IllegalCharacters {
            input: input.to_string(),
            alphabet: alphabet.digits(),
        });
    }

    let limit = if bit_limit == 0 {
        MAX_BITS
    } else {
        bit_limit.min(MAX_BITS)
    };
    let too_wide = || CodecError::BitLimitExceeded {
        input: input.to_string(),
        limit,
    };

    let radix = u128::from(base.radix());
    let mut sum: u128 = 0;
    // radix^position, `None` once it no longer fits in 128 bits
    let mut weight: Option<u128> = Some(1);

    for byte in input.bytes().rev() {
        let digit = alphabet.value_of(byte).map_or(0, u128::from);
        if digit != 0 {
            let term = weight
                .and_then(|w| w.checked_mul(digit))
                .ok_or_else(too_wide)?;
            sum = sum.checked_add(term).ok_or_else(too_wide)?;
            if bit_length(sum) > limit {
                return Err(too_wide());
            }
        }
        weight = weight.and_then(|w| w.checked_mul(radix));
    }

    Ok(sum)
}

/// Minimal number of bits needed to write `value`.
#[must_use]
pub const fn bit_length(value: u128) -> u32 {
    MAX_BITS - value.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_single_digit() {
        assert_eq!(encode(0, Base::Base36), "0");
        assert_eq!(encode(0, Base::Base62), "0");
        assert_eq!(decode("0", Base::Base62, 0), Ok(0));
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(35, Base::Base36), "z");
        assert_eq!(encode(36, Base::Base36), "10");
        assert_eq!(encode(61, Base::Base62), "z");
        assert_eq!(encode(62, Base::Base62), "10");
        assert_eq!(encode(3843, Base::Base62), "zz");
        assert_eq!(decode("zz", Base::Base62, 0), Ok(3843));
        assert_eq!(decode("10", Base::Base36, 0), Ok(36));
    }

    #[test]
    fn test_max_value() {
        assert_eq!(encode(u128::MAX, Base::Base36), "f5lxx1zz5pnorynqglhzmsp33");
        assert_eq!(encode(u128::MAX, Base::Base62), "7n42DGM5Tflk9n8mt7Fhc7");
        assert_eq!(
            decode("f5lxx1zz5pnorynqglhzmsp33", Base::Base36, 128),
            Ok(u128::MAX)
        );
        assert_eq!(
            decode("7n42DGM5Tflk9n8mt7Fhc7", Base::Base62, 128),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn test_one_past_max_is_rejected() {
        // 2^128 in each base
        assert!(matches!(
            decode("f5lxx1zz5pnorynqglhzmsp34", Base::Base36, 128),
            Err(CodecError::BitLimitExceeded { limit: 128, .. })
        ));
        assert!(matches!(
            decode("7n42DGM5Tflk9n8mt7Fhc8", Base::Base62, 0),
            Err(CodecError::BitLimitExceeded { limit: 128, .. })
        ));
    }

    #[test]
    fn test_leading_zero_digits_are_accepted() {
        let padded = format!("{}{}", "0".repeat(40), encode(u128::MAX, Base::Base62));
        assert_eq!(decode(&padded, Base::Base62, 128), Ok(u128::MAX));
    }

    #[test]
    fn test_small_bit_limit() {
        assert_eq!(decode("ff", Base::Base36, 10), Ok(555));
        // 36^2 = 1296 needs 11 bits
        assert!(matches!(
            decode("100", Base::Base36, 10),
            Err(CodecError::BitLimitExceeded { limit: 10, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode("", Base::Base36, 128), Err(CodecError::EmptyInput));
        assert_eq!(decode("", Base::Base62, 0), Err(CodecError::EmptyInput));
    }

    #[test]
    fn test_illegal_characters() {
        let err = decode("abc/def", Base::Base62, 128).unwrap_err();
        assert_eq!(
            err.to_string(),
            "String 'abc/def' contains illegal characters, only \
             '0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz' are allowed"
        );
        // base 36 is lowercase only
        assert!(matches!(
            decode("ABC", Base::Base36, 128),
            Err(CodecError::IllegalCharacters { .. })
        ));
        assert!(matches!(
            decode(" 12", Base::Base36, 128),
            Err(CodecError::IllegalCharacters { .. })
        ));
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
        assert_eq!(bit_length(u128::MAX), 128);
    }

    #[test]
    fn test_round_trip_samples() {
        let samples = [1u128, 9, 10, 61, 62, 1 << 64, (1 << 127) + 12_345, u128::MAX - 1];
        for base in [Base::Base36, Base::Base62] {
            for value in samples {
                assert_eq!(decode(&encode(value, base), base, 0), Ok(value));
            }
        }
    }
}
