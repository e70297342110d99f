//! Digit alphabets for the base-36 and base-62 codecs.
//!
//! Alphabet order defines digit values: the character at index `i` is digit `i`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

const DIGITS_36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Marks a byte that is not a digit of the alphabet.
const NOT_A_DIGIT: u8 = u8::MAX;

/// Lowercase base-36 digits `0-9a-z`.
pub static BASE_36: Alphabet = Alphabet::new(DIGITS_36);

/// Case-sensitive base-62 digits `0-9A-Za-z`.
pub static BASE_62: Alphabet = Alphabet::new(DIGITS_62);

/// A fixed, ordered digit set with a byte-indexed reverse lookup.
#[derive(Debug)]
pub struct Alphabet {
    digits: &'static str,
    index: [u8; 256],
}

impl Alphabet {
    #[allow(clippy::cast_possible_truncation)]
    const fn new(digits: &'static str) -> Self {
        let bytes = digits.as_bytes();
        let mut index = [NOT_A_DIGIT; 256];
        let mut i = 0;
        while i < bytes.len() {
            index[bytes[i] as usize] = i as u8;
            i += 1;
        }
        Self { digits, index }
    }

    /// The digit characters, in value order.
    #[must_use]
    pub const fn digits(&self) -> &'static str {
        self.digits
    }

    /// Number of digits, i.e. the radix.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn radix(&self) -> u32 {
        self.digits.len() as u32
    }

    /// Character for digit value `value`. `value` must be below the radix.
    #[must_use]
    pub const fn digit(&self, value: usize) -> u8 {
        self.digits.as_bytes()[value]
    }

    /// Digit value of `byte`, or `None` when it is not in this alphabet.
    #[must_use]
    pub const fn value_of(&self, byte: u8) -> Option<u8> {
        match self.index[byte as usize] {
            NOT_A_DIGIT => None,
            value => Some(value),
        }
    }

    /// Whether every byte of `input` is a digit of this alphabet.
    #[must_use]
    pub fn contains_all(&self, input: &str) -> bool {
        input.bytes().all(|b| self.value_of(b).is_some())
    }
}

/// Supported radixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Base {
    /// Radix 36, lowercase only.
    Base36,
    /// Radix 62, mixed case.
    Base62,
}

impl Base {
    /// Base used for short ids: 62 when ids may be case-sensitive, else 36.
    #[must_use]
    pub const fn for_case(case_sensitive: bool) -> Self {
        if case_sensitive { Self::Base62 } else { Self::Base36 }
    }

    /// The alphabet of this base.
    #[must_use]
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Base36 => &BASE_36,
            Self::Base62 => &BASE_62,
        }
    }

    /// The numeric radix.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Base36 => 36,
            Self::Base62 => 62,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = CodecError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            36 => Ok(Self::Base36),
            62 => Ok(Self::Base62),
            other => Err(CodecError::UnsupportedBase(other)),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{}", self.radix())
    }
}
