//! Short UUID encoding.
//!
//! A short id is the UUID's 128-bit value written in base 36 (lowercase, safe
//! for case-insensitive contexts) or base 62 (shorter, case-sensitive).

use uuid::Uuid;

use crate::domain::Base;
use crate::error::CodecResult;
use crate::service::{basen, bits};

/// Bit width of a UUID, the ceiling applied when decoding short ids.
pub const UUID_BITS: u32 = 128;

/// Encode `uuid` as a short id.
#[must_use]
pub fn encode(uuid: &Uuid, case_sensitive: bool) -> String {
    basen::encode(bits::to_integer(uuid), Base::for_case(case_sensitive))
}

/// Decode a short id back to its UUID.
///
/// # Errors
///
/// Returns a [`CodecError`](crate::error::CodecError) if `short_id` is empty,
/// contains characters outside the alphabet, or holds more than 128 bits.
pub fn decode(short_id: &str, case_sensitive: bool) -> CodecResult<Uuid> {
    let value = basen::decode(short_id, Base::for_case(case_sensitive), UUID_BITS)?;
    Ok(bits::from_integer(value))
}

/// Shorten `id` if it is a hyphenated UUID, else strip it to `[A-Za-z0-9]`.
#[must_use]
pub fn try_shorten(id: &str, case_sensitive: bool) -> String {
    match bits::parse_canonical(id) {
        Some(uuid) => encode(&uuid, case_sensitive),
        None => id.chars().filter(char::is_ascii_alphanumeric).collect(),
    }
}

/// Short id of a fresh random (v4) UUID.
#[must_use]
pub fn random(case_sensitive: bool) -> String {
    encode(&Uuid::new_v4(), case_sensitive)
}
