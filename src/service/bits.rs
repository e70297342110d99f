//! UUID bit layouts.
//!
//! A UUID is read as one 128-bit big-endian integer whose high 64 bits are the
//! most-significant half. The same order gives the 16-byte layout used for the
//! URL-safe Base64 form.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use uuid::Uuid;

use crate::error::{CodecError, CodecResult};

/// Length of the 16-byte layout in unpadded Base64.
pub const BASE64_LEN: usize = 22;

/// The UUID as an unsigned integer.
#[must_use]
pub fn to_integer(uuid: &Uuid) -> u128 {
    uuid.as_u128()
}

/// The UUID whose integer value is `value`.
#[must_use]
pub const fn from_integer(value: u128) -> Uuid {
    Uuid::from_u128(value)
}

/// Split into (most-significant, least-significant) halves.
#[must_use]
pub fn to_halves(uuid: &Uuid) -> (u64, u64) {
    uuid.as_u64_pair()
}

/// Join (most-significant, least-significant) halves.
#[must_use]
pub const fn from_halves(msb: u64, lsb: u64) -> Uuid {
    Uuid::from_u64_pair(msb, lsb)
}

/// Pack as 16 bytes: most-significant half first, each half big-endian.
#[must_use]
pub fn to_bytes(uuid: &Uuid) -> [u8; 16] {
    let (msb, lsb) = to_halves(uuid);
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&msb.to_be_bytes());
    bytes[8..].copy_from_slice(&lsb.to_be_bytes());
    bytes
}

/// Unpack the 16-byte layout written by [`to_bytes`].
#[must_use]
pub fn from_bytes(bytes: [u8; 16]) -> Uuid {
    let (hi, lo) = bytes.split_at(8);
    let mut msb = [0u8; 8];
    let mut lsb = [0u8; 8];
    msb.copy_from_slice(hi);
    lsb.copy_from_slice(lo);
    from_halves(u64::from_be_bytes(msb), u64::from_be_bytes(lsb))
}

/// URL-safe, unpadded Base64 of the 16-byte layout.
#[must_use]
pub fn to_base64(uuid: &Uuid) -> String {
    URL_SAFE_NO_PAD.encode(to_bytes(uuid))
}

/// Parse the URL-safe, unpadded Base64 form.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] if `text` is not URL-safe Base64 or
/// does not carry exactly 16 bytes.
pub fn from_base64(text: &str) -> CodecResult<Uuid> {
    let decoded = URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
    let bytes: [u8; 16] = decoded.try_into().map_err(|v: Vec<u8>| {
        CodecError::InvalidBase64(format!("expected 16 bytes, got {}", v.len()))
    })?;
    Ok(from_bytes(bytes))
}

/// Parse hyphenated 8-4-4-4-12 hex text, `None` for anything else.
#[must_use]
pub fn parse_canonical(text: &str) -> Option<Uuid> {
    if text.len() != uuid::fmt::Hyphenated::LENGTH {
        return None;
    }
    Uuid::try_parse(text).ok()
}
