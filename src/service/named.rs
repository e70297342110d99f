//! Name-based UUIDs (versions 3 and 5).
//!
//! The hash input is the optional namespace in its 16-byte layout followed by
//! the UTF-8 bytes of the name. The first 16 digest bytes become the UUID,
//! with the version nibble and the RFC variant bits overwritten.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use uuid::Uuid;

use crate::error::{CodecError, CodecResult};
use crate::service::bits;

/// Clears the version nibble (bits 12-15) of the most-significant half.
const VERSION_MASK: u64 = 0xffff_ffff_ffff_0fff;
/// Clears the two variant bits of the least-significant half.
const VARIANT_MASK: u64 = 0x3fff_ffff_ffff_ffff;
/// RFC 4122 variant `10`.
const VARIANT_RFC: u64 = 0x8000_0000_0000_0000;

/// Name-based UUID version, which fixes the hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NameVersion {
    /// Version 3, MD5.
    Md5,
    /// Version 5, SHA-1.
    Sha1,
}

impl NameVersion {
    /// The version number written into the UUID.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }
}

impl TryFrom<u8> for NameVersion {
    type Error = CodecError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            3 => Ok(Self::Md5),
            5 => Ok(Self::Sha1),
            other => Err(CodecError::UnsupportedVersion(other)),
        }
    }
}

impl From<NameVersion> for u8 {
    fn from(version: NameVersion) -> Self {
        version.number()
    }
}

/// Derive the name-based UUID of `name` within `namespace`.
#[must_use]
pub fn generate(version: NameVersion, namespace: Option<&Uuid>, name: &str) -> Uuid {
    let digest = match version {
        NameVersion::Md5 => hash::<Md5>(namespace, name),
        NameVersion::Sha1 => hash::<Sha1>(namespace, name),
    };

    let (msb, lsb) = bits::to_halves(&bits::from_bytes(digest));
    let msb = (msb & VERSION_MASK) | (u64::from(version.number() & 0x0f) << 12);
    let lsb = (lsb & VARIANT_MASK) | VARIANT_RFC;

    bits::from_halves(msb, lsb)
}

/// Like [`generate`], taking the version as a plain number.
///
/// # Errors
///
/// Returns [`CodecError::UnsupportedVersion`] for anything but 3 or 5.
pub fn generate_by_number(version: u8, namespace: Option<&Uuid>, name: &str) -> CodecResult<Uuid> {
    Ok(generate(NameVersion::try_from(version)?, namespace, name))
}

/// First 16 bytes of the digest over namespace then name.
fn hash<D: Digest>(namespace: Option<&Uuid>, name: &str) -> [u8; 16] {
    let mut hasher = D::new();
    if let Some(ns) = namespace {
        hasher.update(bits::to_bytes(ns));
    }
    hasher.update(name.as_bytes());

    let digest = hasher.finalize();
    let mut out = [0u8; 16];
    out.copy_from_slice(&digest[..16]);
    out
}
