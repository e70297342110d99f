//! Service layer module.
//!
//! The codec core ([`basen`], [`bits`], [`short`], [`named`]) is a set of pure
//! functions; [`ShortUuidService`] wraps them for the HTTP layer.

pub mod basen;
pub mod bits;
pub mod codec;
pub mod named;
pub mod short;

pub use codec::ShortUuidService;
pub use named::NameVersion;
