//! HTTP request handlers.

pub mod basen;
pub mod health;
pub mod short;
pub mod uuid;

use ::uuid::Uuid;

use crate::error::{AppError, CodecError};
use crate::service::bits;

/// A required query parameter; absence is [`CodecError::NullInput`].
fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, CodecError> {
    value.ok_or(CodecError::NullInput(field))
}

/// Parse hyphenated UUID text from a request.
fn parse_uuid(text: &str) -> Result<Uuid, AppError> {
    bits::parse_canonical(text).ok_or_else(|| AppError::InvalidUuid(text.to_string()))
}
