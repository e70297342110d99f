//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Base;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// A UUID alongside its short id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIdResponse {
    /// The UUID in hyphenated form.
    pub uuid: Uuid,

    /// The short id.
    pub short_id: String,
}

/// Result of shortening an arbitrary identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The identifier as given.
    pub id: String,

    /// Short id if `id` was a UUID, else `id` stripped to `[A-Za-z0-9]`.
    pub shortened: String,
}

/// A batch of generated ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse<T> {
    /// List of generated IDs.
    pub ids: Vec<T>,
}

impl<T> IdResponse<T> {
    /// Create a new ID response.
    pub const fn new(ids: Vec<T>) -> Self {
        Self { ids }
    }
}

/// Response for random short id generation.
pub type RandomIdResponse = IdResponse<String>;

/// Response for name-based UUID generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUuidResponse {
    /// The derived UUID.
    pub uuid: Uuid,
}

/// A UUID alongside its URL-safe Base64 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Response {
    /// The UUID in hyphenated form.
    pub uuid: Uuid,

    /// Unpadded URL-safe Base64 of the 16-byte layout.
    pub base64: String,
}

/// An integer and its base-N digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseNResponse {
    /// Decimal text of the value.
    pub value: String,

    /// The radix used.
    pub base: Base,

    /// The encoded digits.
    pub encoded: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,
}
