//! Error handling module.
//!
//! [`CodecError`] is what the codec core reports; [`AppError`] wraps it for the
//! HTTP layer with status code mapping and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

/// The two failure kinds callers of the codec can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument is absent.
    NullInput,
    /// An argument is present but its content is rejected.
    InvalidArgument,
}

/// Errors raised by the encode/decode/generate core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A required input was not supplied at all.
    #[error("{0} must not be null")]
    NullInput(&'static str),

    /// Decode was asked to read an empty string.
    #[error("String '' must not be empty")]
    EmptyInput,

    /// Decode input holds characters outside the base's alphabet.
    #[error("String '{input}' contains illegal characters, only '{alphabet}' are allowed")]
    IllegalCharacters {
        /// The rejected input.
        input: String,
        /// The alphabet the input had to be drawn from.
        alphabet: &'static str,
    },

    /// The decoded value grew wider than the permitted bit count.
    #[error("String '{input}' contains more than {limit} bit information")]
    BitLimitExceeded {
        /// The rejected input.
        input: String,
        /// The bit ceiling in force.
        limit: u32,
    },

    /// A negative number was offered for encoding.
    #[error("number must not be negative")]
    NegativeNumber,

    /// Only name-based versions 3 and 5 are generated.
    #[error("unsupported UUID version {0}, expected 3 or 5")]
    UnsupportedVersion(u8),

    /// Only radix 36 and 62 are supported.
    #[error("unsupported base {0}, expected 36 or 62")]
    UnsupportedBase(u32),

    /// Text is not a 16-byte URL-safe Base64 UUID.
    #[error("invalid base64 UUID: {0}")]
    InvalidBase64(String),
}

impl CodecError {
    /// Classify this error into one of the two caller-visible kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullInput(_) => ErrorKind::NullInput,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Text that should be a UUID is not one.
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    /// Codec rejected the input.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::InvalidUuid(_) => ErrorCode::INVALID_UUID,
            Self::Codec(err) => match err.kind() {
                ErrorKind::NullInput => ErrorCode::NULL_INPUT,
                ErrorKind::InvalidArgument => ErrorCode::INVALID_ARGUMENT,
            },
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidUuid(_) | Self::Codec(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        tracing::error!(
            error_code = code,
            status = %status,
            message = %message,
            "Request failed"
        );

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `CodecError`.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(CodecError::NullInput("short_id").kind(), ErrorKind::NullInput);
        assert_eq!(CodecError::EmptyInput.kind(), ErrorKind::InvalidArgument);
        assert_eq!(CodecError::NegativeNumber.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            CodecError::UnsupportedVersion(4).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CodecError::BitLimitExceeded {
            input: "zz".to_string(),
            limit: 128,
        };
        assert_eq!(err.to_string(), "String 'zz' contains more than 128 bit information");
        assert_eq!(
            CodecError::NullInput("short_id").to_string(),
            "short_id must not be null"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::from(CodecError::NullInput("uuid")).error_code(),
            ErrorCode::NULL_INPUT
        );
        assert_eq!(
            AppError::from(CodecError::EmptyInput).error_code(),
            ErrorCode::INVALID_ARGUMENT
        );
        assert_eq!(
            AppError::InvalidUuid("nope".to_string()).error_code(),
            ErrorCode::INVALID_UUID
        );
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            ErrorCode::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(CodecError::EmptyInput).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
