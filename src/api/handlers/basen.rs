//! Raw base-36/62 integer handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::api::extractors::ApiQuery;
use crate::api::handlers::required;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, Base, BaseNResponse};
use crate::error::{CodecError, Result};

/// Query parameters for encoding an integer.
#[derive(Debug, Deserialize)]
pub struct EncodeQuery {
    /// Decimal integer.
    pub value: Option<String>,
    /// Radix, 36 or 62.
    pub base: Option<u32>,
}

/// Query parameters for decoding digits.
#[derive(Debug, Deserialize)]
pub struct DecodeQuery {
    /// Digits to decode.
    pub encoded: Option<String>,
    /// Radix, 36 or 62.
    pub base: Option<u32>,
    /// Bit ceiling, 0 for none.
    #[serde(default)]
    pub bit_limit: u32,
}

fn base(radix: Option<u32>) -> Result<Base> {
    let radix = radix.ok_or(CodecError::NullInput("base"))?;
    Ok(Base::try_from(radix)?)
}

/// Encode a decimal integer.
pub async fn encode(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EncodeQuery>,
) -> Result<Json<ApiResponse<BaseNResponse>>> {
    let value = required("value", query.value.as_deref())?;
    let base = base(query.base)?;
    let encoded = state.short_uuid_service.encode_value(value, base)?;

    Ok(Json(ApiResponse::success(BaseNResponse {
        value: value.trim().to_string(),
        base,
        encoded,
    })))
}

/// Decode digits to a decimal integer.
pub async fn decode(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DecodeQuery>,
) -> Result<Json<ApiResponse<BaseNResponse>>> {
    let encoded = required("encoded", query.encoded.as_deref())?;
    let base = base(query.base)?;
    let value = state
        .short_uuid_service
        .decode_value(encoded, base, query.bit_limit)?;

    Ok(Json(ApiResponse::success(BaseNResponse {
        value,
        base,
        encoded: encoded.to_string(),
    })))
}
