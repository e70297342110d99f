//! Short id handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::api::extractors::ApiQuery;
use crate::api::handlers::{parse_uuid, required};
use crate::api::state::AppState;
use crate::domain::{ApiResponse, RandomIdResponse, ShortIdResponse, ShortenResponse};
use crate::error::Result;

/// Query parameters for encoding a UUID.
#[derive(Debug, Deserialize)]
pub struct EncodeQuery {
    /// UUID in hyphenated form.
    pub uuid: Option<String>,
    /// Use base 62 instead of base 36.
    pub case_sensitive: Option<bool>,
}

/// Query parameters for decoding a short id.
#[derive(Debug, Deserialize)]
pub struct DecodeQuery {
    /// The short id.
    pub short_id: Option<String>,
    /// Read the id as base 62 instead of base 36.
    pub case_sensitive: Option<bool>,
}

/// Query parameters for shortening an arbitrary identifier.
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    /// Identifier to shorten.
    pub id: Option<String>,
    /// Use base 62 instead of base 36.
    pub case_sensitive: Option<bool>,
}

/// Query parameters for random short ids.
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Number of ids to generate (default: 1).
    #[serde(default = "default_count")]
    pub count: u32,
    /// Use base 62 instead of base 36.
    pub case_sensitive: Option<bool>,
}

const fn default_count() -> u32 {
    1
}

/// Encode a UUID as a short id.
pub async fn encode(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EncodeQuery>,
) -> Result<Json<ApiResponse<ShortIdResponse>>> {
    let uuid = parse_uuid(required("uuid", query.uuid.as_deref())?)?;
    let short_id = state.short_uuid_service.encode(&uuid, query.case_sensitive);

    Ok(Json(ApiResponse::success(ShortIdResponse { uuid, short_id })))
}

/// Decode a short id to its UUID.
pub async fn decode(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DecodeQuery>,
) -> Result<Json<ApiResponse<ShortIdResponse>>> {
    let short_id = required("short_id", query.short_id.as_deref())?;
    let uuid = state
        .short_uuid_service
        .decode(short_id, query.case_sensitive)?;

    Ok(Json(ApiResponse::success(ShortIdResponse {
        uuid,
        short_id: short_id.to_string(),
    })))
}

/// Shorten a UUID, or sanitize any other identifier.
pub async fn shorten(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ShortenQuery>,
) -> Result<Json<ApiResponse<ShortenResponse>>> {
    let id = required("id", query.id.as_deref())?;
    let shortened = state.short_uuid_service.shorten(id, query.case_sensitive);

    Ok(Json(ApiResponse::success(ShortenResponse {
        id: id.to_string(),
        shortened,
    })))
}

/// Generate random short ids.
pub async fn random(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<ApiResponse<RandomIdResponse>>> {
    let ids = state
        .short_uuid_service
        .random(query.count, query.case_sensitive)?;

    Ok(Json(ApiResponse::success(RandomIdResponse::new(ids))))
}
