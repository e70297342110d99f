//! UUID generation and layout handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::api::extractors::ApiQuery;
use crate::api::handlers::{parse_uuid, required};
use crate::api::state::AppState;
use crate::domain::{ApiResponse, Base64Response, NamedUuidResponse};
use crate::error::{CodecError, Result};

/// Query parameters for name-based UUIDs.
#[derive(Debug, Deserialize)]
pub struct NamedQuery {
    /// UUID version: 3 (MD5) or 5 (SHA-1).
    pub version: Option<u8>,
    /// Optional namespace UUID.
    pub namespace: Option<String>,
    /// The name to hash.
    pub name: Option<String>,
}

/// Query parameters for the Base64 form of a UUID.
#[derive(Debug, Deserialize)]
pub struct Base64Query {
    /// UUID in hyphenated form.
    pub uuid: Option<String>,
}

/// Query parameters for parsing the Base64 form.
#[derive(Debug, Deserialize)]
pub struct FromBase64Query {
    /// Unpadded URL-safe Base64 text.
    pub base64: Option<String>,
}

/// Derive a name-based UUID.
pub async fn named(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<NamedQuery>,
) -> Result<Json<ApiResponse<NamedUuidResponse>>> {
    let version = query.version.ok_or(CodecError::NullInput("version"))?;
    let name = required("name", query.name.as_deref())?;
    let namespace = query.namespace.as_deref().map(parse_uuid).transpose()?;

    let uuid = state
        .short_uuid_service
        .named(version, namespace.as_ref(), name)?;

    Ok(Json(ApiResponse::success(NamedUuidResponse { uuid })))
}

/// URL-safe Base64 form of a UUID.
pub async fn to_base64(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<Base64Query>,
) -> Result<Json<ApiResponse<Base64Response>>> {
    let uuid = parse_uuid(required("uuid", query.uuid.as_deref())?)?;
    let base64 = state.short_uuid_service.to_base64(&uuid);

    Ok(Json(ApiResponse::success(Base64Response { uuid, base64 })))
}

/// Parse the URL-safe Base64 form of a UUID.
pub async fn from_base64(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FromBase64Query>,
) -> Result<Json<ApiResponse<Base64Response>>> {
    let base64 = required("base64", query.base64.as_deref())?;
    let uuid = state.short_uuid_service.from_base64(base64)?;

    Ok(Json(ApiResponse::success(Base64Response {
        uuid,
        base64: base64.to_string(),
    })))
}
