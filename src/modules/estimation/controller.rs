use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::schema::{
    CodesQuery, CodesResponse, DecodeQuery, DecodeResponse, EstimationErrorResponse, FieldQuery,
    FieldResponse, QuantileResponse,
};
use crate::services::chains::Architecture;
use crate::services::estimation::{
    decode_payloads, normalize_estimation, EstimationError, EstimationRecord, PayloadValues,
};
use crate::services::schema::{
    describe_field_in, Quantile, DEFAULT_DISPLAY_CODES, DEFAULT_SCHEMA_VERSION,
};
use crate::AppState;

/// Accepts either the integer code or the string tag
fn arch_code(raw: &str) -> u8 {
    raw.trim()
        .parse::<u8>()
        .unwrap_or_else(|_| Architecture::from_tag(raw).code())
}

// =============================================================================
// GET /schema/quantiles, /schema/display-codes
// =============================================================================

pub async fn list_quantiles() -> Json<Vec<QuantileResponse>> {
    Json(Quantile::ALL.into_iter().map(QuantileResponse::from).collect())
}

pub async fn get_display_codes() -> Json<Vec<u32>> {
    Json(DEFAULT_DISPLAY_CODES.to_vec())
}

// =============================================================================
// GET /schema/fields/{code} - Unknown codes are a normal answer, not an error
// =============================================================================

pub async fn get_field(
    Path(code): Path<u32>,
    Query(query): Query<FieldQuery>,
) -> Json<FieldResponse> {
    let arch = query
        .arch
        .as_deref()
        .map(|raw| Architecture::from_code(arch_code(raw)).unwrap_or_default())
        .unwrap_or(Architecture::Evm);
    let version = query.version.unwrap_or(DEFAULT_SCHEMA_VERSION);

    let field = describe_field_in(arch, version, code).copied();
    Json(FieldResponse {
        code,
        known: field.is_some(),
        field,
    })
}

// =============================================================================
// GET /codes?arch=evm&chain_id=1
// =============================================================================

pub async fn select_codes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CodesQuery>,
) -> Json<CodesResponse> {
    let arch_code = arch_code(&query.arch);
    Json(CodesResponse {
        arch_code,
        chain_id: query.chain_id,
        codes: state.selector.select(arch_code, query.chain_id),
    })
}

// =============================================================================
// POST /estimations/normalize
// =============================================================================

type EstimationResult<T> = Result<Json<T>, (StatusCode, Json<EstimationErrorResponse>)>;

fn unprocessable(e: EstimationError) -> (StatusCode, Json<EstimationErrorResponse>) {
    tracing::debug!("Rejected estimation payload: {}", e);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(EstimationErrorResponse::new(e.to_string())),
    )
}

pub async fn normalize(Json(raw): Json<Value>) -> EstimationResult<EstimationRecord> {
    normalize_estimation(&raw).map(Json).map_err(unprocessable)
}

// =============================================================================
// POST /estimations/decode?version=1 - Typed view of a v2 oracle read
// =============================================================================

pub async fn decode(
    Query(query): Query<DecodeQuery>,
    Json(values): Json<PayloadValues>,
) -> EstimationResult<DecodeResponse> {
    let version = query.version.unwrap_or(DEFAULT_SCHEMA_VERSION);
    let decoded = decode_payloads(&values, version).map_err(unprocessable)?;

    Ok(Json(DecodeResponse {
        arch: Architecture::from_code(values.systemid).unwrap_or_default(),
        chain_id: values.chainid,
        height: values.height,
        timestamp: values.timestamp,
        values: decoded,
    }))
}
