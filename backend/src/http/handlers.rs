//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the pure
//! service layer for the KPI computation.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use tracing::{debug, warn};

use super::dto::{
    parse_request, CompareKpisRequest, DeltaKpis, GetKpisRequest, HealthResponse, SiteInfo,
    SiteKpis, ToolManifest,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{find_site, MOCK_SITES};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn ensure_known_site(site_id: &str) -> Result<&'static SiteInfo, AppError> {
    find_site(site_id).ok_or_else(|| {
        warn!(site_id, "rejected request for unknown site");
        AppError::NotFound(format!("Unknown site_id '{}'", site_id))
    })
}

fn parse_body<T>(endpoint: &str, body: &[u8]) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned + super::dto::ValidateRequest,
{
    parse_request(body).map_err(|e| {
        warn!(endpoint, error = %e, "rejected request body");
        AppError::from(e)
    })
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Liveness check. Performs no dependency checks.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Sites
// =============================================================================

/// GET /sites
pub async fn list_sites() -> HandlerResult<Vec<SiteInfo>> {
    Ok(Json(MOCK_SITES.to_vec()))
}

/// GET /sites/{site_id}
pub async fn get_site(Path(site_id): Path<String>) -> HandlerResult<SiteInfo> {
    let site = ensure_known_site(&site_id)?;
    Ok(Json(site.clone()))
}

// =============================================================================
// KPIs
// =============================================================================

/// POST /get-kpis
///
/// Synthesize KPIs for one site and period. Accepts a flat body or one
/// wrapped under `parameters`.
pub async fn get_kpis(body: Bytes) -> HandlerResult<SiteKpis> {
    let request: GetKpisRequest = parse_body("get-kpis", &body)?;
    ensure_known_site(&request.site_id)?;

    let kpis = services::synthesize(&request.site_id, request.period);
    debug!(
        site_id = %kpis.site_id,
        period = %kpis.period,
        meals_served = kpis.meals_served,
        "synthesized KPIs"
    );

    Ok(Json(kpis))
}

/// POST /compare-kpis
///
/// Compare one site's KPIs between two periods.
pub async fn compare_kpis(body: Bytes) -> HandlerResult<DeltaKpis> {
    let request: CompareKpisRequest = parse_body("compare-kpis", &body)?;
    ensure_known_site(&request.site_id)?;

    let delta = services::compare(
        &request.site_id,
        request.current_period,
        request.previous_period,
    );
    debug!(
        site_id = %delta.site_id,
        current = %delta.current_period,
        previous = %delta.previous_period,
        waste_trend = delta.waste_trend.as_str(),
        co2_trend = delta.co2_trend.as_str(),
        vegetarian_trend = delta.vegetarian_trend.as_str(),
        "compared KPIs"
    );

    Ok(Json(delta))
}

// =============================================================================
// Tool Manifest
// =============================================================================

/// GET /opal-tool-registry
pub async fn tool_registry(State(state): State<AppState>) -> HandlerResult<ToolManifest> {
    Ok(Json(state.manifest.as_ref().clone()))
}
