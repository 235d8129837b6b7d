use crate::{
    dto::{LookupParams, LookupResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use ferrous_lookup_domain::LookupQuery;
use std::time::Instant;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_lookup_domain")]
pub async fn lookup_domain(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LookupResponse>, ApiError> {
    let started = Instant::now();
    let params = LookupParams::from(pairs);

    let query = LookupQuery::parse(params.domain.as_deref())?;
    let result = state.resolve_domain.execute(&query, started).await?;

    debug!(
        domain = %result.domain,
        ip_address = %result.ip_address,
        lookup_ms = result.lookup_time.as_millis() as u64,
        "Lookup complete"
    );

    Ok(Json(LookupResponse::from(result)))
}
