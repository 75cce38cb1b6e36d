//! Professional search endpoint.

use axum::{extract::State, routing::post, Json, Router};
use tracing::debug;

use paramed_domain::{ProfessionalRecord, SearchTerms};

use crate::{error::ApiResult, state::AppState};

/// Search routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search-paramedical", post(search_paramedical))
}

/// Find professionals by city and specialization.
///
/// Both terms match their field as a case-insensitive literal substring and
/// both must match (logical AND). Empty terms match everything. The response
/// is the full, unordered array of matching records; no match is an empty
/// array, not an error.
async fn search_paramedical(
    State(state): State<AppState>,
    Json(terms): Json<SearchTerms>,
) -> ApiResult<Json<Vec<ProfessionalRecord>>> {
    let results = state.registrations.search(&terms).await?;
    debug!(
        city = %terms.city,
        specialization = %terms.specialization,
        matches = results.len(),
        "Search completed"
    );
    Ok(Json(results))
}
