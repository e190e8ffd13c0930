use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::validation::validate_search_query;
use super::{ApiError, AppState, DataQuery};
use crate::models::Location;

/// `GET /location?data={place}`
///
/// Returns the stored location for the place, geocoding it on first use.
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Result<Json<Location>, ApiError> {
    let query = validate_search_query(params.data.as_deref().unwrap_or_default())?;
    let location = state.shared.locations.resolve(query).await?;
    Ok(Json(location))
}
