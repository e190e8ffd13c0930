//! Handlers for the per-location category endpoints.
//!
//! Each one decodes the location from `data` and hands it to its
//! category's cache-or-fetch service.

use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::validation::parse_location_param;
use super::{ApiError, AppState, DataQuery};
use crate::models::{Cached, Meetup, Movie, Restaurant, Trail, Weather};

type Records<R> = Result<Json<Vec<Cached<R>>>, ApiError>;

/// `GET /weather`
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Records<Weather> {
    let location = parse_location_param(&params)?;
    Ok(Json(state.shared.weather.get(&location).await?))
}

/// `GET /yelp`
pub async fn get_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Records<Restaurant> {
    let location = parse_location_param(&params)?;
    Ok(Json(state.shared.restaurants.get(&location).await?))
}

/// `GET /movies`
pub async fn get_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Records<Movie> {
    let location = parse_location_param(&params)?;
    Ok(Json(state.shared.movies.get(&location).await?))
}

/// `GET /meetups`
pub async fn get_meetups(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Records<Meetup> {
    let location = parse_location_param(&params)?;
    Ok(Json(state.shared.meetups.get(&location).await?))
}

/// `GET /trails`
pub async fn get_trails(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> Records<Trail> {
    let location = parse_location_param(&params)?;
    Ok(Json(state.shared.trails.get(&location).await?))
}
