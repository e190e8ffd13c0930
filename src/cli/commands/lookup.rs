use serde::Serialize;

use crate::config::Config;
use crate::models::{Cached, Location, Meetup, Movie, Restaurant, Trail, Weather};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
struct LookupReport {
    location: Location,
    weather: Vec<Cached<Weather>>,
    restaurants: Vec<Cached<Restaurant>>,
    movies: Vec<Cached<Movie>>,
    meetups: Vec<Cached<Meetup>>,
    trails: Vec<Cached<Trail>>,
}

pub async fn cmd_lookup(config: Config, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Place name cannot be empty");
    }

    let state = SharedState::new(config).await?;

    let location = state.locations.resolve(query).await?;
    println!(
        "Resolved '{}' to {} ({}, {})",
        location.search_query, location.formatted_query, location.latitude, location.longitude
    );

    let (weather, restaurants, movies, meetups, trails) = futures::try_join!(
        state.weather.get(&location),
        state.restaurants.get(&location),
        state.movies.get(&location),
        state.meetups.get(&location),
        state.trails.get(&location),
    )?;

    let report = LookupReport {
        location,
        weather,
        restaurants,
        movies,
        meetups,
        trails,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
