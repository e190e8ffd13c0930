//! Fake providers and store setup shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use city_explorer::clients::{GeocodedPlace, Geocoder, RecordSource};
use city_explorer::db::Store;
use city_explorer::models::{Location, Meetup, Movie, Restaurant, Trail, Weather};
use city_explorer::state::Sources;

/// A provider that serves canned records and counts how often it is called.
pub struct FakeSource<R> {
    records: Mutex<Vec<R>>,
    fail: bool,
    calls: AtomicUsize,
}

impl<R: Clone> FakeSource<R> {
    pub fn new(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_records(&self, records: Vec<R>) {
        *self.records.lock().unwrap() = records;
    }
}

#[async_trait::async_trait]
impl<R: Clone + Send + Sync> RecordSource<R> for FakeSource<R> {
    fn service(&self) -> &'static str {
        "Fake"
    }

    async fn fetch(&self, _location: &Location) -> anyhow::Result<Vec<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("Fake API error: 503 Service Unavailable - upstream down");
        }
        Ok(self.records.lock().unwrap().clone())
    }
}

pub struct FakeGeocoder {
    places: Vec<GeocodedPlace>,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn new(places: Vec<GeocodedPlace>) -> Arc<Self> {
        Arc::new(Self {
            places,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Geocoder for FakeGeocoder {
    fn service(&self) -> &'static str {
        "Fake Geocoder"
    }

    async fn geocode(&self, _query: &str) -> anyhow::Result<Vec<GeocodedPlace>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.places.clone())
    }
}

pub struct Fakes {
    pub geocoder: Arc<FakeGeocoder>,
    pub weather: Arc<FakeSource<Weather>>,
    pub restaurants: Arc<FakeSource<Restaurant>>,
    pub movies: Arc<FakeSource<Movie>>,
    pub meetups: Arc<FakeSource<Meetup>>,
    pub trails: Arc<FakeSource<Trail>>,
}

impl Fakes {
    pub fn sources(&self) -> Sources {
        Sources {
            geocoder: self.geocoder.clone(),
            weather: self.weather.clone(),
            restaurants: self.restaurants.clone(),
            movies: self.movies.clone(),
            meetups: self.meetups.clone(),
            trails: self.trails.clone(),
        }
    }
}

pub fn seattle() -> GeocodedPlace {
    GeocodedPlace {
        formatted_address: "Seattle, WA, USA".to_string(),
        latitude: 47.606_209_5,
        longitude: -122.332_070_8,
    }
}

pub fn sample_weather() -> Vec<Weather> {
    vec![
        Weather {
            forecast: "Light rain in the morning.".to_string(),
            time: "Mon Jan 01 2024".to_string(),
        },
        Weather {
            forecast: "Overcast throughout the day.".to_string(),
            time: "Tue Jan 02 2024".to_string(),
        },
    ]
}

pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![Restaurant {
        name: "Pike Place Chowder".to_string(),
        image_url: "https://img.example/chowder.jpg".to_string(),
        price: Some("$$".to_string()),
        rating: 4.5,
        url: "https://www.yelp.com/biz/pike-place-chowder-seattle".to_string(),
    }]
}

pub fn sample_movies() -> Vec<Movie> {
    vec![Movie {
        title: "Sleepless in Seattle".to_string(),
        overview: "A recently widowed man's son calls a radio talk-show.".to_string(),
        average_votes: 6.8,
        total_votes: 1500,
        image_url: None,
        popularity: 12.25,
        released_on: Some("1993-06-24".to_string()),
    }]
}

pub fn sample_meetups() -> Vec<Meetup> {
    vec![Meetup {
        link: "https://www.meetup.com/seattle-rust/events/1/".to_string(),
        name: "Rust Hack Night".to_string(),
        creation_date: "Fri Mar 15 2019".to_string(),
        host: "Seattle Rust User Group".to_string(),
    }]
}

pub fn sample_trails() -> Vec<Trail> {
    vec![Trail {
        name: "Rattlesnake Ledge".to_string(),
        location: "North Bend, Washington".to_string(),
        length: 4.3,
        stars: 4.5,
        star_votes: 84,
        summary: "A popular hike to a ledge overlooking the lake.".to_string(),
        trail_url: "https://www.hikingproject.com/trail/7011192".to_string(),
        conditions: Some("Dry".to_string()),
        condition_date: "2018-07-21".to_string(),
        condition_time: "17:13:21".to_string(),
    }]
}

pub fn fakes() -> Fakes {
    Fakes {
        geocoder: FakeGeocoder::new(vec![seattle()]),
        weather: FakeSource::new(sample_weather()),
        restaurants: FakeSource::new(sample_restaurants()),
        movies: FakeSource::new(sample_movies()),
        meetups: FakeSource::new(sample_meetups()),
        trails: FakeSource::new(sample_trails()),
    }
}

pub fn temp_database_url() -> String {
    let db_path = std::env::temp_dir().join(format!(
        "city-explorer-test-{}.db",
        uuid::Uuid::new_v4()
    ));
    format!("sqlite:{}", db_path.display())
}

pub async fn temp_store() -> Store {
    Store::new(&temp_database_url())
        .await
        .expect("failed to open test store")
}
