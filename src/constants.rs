pub mod cache {

    pub const WEATHER_TTL_MINUTES: u32 = 1;

    pub const RESTAURANT_TTL_MINUTES: u32 = 2;

    pub const MOVIE_TTL_MINUTES: u32 = 3;

    pub const MEETUP_TTL_MINUTES: u32 = 4;

    pub const TRAIL_TTL_MINUTES: u32 = 5;
}

pub mod providers {

    pub const GOOGLE_GEOCODE_API: &str = "https://maps.googleapis.com";

    pub const DARKSKY_API: &str = "https://api.darksky.net";

    pub const YELP_API: &str = "https://api.yelp.com";

    pub const TMDB_API: &str = "https://api.themoviedb.org";

    pub const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w200_and_h300_bestv2/";

    pub const MEETUP_API: &str = "https://api.meetup.com";

    pub const HIKING_PROJECT_API: &str = "https://www.hikingproject.com";

    pub const USER_AGENT: &str = "CityExplorer/1.0";
}

pub mod api {

    /// Body text of every failed lookup; details stay in the server log.
    pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong";
}
