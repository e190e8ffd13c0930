use serde::{Deserialize, Serialize};

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub forecast: String,
    /// Day string such as `Mon Jan 01 2024`.
    pub time: String,
}
