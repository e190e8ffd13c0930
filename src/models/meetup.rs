use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meetup {
    pub link: String,
    pub name: String,
    /// Day string of when the event was created on the provider.
    pub creation_date: String,
    pub host: String,
}
