use thiserror::Error;

/// Failures of a cache-or-fetch lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} request failed: {message}")]
    Provider { service: String, message: String },

    #[error("{service} returned no results")]
    EmptyResult { service: String },

    #[error("Store error: {0}")]
    Store(String),
}

impl LookupError {
    pub fn provider(service: &str, err: &anyhow::Error) -> Self {
        Self::Provider {
            service: service.to_string(),
            message: format!("{err:#}"),
        }
    }

    pub fn empty(service: &str) -> Self {
        Self::EmptyResult {
            service: service.to_string(),
        }
    }
}

impl From<anyhow::Error> for LookupError {
    fn from(err: anyhow::Error) -> Self {
        Self::Store(format!("{err:#}"))
    }
}

impl From<sea_orm::DbErr> for LookupError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Store(err.to_string())
    }
}
