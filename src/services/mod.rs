//! Lookup services sitting between the HTTP layer and the store/providers.

pub mod cache_policy;
pub mod category_service;
pub mod error;
pub mod location_service;

pub use cache_policy::CachePolicy;
pub use category_service::CategoryService;
pub use error::LookupError;
pub use location_service::LocationService;
