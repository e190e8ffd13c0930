pub mod location;
pub mod meetup;
pub mod movie;
pub mod restaurant;
pub mod trail;
pub mod weather;

/// Rows per multi-row INSERT. Trails carry twelve columns, which keeps a
/// batch well under SQLite's bound-parameter limit.
pub(crate) const INSERT_BATCH_SIZE: usize = 50;
