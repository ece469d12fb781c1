//! Event persistence
//!
//! Event models and the repository that keeps the collection in a
//! key-value store.

pub mod models;
pub mod repository;

pub use models::{Coordinates, EventDraft, EventRecord, NearbyEvent, RatingCriterion, Ratings};
pub use repository::EventRepository;
