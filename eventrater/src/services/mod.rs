//! Services module
//!
//! Business logic services that coordinate between the front end and the
//! event repository, plus the external lookups the flows depend on.

pub mod events;
pub mod geocoding;
pub mod location;
pub mod settings;

pub use events::EventsService;
pub use geocoding::GeocodingService;
pub use location::{LocationProvider, PermissionStatus, StaticLocation};
pub use settings::{AppSettings, GeocodingSettings, SettingsService};
