//! Application configuration constants
//!
//! Central location for storage keys, validation boundaries, geocoding
//! defaults and display formats used throughout the application.

// ===== Storage =====

/// Key under which the whole event collection is stored
pub const EVENTS_STORAGE_KEY: &str = "events";

/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory name used under the platform data dir when none is given
pub const DATA_DIR_NAME: &str = "eventrater";

// ===== Validation Limits =====

/// Maximum length of an event name, counted in characters
pub const MAX_EVENT_NAME_LENGTH: usize = 20;

/// Lowest value a single rating criterion can take (Poor)
pub const MIN_RATING: u8 = 0;

/// Highest value a single rating criterion can take (Excellent)
pub const MAX_RATING: u8 = 3;

// ===== Geography =====

/// Mean earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Centre of the map shown when picking an event location
pub const DEFAULT_MAP_LATITUDE: f64 = 47.377051;
pub const DEFAULT_MAP_LONGITUDE: f64 = 8.085590;

// ===== Reverse Geocoding =====

/// LocationIQ reverse geocoding endpoint
pub const DEFAULT_GEOCODING_URL: &str = "https://us1.locationiq.com/v1/reverse.php";

/// Shown when the geocoder answers without a usable address
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Environment variable that overrides the stored geocoding API key
pub const GEOCODING_KEY_ENV: &str = "EVENTRATER_GEOCODING_KEY";

// ===== Display Formats =====

/// en-US short date, e.g. "3/7/2024"
pub const DATE_DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

/// en-US time with seconds, e.g. "7:05:00 PM"
pub const TIME_DISPLAY_FORMAT: &str = "%-I:%M:%S %p";
