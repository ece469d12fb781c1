//! Event models
//!
//! Rust structs representing stored events.
//! Field names serialize in camelCase so collections written by the
//! mobile app load unchanged.

use crate::config::{MAX_RATING, MIN_RATING};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// One of the five fixed rating criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCriterion {
    Location,
    Entertainment,
    Atmosphere,
    Prices,
    Overall,
}

impl RatingCriterion {
    pub const ALL: [RatingCriterion; 5] = [
        RatingCriterion::Location,
        RatingCriterion::Entertainment,
        RatingCriterion::Atmosphere,
        RatingCriterion::Prices,
        RatingCriterion::Overall,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingCriterion::Location => "Location",
            RatingCriterion::Entertainment => "Entertainment",
            RatingCriterion::Atmosphere => "Atmosphere",
            RatingCriterion::Prices => "Prices",
            RatingCriterion::Overall => "Overall",
        }
    }
}

/// Ratings on the five criteria, each in `[MIN_RATING, MAX_RATING]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ratings {
    pub location: u8,
    pub entertainment: u8,
    pub atmosphere: u8,
    pub prices: u8,
    pub overall: u8,
}

impl Ratings {
    pub fn get(&self, criterion: RatingCriterion) -> u8 {
        match criterion {
            RatingCriterion::Location => self.location,
            RatingCriterion::Entertainment => self.entertainment,
            RatingCriterion::Atmosphere => self.atmosphere,
            RatingCriterion::Prices => self.prices,
            RatingCriterion::Overall => self.overall,
        }
    }

    /// Set one criterion, rejecting values outside the rating scale
    pub fn set(
        &mut self,
        criterion: RatingCriterion,
        value: u8,
    ) -> std::result::Result<(), ValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ValidationError::RatingOutOfRange {
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }

        let slot = match criterion {
            RatingCriterion::Location => &mut self.location,
            RatingCriterion::Entertainment => &mut self.entertainment,
            RatingCriterion::Atmosphere => &mut self.atmosphere,
            RatingCriterion::Prices => &mut self.prices,
            RatingCriterion::Overall => &mut self.overall,
        };
        *slot = value;

        Ok(())
    }

    /// Arithmetic mean of the five criteria
    pub fn average(&self) -> f64 {
        let total: u32 = RatingCriterion::ALL
            .iter()
            .map(|c| u32::from(self.get(*c)))
            .sum();
        f64::from(total) / RatingCriterion::ALL.len() as f64
    }

    /// Average with two decimals, as displayed in lists and details
    pub fn format_average(&self) -> String {
        format!("{:.2}", self.average())
    }
}

/// A stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: u32,
    pub name: String,
    /// Display string, not a canonical timestamp
    pub date: String,
    /// Display string, not a canonical timestamp
    pub time: String,
    /// Reverse-geocoded address
    pub location_name: String,
    pub location_data: Coordinates,
    #[serde(default)]
    pub ratings: Ratings,
}

/// Identity fields of an event, as produced by the add and edit forms
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location_name: String,
    pub location_data: Coordinates,
}

impl EventDraft {
    /// Turn the draft into a fresh record with zero ratings
    pub fn into_record(self, id: u32) -> EventRecord {
        EventRecord {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            location_name: self.location_name,
            location_data: self.location_data,
            ratings: Ratings::default(),
        }
    }

    /// Overwrite the identity fields of `record`, keeping its id and ratings
    pub fn apply_to(self, record: &EventRecord) -> EventRecord {
        EventRecord {
            ratings: record.ratings,
            ..self.into_record(record.id)
        }
    }
}

/// An event together with its distance from the user, in kilometres
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    pub distance: f64,
}
