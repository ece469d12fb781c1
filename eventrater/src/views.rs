//! Screen view models
//!
//! Each screen keeps its state in an explicit struct and renders it with a
//! pure function. Nothing here owns storage; flows go through
//! [`EventsService`].

use crate::config::{
    DATE_DISPLAY_FORMAT, MAX_EVENT_NAME_LENGTH, MAX_RATING, MIN_RATING, TIME_DISPLAY_FORMAT,
};
use crate::error::ValidationError;
use crate::events::{Coordinates, EventDraft, EventRecord, NearbyEvent, RatingCriterion, Ratings};
use crate::services::{EventsService, GeocodingService, LocationProvider};
use crate::storage::KeyValueStore;
use crate::validation::{is_valid_name, validate_event_fields};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Named screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    AddEvent,
    EditEvent,
    EventDetails,
    RateEvent,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "EventRater",
            Screen::AddEvent => "Add an Event",
            Screen::EditEvent => "Edit the Event",
            Screen::EventDetails => "Event Details",
            Screen::RateEvent => "Rate the Event",
        }
    }
}

/// Format a picked date the way it is stored on the record
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Format a picked time the way it is stored on the record
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_DISPLAY_FORMAT).to_string()
}

// ===== Home =====

/// One row of the home list
#[derive(Debug, Clone, PartialEq)]
pub struct HomeEntry {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location_name: String,
    pub average: String,
    /// Kilometres from the user, when the list was sorted by proximity
    pub distance: Option<f64>,
}

impl From<&EventRecord> for HomeEntry {
    fn from(event: &EventRecord) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location_name: event.location_name.clone(),
            average: event.ratings.format_average(),
            distance: None,
        }
    }
}

impl From<&NearbyEvent> for HomeEntry {
    fn from(nearby: &NearbyEvent) -> Self {
        Self {
            distance: Some(nearby.distance),
            ..HomeEntry::from(&nearby.event)
        }
    }
}

/// State of the home (list) screen
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    pub entries: Vec<HomeEntry>,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsorted view of the stored collection
    pub fn from_events(events: &[EventRecord]) -> Self {
        Self {
            entries: events.iter().map(HomeEntry::from).collect(),
        }
    }

    /// Reload the list nearest first.
    ///
    /// When permission is denied or the position lookup fails, the prior
    /// entries stay on screen.
    pub async fn refresh<S, L>(&mut self, service: &EventsService<S>, location: &L)
    where
        S: KeyValueStore,
        L: LocationProvider,
    {
        match service.list_nearby(location).await {
            Ok(Some(nearby)) => {
                self.entries = nearby.iter().map(HomeEntry::from).collect();
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Error loading events: {}", e),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", Screen::Home.title());

        if self.entries.is_empty() {
            let _ = writeln!(out, "No events to show.");
            return out;
        }

        for entry in &self.entries {
            let _ = writeln!(out);
            let _ = writeln!(out, "[{}] {}", entry.id, entry.name);
            let _ = writeln!(out, "{}", entry.date);
            let _ = writeln!(out, "{}", entry.time);
            let _ = writeln!(out, "{}", entry.location_name);
            let _ = writeln!(out, "Average Ratings: {}", entry.average);
            if let Some(distance) = entry.distance {
                let _ = writeln!(out, "Distance: {:.1} km", distance);
            }
        }

        out
    }
}

// ===== Event details =====

/// State of the details screen
#[derive(Debug, Clone)]
pub struct EventDetailsView {
    pub event: EventRecord,
}

impl EventDetailsView {
    pub fn new(event: EventRecord) -> Self {
        Self { event }
    }

    pub fn render(&self) -> String {
        let e = &self.event;
        let mut out = String::new();
        let _ = writeln!(out, "{}", Screen::EventDetails.title());
        let _ = writeln!(out, "{}", e.name);
        let _ = writeln!(out, "{}", e.date);
        let _ = writeln!(out, "{}", e.time);
        let _ = writeln!(out, "{}", e.location_name);
        let _ = writeln!(out, "Coordinates: {}", e.location_data);
        let _ = writeln!(out, "Average Ratings: {}", e.ratings.format_average());
        for criterion in RatingCriterion::ALL {
            let _ = writeln!(
                out,
                "  {}: {}/{}",
                criterion.label(),
                e.ratings.get(criterion),
                MAX_RATING
            );
        }
        out
    }
}

// ===== Add / edit =====

/// State of the add and edit forms
#[derive(Debug, Clone)]
pub struct EventForm {
    pub screen: Screen,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<Coordinates>,
    pub address: String,
}

impl EventForm {
    /// Empty add form; date and time pickers start at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            screen: Screen::AddEvent,
            name: String::new(),
            date: now.date(),
            time: now.time(),
            location: None,
            address: String::new(),
        }
    }

    /// Edit form pre-filled from an existing record.
    ///
    /// Stored date and time are parsed back into the pickers; a value that
    /// does not parse starts at `now`.
    pub fn for_edit(event: &EventRecord, now: NaiveDateTime) -> Self {
        let date = NaiveDate::parse_from_str(&event.date, DATE_DISPLAY_FORMAT)
            .unwrap_or_else(|_| now.date());
        let time = NaiveTime::parse_from_str(&event.time, TIME_DISPLAY_FORMAT)
            .unwrap_or_else(|_| now.time());

        Self {
            screen: Screen::EditEvent,
            name: event.name.clone(),
            date,
            time,
            location: Some(event.location_data),
            address: event.location_name.clone(),
        }
    }

    /// Change the name; input past the length limit is ignored
    pub fn set_name(&mut self, text: &str) -> bool {
        if !is_valid_name(text) {
            return false;
        }
        self.name = text.to_string();
        true
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    /// Select a map position; the address is kept until it is resolved again
    pub fn select_location(&mut self, coords: Coordinates) {
        self.location = Some(coords);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Select a position and resolve its address.
    ///
    /// A failed lookup is logged and leaves the previous address in place.
    pub async fn pick_location(&mut self, coords: Coordinates, geocoder: &GeocodingService) {
        self.select_location(coords);

        match geocoder.reverse(coords).await {
            Ok(address) => self.address = address,
            Err(e) => tracing::error!("Error getting address: {}", e),
        }
    }

    /// Validate the form and build the draft to store
    pub fn to_draft(&self) -> Result<EventDraft, ValidationError> {
        validate_event_fields(&self.name, &self.address)?;
        let location = self.location.ok_or(ValidationError::MissingFields)?;

        Ok(EventDraft {
            name: self.name.clone(),
            date: format_date(self.date),
            time: format_time(self.time),
            location_name: self.address.clone(),
            location_data: location,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.screen.title());
        let _ = writeln!(
            out,
            "Name ({}/{}): {}",
            self.name.chars().count(),
            MAX_EVENT_NAME_LENGTH,
            self.name
        );
        let _ = writeln!(out, "Date: {}", format_date(self.date));
        let _ = writeln!(out, "Time: {}", format_time(self.time));
        match self.location {
            Some(coords) => {
                let _ = writeln!(out, "Location: {}", coords);
            }
            None => {
                let _ = writeln!(out, "Location: none selected");
            }
        }
        let _ = writeln!(out, "Selected Address: {}", self.address);
        out
    }
}

// ===== Rate =====

/// State of the rating screen
#[derive(Debug, Clone)]
pub struct RateForm {
    pub event_name: String,
    pub ratings: Ratings,
}

impl RateForm {
    /// Sliders start at zero, as on the original screen
    pub fn new(event: &EventRecord) -> Self {
        Self {
            event_name: event.name.clone(),
            ratings: Ratings::default(),
        }
    }

    pub fn set(&mut self, criterion: RatingCriterion, value: u8) -> Result<(), ValidationError> {
        self.ratings.set(criterion, value)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", Screen::RateEvent.title());
        let _ = writeln!(out, "{}", self.event_name);
        let _ = writeln!(
            out,
            "Rate the following aspects from {} (Poor) to {} (Excellent):",
            MIN_RATING, MAX_RATING
        );
        for criterion in RatingCriterion::ALL {
            let _ = writeln!(
                out,
                "{}: {}",
                criterion.label(),
                self.ratings.get(criterion)
            );
        }
        out
    }
}
