//! Events service
//!
//! High-level flows behind the screens: create, edit, rate, delete and the
//! nearby list. Validation happens here, before the repository is touched.

use crate::error::{AppError, Result};
use crate::events::{EventDraft, EventRecord, EventRepository, NearbyEvent, Ratings};
use crate::geo::sort_by_distance;
use crate::services::location::{LocationProvider, PermissionStatus};
use crate::storage::KeyValueStore;
use crate::validation::validate_event_fields;

/// Service for managing events
#[derive(Clone)]
pub struct EventsService<S> {
    repo: EventRepository<S>,
}

impl<S: KeyValueStore> EventsService<S> {
    pub fn new(repo: EventRepository<S>) -> Self {
        Self { repo }
    }

    /// Create a new event with zero ratings
    pub async fn create_event(&self, draft: EventDraft) -> Result<EventRecord> {
        validate_event_fields(&draft.name, &draft.location_name)?;

        tracing::info!("Creating new event: {}", draft.name);

        let event = self.repo.append(draft).await?;

        tracing::info!("Event created successfully: {}", event.id);

        Ok(event)
    }

    /// Get an event by ID
    pub async fn get_event(&self, id: u32) -> Result<EventRecord> {
        self.repo
            .find_by_id(id)
            .await
            .ok_or(AppError::EventNotFound(id))
    }

    /// List all events in stored order
    pub async fn list_events(&self) -> Vec<EventRecord> {
        self.repo.load().await
    }

    /// List events nearest first.
    ///
    /// Returns `None` without touching the sorter when nothing is stored or
    /// location permission is denied. An unreadable collection is an error.
    pub async fn list_nearby<L: LocationProvider>(
        &self,
        location: &L,
    ) -> Result<Option<Vec<NearbyEvent>>> {
        let Some(events) = self.repo.try_load().await? else {
            tracing::debug!("No events stored");
            return Ok(None);
        };

        if location.request_permission().await != PermissionStatus::Granted {
            tracing::info!("Location permission denied, skipping proximity sort");
            return Ok(None);
        }

        let position = location.current_position().await?;

        tracing::debug!("Sorting {} events around {}", events.len(), position);

        Ok(Some(sort_by_distance(events, position)))
    }

    /// Replace the identity fields of an event, keeping its ratings.
    ///
    /// Returns `None` if no event has this id.
    pub async fn edit_event(&self, id: u32, draft: EventDraft) -> Result<Option<EventRecord>> {
        validate_event_fields(&draft.name, &draft.location_name)?;

        let updated = self
            .repo
            .modify_by_id(id, |existing| draft.apply_to(existing))
            .await?;

        if updated.is_some() {
            tracing::info!("Event updated successfully: {}", id);
        }
        Ok(updated)
    }

    /// Replace the ratings of an event.
    ///
    /// Returns `None` if no event has this id.
    pub async fn rate_event(&self, id: u32, ratings: Ratings) -> Result<Option<EventRecord>> {
        let updated = self
            .repo
            .modify_by_id(id, |existing| EventRecord {
                ratings,
                ..existing.clone()
            })
            .await?;

        if let Some(event) = &updated {
            tracing::info!(
                "Event {} rated, average {}",
                id,
                event.ratings.format_average()
            );
        }
        Ok(updated)
    }

    /// Delete an event; returns false if no event has this id
    pub async fn delete_event(&self, id: u32) -> Result<bool> {
        tracing::info!("Deleting event: {}", id);

        let deleted = self.repo.delete_by_id(id).await?;

        if deleted {
            tracing::info!("Event deleted successfully: {}", id);
        }

        Ok(deleted)
    }
}
