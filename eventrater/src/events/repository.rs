//! Repository layer for the event collection
//!
//! The whole collection lives under a single key as a JSON array.
//! Every mutation reads the full collection and writes it back.

use super::models::{EventDraft, EventRecord};
use crate::config::EVENTS_STORAGE_KEY;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Repository for event records
#[derive(Clone)]
pub struct EventRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EventRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: EVENTS_STORAGE_KEY.to_string(),
        }
    }

    /// Load all events; a missing or unreadable collection yields an empty list
    pub async fn load(&self) -> Vec<EventRecord> {
        match self.read_all().await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Error loading events: {}", e);
                Vec::new()
            }
        }
    }

    /// Strict load: `None` when nothing is stored, an error when the stored
    /// collection cannot be read or parsed
    pub async fn try_load(&self) -> Result<Option<Vec<EventRecord>>> {
        match self.store.get_item(&self.key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Find an event by id
    pub async fn find_by_id(&self, id: u32) -> Option<EventRecord> {
        self.load().await.into_iter().find(|e| e.id == id)
    }

    /// Append a new event; its id is the collection length plus one
    pub async fn append(&self, draft: EventDraft) -> Result<EventRecord> {
        let mut events = self.read_all().await?;

        let id = events.len() as u32 + 1;
        let record = draft.into_record(id);
        events.push(record.clone());

        self.write_all(&events).await?;

        tracing::debug!("Appended event: {}", id);
        Ok(record)
    }

    /// Replace the first event with a matching id; returns false if none matched
    pub async fn update_by_id(&self, id: u32, record: EventRecord) -> Result<bool> {
        let updated = self.modify_by_id(id, |_| record).await?;
        Ok(updated.is_some())
    }

    /// Rewrite the first event with a matching id from its stored value,
    /// in one read and one write. Returns the new record, `None` if none matched.
    pub async fn modify_by_id<F>(&self, id: u32, modify: F) -> Result<Option<EventRecord>>
    where
        F: FnOnce(&EventRecord) -> EventRecord,
    {
        let mut events = self.read_all().await?;

        let Some(index) = events.iter().position(|e| e.id == id) else {
            tracing::warn!("Event not found for updating: {}", id);
            return Ok(None);
        };

        let record = modify(&events[index]);
        events[index] = record.clone();
        self.write_all(&events).await?;

        tracing::debug!("Updated event: {}", id);
        Ok(Some(record))
    }

    /// Remove the first event with a matching id; returns false if none matched
    pub async fn delete_by_id(&self, id: u32) -> Result<bool> {
        let mut events = self.read_all().await?;

        let Some(index) = events.iter().position(|e| e.id == id) else {
            tracing::warn!("Event not found for deleting: {}", id);
            return Ok(false);
        };

        events.remove(index);
        self.write_all(&events).await?;

        tracing::debug!("Deleted event: {}", id);
        Ok(true)
    }

    /// Strict read used by mutations, so a corrupt collection is never overwritten
    async fn read_all(&self) -> Result<Vec<EventRecord>> {
        Ok(self.try_load().await?.unwrap_or_default())
    }

    async fn write_all(&self, events: &[EventRecord]) -> Result<()> {
        let raw = serde_json::to_string(events)?;
        self.store.set_item(&self.key, &raw).await
    }
}
