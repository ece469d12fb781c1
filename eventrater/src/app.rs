//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::DATA_DIR_NAME;
use crate::error::{AppError, Result};
use crate::events::{Coordinates, EventRepository};
use crate::services::{EventsService, GeocodingService, SettingsService, StaticLocation};
use crate::storage::FileStore;
use std::path::PathBuf;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub events_service: EventsService<FileStore>,
    pub settings_service: SettingsService,
}

impl AppState {
    /// Application setup - create the data directory and wire services
    pub async fn setup(app_data_dir: PathBuf) -> Result<Self> {
        tracing::info!("Initializing application");
        tracing::info!("App data directory: {:?}", app_data_dir);

        let store = FileStore::new(app_data_dir.clone());
        store.initialize().await?;

        let events_service = EventsService::new(EventRepository::new(store));
        let settings_service = SettingsService::new(app_data_dir.clone());

        tracing::info!("Application initialized successfully");

        Ok(Self {
            app_data_dir,
            events_service,
            settings_service,
        })
    }

    /// Build the geocoding client from the current settings
    pub async fn geocoder(&self) -> Result<GeocodingService> {
        let settings = self.settings_service.get_geocoding().await?;

        if settings.api_key.is_empty() {
            return Err(AppError::Geocoding(
                "no API key configured; run `config set-geocoding` or set EVENTRATER_GEOCODING_KEY"
                    .to_string(),
            ));
        }

        GeocodingService::with_base_url(settings.api_key, settings.base_url)
    }

    /// Location provider for this run: an explicit position wins over the
    /// configured home position
    pub async fn location(&self, position: Option<Coordinates>) -> Result<StaticLocation> {
        let position = match position {
            Some(position) => Some(position),
            None => self.settings_service.get_home_position().await?,
        };

        Ok(StaticLocation::new(position))
    }
}

/// Platform data directory for the application
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or_else(|| AppError::Generic("Failed to get app data dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{GeocodingSettings, LocationProvider, PermissionStatus};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_setup_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("eventrater");

        let state = AppState::setup(dir.clone()).await.unwrap();

        assert!(dir.is_dir());
        assert!(state.events_service.list_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_geocoder_requires_api_key() {
        let temp = TempDir::new().unwrap();
        let state = AppState::setup(temp.path().to_path_buf()).await.unwrap();

        if std::env::var(crate::config::GEOCODING_KEY_ENV).is_err() {
            assert!(matches!(state.geocoder().await, Err(AppError::Geocoding(_))));
        }

        state
            .settings_service
            .update_geocoding(GeocodingSettings {
                api_key: "pk.test".to_string(),
                ..GeocodingSettings::default()
            })
            .await
            .unwrap();
        assert!(state.geocoder().await.is_ok());
    }

    #[tokio::test]
    async fn test_location_falls_back_to_home() {
        let temp = TempDir::new().unwrap();
        let state = AppState::setup(temp.path().to_path_buf()).await.unwrap();

        let location = state.location(None).await.unwrap();
        assert_eq!(location.request_permission().await, PermissionStatus::Denied);

        state
            .settings_service
            .update_home_position(Some(Coordinates::new(47.0, 8.0)))
            .await
            .unwrap();
        let location = state.location(None).await.unwrap();
        assert_eq!(location.current_position().await.unwrap().latitude, 47.0);

        let explicit = state
            .location(Some(Coordinates::new(1.0, 2.0)))
            .await
            .unwrap();
        assert_eq!(explicit.current_position().await.unwrap().latitude, 1.0);
    }
}
