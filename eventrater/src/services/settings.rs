//! Settings service
//!
//! Manages application settings persistence using JSON file storage.

use crate::config::{DEFAULT_GEOCODING_URL, GEOCODING_KEY_ENV, SETTINGS_FILE_NAME};
use crate::error::{AppError, Result};
use crate::events::Coordinates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Reverse geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingSettings {
    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,
}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_geocoding_url(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    /// Position used for the nearby list when none is given on the command line
    #[serde(default)]
    pub home_position: Option<Coordinates>,
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::Generic(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Get geocoding settings, with the API key taken from the environment if set
    pub async fn get_geocoding(&self) -> Result<GeocodingSettings> {
        let mut geocoding = self.load().await?.geocoding;

        if let Ok(key) = std::env::var(GEOCODING_KEY_ENV) {
            if !key.is_empty() {
                geocoding.api_key = key;
            }
        }

        Ok(geocoding)
    }

    /// Update geocoding settings
    pub async fn update_geocoding(&self, geocoding: GeocodingSettings) -> Result<()> {
        let mut settings = self.load().await?;
        settings.geocoding = geocoding;
        self.save(&settings).await?;
        Ok(())
    }

    /// Get the configured home position
    pub async fn get_home_position(&self) -> Result<Option<Coordinates>> {
        Ok(self.load().await?.home_position)
    }

    /// Set or clear the home position
    pub async fn update_home_position(&self, position: Option<Coordinates>) -> Result<()> {
        let mut settings = self.load().await?;
        settings.home_position = position;
        self.save(&settings).await?;
        Ok(())
    }
}
