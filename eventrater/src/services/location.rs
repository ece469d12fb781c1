//! Device location
//!
//! The seam between the list flow and whatever knows where the user is.

use crate::error::{AppError, Result};
use crate::events::Coordinates;

/// Outcome of a foreground location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of the user's current position
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> Result<Coordinates>;
}

/// Provider backed by a fixed, optionally absent position.
///
/// Without a position the permission is reported as denied.
#[derive(Debug, Clone, Default)]
pub struct StaticLocation {
    position: Option<Coordinates>,
}

impl StaticLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }

    pub fn at(position: Coordinates) -> Self {
        Self::new(Some(position))
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }
}

impl LocationProvider for StaticLocation {
    async fn request_permission(&self) -> PermissionStatus {
        if self.position.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<Coordinates> {
        self.position
            .ok_or_else(|| AppError::LocationUnavailable("no position configured".to_string()))
    }
}
