//! Device position sources.
//!
//! A headless client has no GPS receiver, so the device fix comes from a
//! configured coordinate. An absent coordinate behaves exactly like a
//! refused location permission: the caller gets `PermissionDenied` and must
//! not fall back to a search.

use async_trait::async_trait;

use wayfind_core::error::{Result, WayfindError};
use wayfind_core::geo::{Coordinate, DeviceLocator};

/// Device locator backed by a configured position.
pub struct ConfiguredDeviceLocator {
    position: Option<Coordinate>,
}

impl ConfiguredDeviceLocator {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocator for ConfiguredDeviceLocator {
    async fn locate(&self) -> Result<Coordinate> {
        self.position.ok_or_else(|| {
            WayfindError::permission_denied("location access is not available: no device position configured")
        })
    }
}

/// Locator that always refuses, mirroring a denied permission prompt.
pub struct DeniedDeviceLocator;

#[async_trait]
impl DeviceLocator for DeniedDeviceLocator {
    async fn locate(&self) -> Result<Coordinate> {
        Err(WayfindError::permission_denied(
            "location permission was denied",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_position_is_returned() {
        let locator = ConfiguredDeviceLocator::new(Some(Coordinate::new(48.86, 2.35)));
        let fix = locator.locate().await.unwrap();
        assert_eq!(fix.latitude, 48.86);
    }

    #[tokio::test]
    async fn test_missing_position_is_permission_denied() {
        let locator = ConfiguredDeviceLocator::new(None);
        let err = locator.locate().await.unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[tokio::test]
    async fn test_denied_locator_refuses() {
        let err = DeniedDeviceLocator.locate().await.unwrap_err();
        assert!(err.is_permission_denied());
    }
}
