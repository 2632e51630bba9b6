//! Spot allocation

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainResult, ParkingSpot, ParkingType, RepositoryProvider};

/// Finds a free spot for a vehicle category
pub struct SpotAllocator {
    repos: Arc<dyn RepositoryProvider>,
}

impl SpotAllocator {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Next free spot for `parking_type`, marked available.
    ///
    /// An absent or unsupported category is reported as `None`, like a full
    /// lot. Nothing is written; the caller occupies the spot.
    pub async fn find_available_spot(
        &self,
        parking_type: Option<ParkingType>,
    ) -> DomainResult<Option<ParkingSpot>> {
        let parking_type = match parking_type {
            Some(t) if t.is_supported() => t,
            other => {
                debug!(parking_type = ?other, "No spot for unsupported category");
                return Ok(None);
            }
        };

        let spot_id = self.repos.spots().next_available_slot(&parking_type).await?;
        if spot_id <= 0 {
            debug!(%parking_type, "Parking lot is full for category");
            return Ok(None);
        }

        Ok(Some(ParkingSpot::new(spot_id, parking_type, true)))
    }
}

// ── Tests ──────────────────────────────────────────────────────
