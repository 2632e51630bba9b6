//! Parking spot repository interface

use async_trait::async_trait;

use super::model::{ParkingSpot, ParkingType};
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Id of the next free spot for `parking_type`, or `0` when none is free.
    async fn next_available_slot(&self, parking_type: &ParkingType) -> DomainResult<i32>;
    /// Persist the availability flag of `spot`. `false` means nothing was updated.
    async fn update_spot(&self, spot: &ParkingSpot) -> DomainResult<bool>;
}
