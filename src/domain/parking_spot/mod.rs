//! Parking spot aggregate
//!
//! Contains the ParkingSpot entity, vehicle categories, and repository interface.

pub mod model;
pub mod repository;

pub use model::{ParkingSpot, ParkingType};
pub use repository::ParkingSpotRepository;
