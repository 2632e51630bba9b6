//! Application services

mod fare_calculator;
mod parking;
mod spot_allocator;

#[cfg(test)]
pub(crate) mod fakes;

pub use fare_calculator::FareCalculatorService;
pub use parking::{IncomingOutcome, ParkingService, SessionState};
pub use spot_allocator::SpotAllocator;
