pub mod fare;
pub mod parking_spot;
pub mod repositories;
pub mod ticket;

// Re-export commonly used types
pub use fare::{compute_fare, format_price, Fare};
pub use parking_spot::{ParkingSpot, ParkingSpotRepository, ParkingType};
pub use repositories::{DomainResult, RepositoryProvider};
pub use ticket::{Ticket, TicketRepository, TicketStatus};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
