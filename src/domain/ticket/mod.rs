//! Ticket aggregate
//!
//! Contains the Ticket entity, its status, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Ticket, TicketStatus};
pub use repository::TicketRepository;
