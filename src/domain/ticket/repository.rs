//! Ticket repository interface

use async_trait::async_trait;

use super::model::Ticket;
use crate::domain::DomainResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Store a new ticket and return it with its assigned id.
    ///
    /// Implementations reject a second open ticket for the same vehicle
    /// with `DomainError::Conflict`.
    async fn save_ticket(&self, ticket: Ticket) -> DomainResult<Ticket>;
    async fn get_open_ticket(&self, vehicle_id: &str) -> DomainResult<Option<Ticket>>;
    /// Persist exit time and price. `false` means the update did not land.
    async fn update_ticket(&self, ticket: &Ticket) -> DomainResult<bool>;
    /// Number of tickets ever recorded for `vehicle_id`, open ones included.
    async fn count_tickets_for(&self, vehicle_id: &str) -> DomainResult<u32>;
    async fn list_tickets_for(&self, vehicle_id: &str) -> DomainResult<Vec<Ticket>>;
}
