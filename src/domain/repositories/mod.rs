//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to the per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::parking_spot::ParkingSpotRepository;
use super::ticket::TicketRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn exit(repos: &dyn RepositoryProvider, vehicle_id: &str) -> DomainResult<()> {
///     let ticket = repos.tickets().get_open_ticket(vehicle_id).await?;
///     // ...
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn spots(&self) -> &dyn ParkingSpotRepository;
    fn tickets(&self) -> &dyn TicketRepository;
}
