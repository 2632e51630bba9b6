//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::config::LotConfig;
use crate::domain::{
    DomainError, DomainResult, ParkingSpot, ParkingSpotRepository, ParkingType,
    RepositoryProvider, Ticket, TicketRepository,
};

/// In-memory storage for development and testing
pub struct InMemoryStorage {
    spots: DashMap<i32, ParkingSpot>,
    tickets: DashMap<i32, Ticket>,
    ticket_counter: AtomicI32,
}

impl InMemoryStorage {
    pub fn new(spots: Vec<ParkingSpot>) -> Self {
        Self {
            spots: spots.into_iter().map(|s| (s.id, s)).collect(),
            tickets: DashMap::new(),
            ticket_counter: AtomicI32::new(1),
        }
    }

    pub fn from_lot(lot: &LotConfig) -> Self {
        Self::new(lot.spots())
    }

    pub fn get_spot(&self, id: i32) -> Option<ParkingSpot> {
        self.spots.get(&id).map(|s| s.clone())
    }

    pub fn free_spot_count(&self, parking_type: &ParkingType) -> usize {
        self.spots
            .iter()
            .filter(|s| s.available && &s.parking_type == parking_type)
            .count()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::from_lot(&LotConfig::default())
    }
}

#[async_trait]
impl ParkingSpotRepository for InMemoryStorage {
    async fn next_available_slot(&self, parking_type: &ParkingType) -> DomainResult<i32> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.available && &s.parking_type == parking_type)
            .map(|s| s.id)
            .min()
            .unwrap_or(0))
    }

    async fn update_spot(&self, spot: &ParkingSpot) -> DomainResult<bool> {
        match self.spots.get_mut(&spot.id) {
            Some(mut stored) => {
                stored.available = spot.available;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryStorage {
    async fn save_ticket(&self, mut ticket: Ticket) -> DomainResult<Ticket> {
        let already_parked = self
            .tickets
            .iter()
            .any(|t| t.vehicle_id == ticket.vehicle_id && t.is_open());
        if already_parked {
            return Err(DomainError::Conflict(format!(
                "vehicle {} already has an open ticket",
                ticket.vehicle_id
            )));
        }

        ticket.id = self.ticket_counter.fetch_add(1, Ordering::SeqCst);
        self.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn get_open_ticket(&self, vehicle_id: &str) -> DomainResult<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_id == vehicle_id && t.is_open())
            .max_by_key(|t| t.entry_time)
            .map(|t| t.clone()))
    }

    async fn update_ticket(&self, ticket: &Ticket) -> DomainResult<bool> {
        match self.tickets.get_mut(&ticket.id) {
            Some(stored) if stored.vehicle_id != ticket.vehicle_id => {
                Err(DomainError::Storage(format!(
                    "ticket {} belongs to vehicle {}, not {}",
                    ticket.id, stored.vehicle_id, ticket.vehicle_id
                )))
            }
            Some(mut stored) => {
                stored.exit_time = ticket.exit_time;
                stored.price = ticket.price;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_tickets_for(&self, vehicle_id: &str) -> DomainResult<u32> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_id == vehicle_id)
            .count() as u32)
    }

    async fn list_tickets_for(&self, vehicle_id: &str) -> DomainResult<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| t.vehicle_id == vehicle_id)
            .map(|t| t.clone())
            .collect();
        tickets.sort_by_key(|t| t.id);
        Ok(tickets)
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn spots(&self) -> &dyn ParkingSpotRepository {
        self
    }

    fn tickets(&self) -> &dyn TicketRepository {
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────
