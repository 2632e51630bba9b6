//! Recording fakes of the ports, for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::InputReader;
use crate::domain::{
    DomainError, DomainResult, ParkingSpot, ParkingSpotRepository, ParkingType,
    RepositoryProvider, Ticket, TicketRepository,
};

/// Storage fake with scripted answers and a log of every write
pub struct FakeRepos {
    next_slot: i32,
    update_ticket_result: bool,
    update_spot_result: bool,
    spot_update_error: Option<String>,
    save_ticket_error: Mutex<Option<DomainError>>,
    prior_tickets: u32,
    open_ticket: Mutex<Option<Ticket>>,
    slot_queries: AtomicUsize,
    spot_updates: Mutex<Vec<ParkingSpot>>,
    saved_tickets: Mutex<Vec<Ticket>>,
    updated_tickets: Mutex<Vec<Ticket>>,
}

impl FakeRepos {
    pub fn new() -> Self {
        Self {
            next_slot: 1,
            update_ticket_result: true,
            update_spot_result: true,
            spot_update_error: None,
            save_ticket_error: Mutex::new(None),
            prior_tickets: 0,
            open_ticket: Mutex::new(None),
            slot_queries: AtomicUsize::new(0),
            spot_updates: Mutex::new(Vec::new()),
            saved_tickets: Mutex::new(Vec::new()),
            updated_tickets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_next_slot(slot: i32) -> Arc<Self> {
        Self::new().next_slot(slot).shared()
    }

    pub fn next_slot(mut self, slot: i32) -> Self {
        self.next_slot = slot;
        self
    }

    pub fn update_ticket_result(mut self, result: bool) -> Self {
        self.update_ticket_result = result;
        self
    }

    pub fn update_spot_result(mut self, result: bool) -> Self {
        self.update_spot_result = result;
        self
    }

    /// Every `update_spot` call fails with `DomainError::Storage(message)`.
    pub fn spot_update_error(mut self, message: &str) -> Self {
        self.spot_update_error = Some(message.to_string());
        self
    }

    /// The next `save_ticket` call fails with `error`.
    pub fn save_ticket_error(self, error: DomainError) -> Self {
        *self.save_ticket_error.lock().unwrap() = Some(error);
        self
    }

    /// Tickets already on record for any vehicle, open ones included.
    pub fn prior_tickets(mut self, count: u32) -> Self {
        self.prior_tickets = count;
        self
    }

    pub fn open_ticket(self, ticket: Ticket) -> Self {
        *self.open_ticket.lock().unwrap() = Some(ticket);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn slot_queries(&self) -> usize {
        self.slot_queries.load(Ordering::SeqCst)
    }

    pub fn spot_updates(&self) -> Vec<ParkingSpot> {
        self.spot_updates.lock().unwrap().clone()
    }

    pub fn saved_tickets(&self) -> Vec<Ticket> {
        self.saved_tickets.lock().unwrap().clone()
    }

    pub fn updated_tickets(&self) -> Vec<Ticket> {
        self.updated_tickets.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParkingSpotRepository for FakeRepos {
    async fn next_available_slot(&self, _parking_type: &ParkingType) -> DomainResult<i32> {
        self.slot_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.next_slot)
    }

    async fn update_spot(&self, spot: &ParkingSpot) -> DomainResult<bool> {
        self.spot_updates.lock().unwrap().push(spot.clone());
        if let Some(message) = &self.spot_update_error {
            return Err(DomainError::Storage(message.clone()));
        }
        Ok(self.update_spot_result)
    }
}

#[async_trait]
impl TicketRepository for FakeRepos {
    async fn save_ticket(&self, mut ticket: Ticket) -> DomainResult<Ticket> {
        if let Some(error) = self.save_ticket_error.lock().unwrap().take() {
            return Err(error);
        }
        let mut saved = self.saved_tickets.lock().unwrap();
        ticket.id = saved.len() as i32 + 1;
        saved.push(ticket.clone());
        Ok(ticket)
    }

    async fn get_open_ticket(&self, vehicle_id: &str) -> DomainResult<Option<Ticket>> {
        Ok(self
            .open_ticket
            .lock()
            .unwrap()
            .clone()
            .filter(|t| t.vehicle_id == vehicle_id))
    }

    async fn update_ticket(&self, ticket: &Ticket) -> DomainResult<bool> {
        self.updated_tickets.lock().unwrap().push(ticket.clone());
        Ok(self.update_ticket_result)
    }

    async fn count_tickets_for(&self, _vehicle_id: &str) -> DomainResult<u32> {
        Ok(self.prior_tickets + self.saved_tickets.lock().unwrap().len() as u32)
    }

    async fn list_tickets_for(&self, vehicle_id: &str) -> DomainResult<Vec<Ticket>> {
        Ok(self
            .saved_tickets
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }
}

impl RepositoryProvider for FakeRepos {
    fn spots(&self) -> &dyn ParkingSpotRepository {
        self
    }

    fn tickets(&self) -> &dyn TicketRepository {
        self
    }
}

/// Input fake replaying a fixed selection and registration number
pub struct ScriptedInput {
    selection: i32,
    vehicle_id: String,
    vehicle_id_reads: AtomicUsize,
}

impl ScriptedInput {
    pub fn new(selection: i32, vehicle_id: &str) -> Arc<Self> {
        Arc::new(Self {
            selection,
            vehicle_id: vehicle_id.to_string(),
            vehicle_id_reads: AtomicUsize::new(0),
        })
    }

    pub fn vehicle_id_reads(&self) -> usize {
        self.vehicle_id_reads.load(Ordering::SeqCst)
    }
}

impl InputReader for ScriptedInput {
    fn read_selection(&self) -> i32 {
        self.selection
    }

    fn read_vehicle_id(&self) -> DomainResult<String> {
        self.vehicle_id_reads.fetch_add(1, Ordering::SeqCst);
        let id = self.vehicle_id.trim();
        if id.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Invalid input provided: empty vehicle registration number".to_string(),
            ));
        }
        Ok(id.to_string())
    }
}
