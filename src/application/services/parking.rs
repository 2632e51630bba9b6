//! Parking session service
//!
//! Drives a vehicle through `NoSession → Occupying → Parked → Exiting → Closed`:
//! a spot is picked and occupied on entry, the ticket is closed, priced and
//! the spot freed on exit.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::{FareCalculatorService, SpotAllocator};
use crate::application::ports::InputReader;
use crate::domain::{DomainError, DomainResult, ParkingSpot, ParkingType, RepositoryProvider, Ticket};

/// Where a vehicle stands in its visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    Occupying,
    Parked,
    Exiting,
    Closed,
}

/// Result of a successful entry
#[derive(Debug, Clone)]
pub struct IncomingOutcome {
    pub ticket: Ticket,
    /// The vehicle already had tickets on record and will get the
    /// recurring-user rate on exit.
    pub recurring: bool,
}

impl IncomingOutcome {
    pub fn state(&self) -> SessionState {
        SessionState::Parked
    }
}

/// Service for vehicle entry and exit
pub struct ParkingService {
    input: Arc<dyn InputReader>,
    repos: Arc<dyn RepositoryProvider>,
    allocator: SpotAllocator,
    fares: FareCalculatorService,
}

impl ParkingService {
    pub fn new(input: Arc<dyn InputReader>, repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            input,
            allocator: SpotAllocator::new(repos.clone()),
            repos,
            fares: FareCalculatorService::new(),
        }
    }

    /// Read the category and look up a free spot for it.
    ///
    /// Invalid selections and full lots both yield `None`.
    pub async fn get_next_parking_number_if_available(
        &self,
    ) -> DomainResult<Option<ParkingSpot>> {
        let selection = self.input.read_selection();
        let parking_type = ParkingType::from_selection(selection);
        if parking_type.is_none() {
            warn!(selection, "Incorrect vehicle type selection");
        }

        let spot = self.allocator.find_available_spot(parking_type).await?;
        if spot.is_none() {
            warn!(selection, "No parking spot available for the selected vehicle type");
        }
        Ok(spot)
    }

    /// Park an incoming vehicle.
    ///
    /// Returns `None` when no session started (invalid category or no free
    /// spot); nothing is written in that case.
    pub async fn process_incoming_vehicle(&self) -> DomainResult<Option<IncomingOutcome>> {
        let Some(mut spot) = self.get_next_parking_number_if_available().await? else {
            info!(state = ?SessionState::NoSession, "Vehicle turned away");
            return Ok(None);
        };

        let vehicle_id = self.input.read_vehicle_id()?;
        let tickets = self.repos.tickets();

        if tickets.get_open_ticket(&vehicle_id).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "vehicle {} is already parked",
                vehicle_id
            )));
        }
        let recurring = tickets.count_tickets_for(&vehicle_id).await? > 0;

        info!(
            state = ?SessionState::Occupying,
            vehicle_id = vehicle_id.as_str(),
            spot_id = spot.id,
            parking_type = %spot.parking_type,
            "Occupying parking spot"
        );

        spot.occupy();
        if !self.repos.spots().update_spot(&spot).await? {
            return Err(DomainError::PersistenceFailure(format!(
                "parking spot {} could not be marked occupied",
                spot.id
            )));
        }

        let ticket = match tickets.save_ticket(Ticket::new(vehicle_id, spot.clone())).await {
            Ok(ticket) => ticket,
            Err(e) => {
                spot.release();
                match self.repos.spots().update_spot(&spot).await {
                    Ok(true) => {}
                    Ok(false) => {
                        error!(spot_id = spot.id, "Spot left occupied after ticket save error")
                    }
                    Err(rollback) => {
                        error!(spot_id = spot.id, error = %rollback, "Failed to release spot after ticket save error")
                    }
                }
                return Err(e);
            }
        };

        if recurring {
            info!(
                vehicle_id = ticket.vehicle_id.as_str(),
                "Welcome back! As a recurring user you will benefit from a 5% discount"
            );
        }
        info!(
            state = ?SessionState::Parked,
            ticket_id = ticket.id,
            vehicle_id = ticket.vehicle_id.as_str(),
            spot_id = ticket.parking_spot.id,
            entry_time = %ticket.entry_time,
            "Vehicle parked"
        );

        Ok(Some(IncomingOutcome { ticket, recurring }))
    }

    /// Close the open ticket of an exiting vehicle, price it and free its spot.
    ///
    /// A missing open ticket is `NotFound`. If the ticket update does not land
    /// the spot stays occupied and `PersistenceFailure` is returned.
    pub async fn process_exiting_vehicle(&self) -> DomainResult<Ticket> {
        let vehicle_id = self.input.read_vehicle_id()?;
        let tickets = self.repos.tickets();

        let mut ticket = tickets
            .get_open_ticket(&vehicle_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Ticket",
                field: "vehicle_id",
                value: vehicle_id.clone(),
            })?;

        info!(
            state = ?SessionState::Exiting,
            ticket_id = ticket.id,
            vehicle_id = vehicle_id.as_str(),
            "Vehicle exiting"
        );

        ticket.exit_time = Some(Utc::now());
        let discount = tickets.count_tickets_for(&vehicle_id).await? > 1;
        self.fares.calculate_fare_with_discount(&mut ticket, discount)?;

        if !tickets.update_ticket(&ticket).await? {
            error!(
                ticket_id = ticket.id,
                vehicle_id = vehicle_id.as_str(),
                spot_id = ticket.parking_spot.id,
                "Unable to update ticket information, spot kept occupied"
            );
            return Err(DomainError::PersistenceFailure(format!(
                "ticket {} for vehicle {} could not be closed",
                ticket.id, vehicle_id
            )));
        }

        // The ticket is closed from here on; a spot release failure no longer fails the exit.
        ticket.parking_spot.release();
        match self.repos.spots().update_spot(&ticket.parking_spot).await {
            Ok(true) => {}
            Ok(false) => warn!(
                spot_id = ticket.parking_spot.id,
                "Ticket closed but parking spot could not be released"
            ),
            Err(e) => error!(
                spot_id = ticket.parking_spot.id,
                error = %e,
                "Ticket closed but parking spot release failed"
            ),
        }

        info!(
            state = ?SessionState::Closed,
            ticket_id = ticket.id,
            vehicle_id = vehicle_id.as_str(),
            duration_minutes = ticket.duration().map(|d| d.num_minutes()),
            price = ticket.price,
            discount,
            "Vehicle exited"
        );

        Ok(ticket)
    }
}

// ── Tests ──────────────────────────────────────────────────────
