//! Ticket domain entity

use chrono::{DateTime, Utc};

use crate::domain::ParkingSpot;

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Vehicle is parked, exit time not recorded yet
    Open,
    /// Exit time recorded and fare computed
    Closed,
}

/// Parking ticket for one visit of one vehicle
#[derive(Debug, Clone)]
pub struct Ticket {
    /// Storage-assigned id (0 until saved)
    pub id: i32,
    /// Vehicle registration number
    pub vehicle_id: String,
    /// Spot held for the duration of the visit
    pub parking_spot: ParkingSpot,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    /// Fare owed, unrounded
    pub price: f64,
}

impl Ticket {
    /// Open a ticket for `vehicle_id` on `parking_spot`, entering now.
    pub fn new(vehicle_id: impl Into<String>, parking_spot: ParkingSpot) -> Self {
        Self::entered_at(vehicle_id, parking_spot, Utc::now())
    }

    pub fn entered_at(
        vehicle_id: impl Into<String>,
        parking_spot: ParkingSpot,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            vehicle_id: vehicle_id.into(),
            parking_spot,
            entry_time,
            exit_time: None,
            price: 0.0,
        }
    }

    pub fn status(&self) -> TicketStatus {
        if self.exit_time.is_some() {
            TicketStatus::Closed
        } else {
            TicketStatus::Open
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == TicketStatus::Open
    }

    /// Parked duration, if the exit time is known
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.exit_time.map(|exit| exit - self.entry_time)
    }
}

// ── Tests ──────────────────────────────────────────────────────
