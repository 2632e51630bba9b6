//! Fare calculation for closed tickets

use tracing::debug;

use crate::domain::{compute_fare, DomainResult, Ticket};

/// Applies the fare rule to tickets
#[derive(Debug, Default, Clone, Copy)]
pub struct FareCalculatorService;

impl FareCalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Price `ticket` at the full rate.
    pub fn calculate_fare(&self, ticket: &mut Ticket) -> DomainResult<()> {
        self.calculate_fare_with_discount(ticket, false)
    }

    /// Price `ticket`, applying the recurring-user rate when `discount` is set.
    ///
    /// On error the ticket price is left untouched.
    pub fn calculate_fare_with_discount(
        &self,
        ticket: &mut Ticket,
        discount: bool,
    ) -> DomainResult<()> {
        let price = compute_fare(
            ticket.entry_time,
            ticket.exit_time,
            &ticket.parking_spot.parking_type,
            discount,
        )?;

        debug!(
            vehicle_id = ticket.vehicle_id.as_str(),
            parking_type = %ticket.parking_spot.parking_type,
            discount,
            price,
            "Fare calculated"
        );
        ticket.price = price;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
