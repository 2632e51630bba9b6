//! Fare schedule and the fare rule

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, DomainResult, ParkingType};

/// Fixed fare schedule
pub struct Fare;

impl Fare {
    pub const CAR_RATE_PER_HOUR: f64 = 1.5;
    pub const BIKE_RATE_PER_HOUR: f64 = 1.0;
    /// Visits shorter than this are free
    pub const FREE_DURATION_HOURS: f64 = 0.5;
    /// Multiplier applied for vehicles on their second visit or later
    pub const RECURRING_USER_RATE: f64 = 0.95;

    /// Hourly rate for a category. There is no fallback rate.
    pub fn hourly_rate(parking_type: &ParkingType) -> DomainResult<f64> {
        match parking_type {
            ParkingType::Car => Ok(Self::CAR_RATE_PER_HOUR),
            ParkingType::Bike => Ok(Self::BIKE_RATE_PER_HOUR),
            ParkingType::Unknown(name) => Err(DomainError::InvalidArgument(format!(
                "Unknown parking type: {}",
                name
            ))),
        }
    }
}

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Compute the fare for a visit.
///
/// Fails with `InvalidArgument` when the exit time is missing or earlier
/// than the entry time, and when the category has no rate. Visits under
/// half an hour cost nothing. There is no daily cap and no rounding.
pub fn compute_fare(
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
    parking_type: &ParkingType,
    discount: bool,
) -> DomainResult<f64> {
    let exit_time = match exit_time {
        Some(exit) if exit >= entry_time => exit,
        Some(exit) => {
            return Err(DomainError::InvalidArgument(format!(
                "Exit time provided is incorrect: {}",
                exit.to_rfc3339()
            )))
        }
        None => {
            return Err(DomainError::InvalidArgument(
                "Exit time provided is incorrect: none".to_string(),
            ))
        }
    };

    // Checked before the free period: an unsupported category fails at any duration.
    let hourly_rate = Fare::hourly_rate(parking_type)?;

    let duration_ms = (exit_time - entry_time).num_milliseconds();
    let duration_hours = duration_ms as f64 / MILLIS_PER_HOUR;

    if duration_hours < Fare::FREE_DURATION_HOURS {
        return Ok(0.0);
    }

    let rate_multiplier = if discount {
        Fare::RECURRING_USER_RATE
    } else {
        1.0
    };

    Ok(duration_hours * hourly_rate * rate_multiplier)
}

/// Two-decimal rendering for receipts and console output.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

// ── Tests ──────────────────────────────────────────────────────
