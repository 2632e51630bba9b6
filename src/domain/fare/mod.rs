//! Fare schedule
//!
//! Hourly rates per category and the pure fare rule.

pub mod model;

pub use model::{compute_fare, format_price, Fare};
