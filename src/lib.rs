//! # Parking Service
//!
//! Parking lot session management: spot allocation by vehicle category,
//! entry/exit tickets and fare computation.
//!
//! ## Architecture
//!
//! - **domain**: spots, tickets, the fare rule and repository traits
//! - **application**: spot allocation and the parking session service
//! - **infrastructure**: in-memory storage and console input adapters
//! - **config**: TOML configuration
//! - **support**: errors and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::services::{
    FareCalculatorService, IncomingOutcome, ParkingService, SessionState, SpotAllocator,
};
pub use infrastructure::{ConsoleInputReader, InMemoryStorage};
pub use support::logging::init_tracing;
