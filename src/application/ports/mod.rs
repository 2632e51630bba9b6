//! Ports — interfaces the application layer drives
//!
//! - [`InputReader`] — operator input (vehicle category, registration number)

pub mod inbound;

pub use inbound::InputReader;
