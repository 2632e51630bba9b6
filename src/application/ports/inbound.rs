//! Inbound ports — where vehicle events get their data from

use crate::domain::DomainResult;

/// Source of operator input for one vehicle event.
///
/// Implementations are free to prompt, read a sensor, or replay a script.
pub trait InputReader: Send + Sync {
    /// Menu selection for the vehicle category. `-1` when the input could
    /// not be read as a number.
    fn read_selection(&self) -> i32;

    /// Vehicle registration number, trimmed.
    ///
    /// Fails with `DomainError::InvalidArgument` when it is empty.
    fn read_vehicle_id(&self) -> DomainResult<String>;
}
