//! Line-based operator input

use std::io::{BufRead, BufReader, Stdin};
use std::sync::Mutex;

use tracing::{error, warn};

use crate::application::ports::InputReader;
use crate::domain::{DomainError, DomainResult};

/// Reads one answer per line from any buffered source (stdin by default)
pub struct ConsoleInputReader<R> {
    reader: Mutex<R>,
}

impl ConsoleInputReader<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead + Send> ConsoleInputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    fn read_line(&self) -> std::io::Result<String> {
        let mut line = String::new();
        let mut reader = self
            .reader
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead + Send> InputReader for ConsoleInputReader<R> {
    fn read_selection(&self) -> i32 {
        match self.read_line() {
            Ok(line) => line.parse().unwrap_or_else(|_| {
                warn!(input = line.as_str(), "Selection is not a number");
                -1
            }),
            Err(e) => {
                error!(error = %e, "Failed to read selection");
                -1
            }
        }
    }

    fn read_vehicle_id(&self) -> DomainResult<String> {
        let line = self.read_line().map_err(|e| {
            DomainError::InvalidArgument(format!("failed to read vehicle registration number: {e}"))
        })?;

        if line.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Invalid input provided: empty vehicle registration number".to_string(),
            ));
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_selection_then_registration() {
        let input = ConsoleInputReader::new(Cursor::new("1\n  ABC-123 \n"));
        assert_eq!(input.read_selection(), 1);
        assert_eq!(input.read_vehicle_id().unwrap(), "ABC-123");
    }

    #[test]
    fn garbage_selection_is_minus_one() {
        let input = ConsoleInputReader::new(Cursor::new("car\n"));
        assert_eq!(input.read_selection(), -1);
    }

    #[test]
    fn exhausted_input_is_minus_one() {
        let input = ConsoleInputReader::new(Cursor::new(""));
        assert_eq!(input.read_selection(), -1);
    }

    #[test]
    fn blank_registration_is_invalid() {
        let input = ConsoleInputReader::new(Cursor::new("   \n"));
        let err = input.read_vehicle_id().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
}
