//! Infrastructure layer - external concerns

pub mod console;
pub mod storage;

pub use console::ConsoleInputReader;
pub use storage::InMemoryStorage;
