//! Storage implementations

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryStorage;
pub use seed::seed_demo_data;

use thiserror::Error;

/// Typed storage faults
///
/// Storage methods return `anyhow::Result`; these are the faults a backend
/// raises itself, as opposed to ones bubbling up from a driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("duplicate value for unique column {table}.{column}")]
    UniqueViolation {
        table: &'static str,
        column: &'static str,
    },

    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}
