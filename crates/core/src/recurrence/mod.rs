//! Recurrence module - occurrence generation for recurring entries.

mod generator;

pub use generator::generate_occurrences;
