#[macro_use]
mod value_set;

pub mod commerce;
pub mod identifiable;
pub mod observability;

// Re-exports
pub use identifiable::*;
