pub mod commerce;
pub mod observability;
