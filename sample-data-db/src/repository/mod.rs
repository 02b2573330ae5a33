pub mod create_batch;
pub mod load_batch;

// Re-exports
pub use create_batch::*;
pub use load_batch::*;
