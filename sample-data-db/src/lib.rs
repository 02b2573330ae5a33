pub mod generator;
pub mod models;
pub mod repository;

pub use models::*;
