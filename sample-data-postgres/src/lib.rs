pub mod config;
pub mod postgres_repositories;
pub mod probe;
pub mod repository;
pub mod seeder;
pub mod unit_of_work;
pub mod utils;

pub use config::ConnectionSettings;
pub use postgres_repositories::{PostgresRepositories, SeedSession};
pub use unit_of_work::Executor;

#[cfg(test)]
pub mod test_helper;
