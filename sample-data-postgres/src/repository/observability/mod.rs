pub mod alert_repository;
pub mod factory;
pub mod log_repository;
pub mod metric_repository;

pub use alert_repository::AlertRepositoryImpl;
pub use factory::ObservabilityRepositories;
pub use log_repository::LogRepositoryImpl;
pub use metric_repository::MetricRepositoryImpl;
