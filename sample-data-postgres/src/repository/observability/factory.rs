use std::sync::Arc;

use super::alert_repository::AlertRepositoryImpl;
use super::log_repository::LogRepositoryImpl;
use super::metric_repository::MetricRepositoryImpl;
use crate::unit_of_work::Executor;

/// Container for all observability repositories, sharing one executor
pub struct ObservabilityRepositories {
    pub metric_repository: Arc<MetricRepositoryImpl>,
    pub alert_repository: Arc<AlertRepositoryImpl>,
    pub log_repository: Arc<LogRepositoryImpl>,
}

impl ObservabilityRepositories {
    pub fn new(executor: &Executor) -> Self {
        Self {
            metric_repository: Arc::new(MetricRepositoryImpl::new(executor.clone())),
            alert_repository: Arc::new(AlertRepositoryImpl::new(executor.clone())),
            log_repository: Arc::new(LogRepositoryImpl::new(executor.clone())),
        }
    }
}
