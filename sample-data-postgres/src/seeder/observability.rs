use chrono::{DateTime, Utc};
use rand::Rng;
use sample_data_api::SeedResult;
use sample_data_db::generator::{generate_alerts, generate_log_entries, generate_metrics};
use sample_data_db::repository::CreateBatch;
use tracing::info;

use super::TableReport;
use crate::repository::observability::ObservabilityRepositories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservabilityCounts {
    pub metrics: usize,
    pub alerts: usize,
    pub logs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityReport {
    pub metrics: TableReport,
    pub alerts: TableReport,
    pub logs: TableReport,
}

/// Metrics, alerts and logs. None of them reference commerce data.
pub async fn seed_observability<R: Rng + ?Sized>(
    repos: &ObservabilityRepositories,
    counts: &ObservabilityCounts,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SeedResult<ObservabilityReport> {
    let mut report = ObservabilityReport {
        metrics: TableReport::new("observability.metrics"),
        alerts: TableReport::new("observability.alerts"),
        logs: TableReport::new("observability.logs"),
    };

    let metrics = generate_metrics(rng, counts.metrics, now);
    let inserted = repos.metric_repository.create_batch(&metrics).await?;
    report.metrics.record(metrics.len(), inserted);
    info!(inserted, "Inserted {} metrics", metrics.len());

    let alerts = generate_alerts(rng, counts.alerts, now);
    let inserted = repos.alert_repository.create_batch(&alerts).await?;
    report.alerts.record(alerts.len(), inserted);
    info!(inserted, "Inserted {} alerts", alerts.len());

    let logs = generate_log_entries(rng, counts.logs, now);
    let inserted = repos.log_repository.create_batch(&logs).await?;
    report.logs.record(logs.len(), inserted);
    info!(inserted, "Inserted {} logs", logs.len());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::{setup_test_context, test_rng};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_seed_observability_reports_each_table() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let counts = ObservabilityCounts {
            metrics: 120,
            alerts: 3,
            logs: 0,
        };

        let report = seed_observability(ctx.observability_repos(), &counts, &mut test_rng(), Utc::now()).await?;

        assert_eq!(report.metrics.inserted, 120);
        assert_eq!(report.alerts.inserted, 3);
        assert_eq!(report.logs, TableReport::new("observability.logs"));
        Ok(())
    }
}
