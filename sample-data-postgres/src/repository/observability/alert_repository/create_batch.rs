use async_trait::async_trait;
use sample_data_db::models::observability::AlertModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::types::Json;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AlertRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl AlertRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &AlertRepositoryImpl,
        items: &[AlertModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO observability.alerts (id, alert_name, severity, fired_at, resolved, metadata) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.alert_name.as_str())
                    .push_bind(item.severity.as_str())
                    .push_bind(item.fired_at)
                    .push_bind(item.resolved)
                    .push_bind(Json(&item.metadata));
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, AlertModel> for AlertRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[AlertModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{test_rng, setup_test_context};
    use chrono::Utc;
    use sample_data_db::generator::generate_alerts;
    use sample_data_db::repository::{CreateBatch, LoadBatch};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let alert_repo = &ctx.observability_repos().alert_repository;

        let alerts = generate_alerts(&mut test_rng(), 6, Utc::now());
        assert_eq!(alert_repo.create_batch(&alerts).await?, 6);

        let ids: Vec<_> = alerts.iter().map(|a| a.id).collect();
        let loaded = alert_repo.load_batch(&ids).await?;
        for (alert, stored) in alerts.iter().zip(loaded) {
            let stored = stored.expect("alert should be stored");
            assert_eq!(stored.severity, alert.severity);
            assert_eq!(stored.resolved, alert.resolved);
            assert_eq!(stored.metadata, alert.metadata);
        }

        Ok(())
    }
}
