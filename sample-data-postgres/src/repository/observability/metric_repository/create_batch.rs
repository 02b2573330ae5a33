use async_trait::async_trait;
use sample_data_db::models::observability::MetricModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::types::Json;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::MetricRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl MetricRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &MetricRepositoryImpl,
        items: &[MetricModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO observability.metrics (id, metric_name, value, recorded_at, tags) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.metric_name.as_str())
                    .push_bind(item.value)
                    .push_bind(item.recorded_at)
                    .push_bind(Json(&item.tags));
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, MetricModel> for MetricRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[MetricModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{test_rng, setup_test_context};
    use chrono::Utc;
    use sample_data_db::generator::generate_metrics;
    use sample_data_db::repository::{CreateBatch, LoadBatch};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_batch_round_trips_tags() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let metric_repo = &ctx.observability_repos().metric_repository;

        let metrics = generate_metrics(&mut test_rng(), 150, Utc::now());
        assert_eq!(metric_repo.create_batch(&metrics).await?, 150);

        let loaded = metric_repo.load_batch(&[metrics[120].id]).await?;
        let stored = loaded[0].as_ref().expect("metric should be stored");
        assert_eq!(stored.metric_name, metrics[120].metric_name);
        assert_eq!(stored.value, metrics[120].value);
        assert_eq!(stored.tags, metrics[120].tags);

        Ok(())
    }
}
