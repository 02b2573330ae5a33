use async_trait::async_trait;
use sample_data_db::models::observability::LogEntryModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::types::Json;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::LogRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl LogRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &LogRepositoryImpl,
        items: &[LogEntryModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO observability.logs (id, service, level, message, logged_at, context) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.service.as_str())
                    .push_bind(item.level.as_str())
                    .push_bind(item.message.as_str())
                    .push_bind(item.logged_at)
                    .push_bind(Json(&item.context));
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, LogEntryModel> for LogRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[LogEntryModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
