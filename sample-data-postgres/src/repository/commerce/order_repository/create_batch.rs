use async_trait::async_trait;
use sample_data_db::models::commerce::OrderModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::OrderRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl OrderRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &OrderRepositoryImpl,
        items: &[OrderModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO commerce.orders (id, customer_id, total, created_at, status) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.customer_id)
                    .push_bind(item.total)
                    .push_bind(item.created_at)
                    .push_bind(item.status.as_str());
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, OrderModel> for OrderRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[OrderModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
