use async_trait::async_trait;
use sample_data_db::models::commerce::OrderItemModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::OrderItemRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl OrderItemRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &OrderItemRepositoryImpl,
        items: &[OrderItemModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO commerce.order_items (id, order_id, product_id, quantity, unit_price) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.order_id)
                    .push_bind(item.product_id)
                    .push_bind(item.quantity)
                    .push_bind(item.unit_price);
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, OrderItemModel> for OrderItemRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[OrderItemModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
