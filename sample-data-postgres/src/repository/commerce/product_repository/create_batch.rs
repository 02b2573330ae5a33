use async_trait::async_trait;
use sample_data_db::models::commerce::ProductModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ProductRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl ProductRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &ProductRepositoryImpl,
        items: &[ProductModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO commerce.products (id, sku, name, price, category) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.sku.as_str())
                    .push_bind(item.name.as_str())
                    .push_bind(item.price)
                    .push_bind(item.category.as_str());
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[ProductModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
