use async_trait::async_trait;
use sample_data_db::models::commerce::CustomerModel;
use sample_data_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::insert_ignoring_conflicts;

impl CustomerRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CustomerRepositoryImpl,
        items: &[CustomerModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        insert_ignoring_conflicts(
            &repo.executor,
            "INSERT INTO commerce.customers (id, name, email, created_at, country) ",
            items,
            |mut row, item| {
                row.push_bind(item.id)
                    .push_bind(item.name.as_str())
                    .push_bind(item.email.as_str())
                    .push_bind(item.created_at)
                    .push_bind(item.country.as_str());
            },
        )
        .await
    }
}

#[async_trait]
impl CreateBatch<Postgres, CustomerModel> for CustomerRepositoryImpl {
    async fn create_batch(
        &self,
        items: &[CustomerModel],
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
