use async_trait::async_trait;
use sample_data_db::models::commerce::OrderModel;
use sample_data_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &OrderRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<OrderModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM commerce.orders WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::new();
        for row in rows {
            let item = OrderModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, OrderModel> for OrderRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<OrderModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
