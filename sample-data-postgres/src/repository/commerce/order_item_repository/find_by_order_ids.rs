use sample_data_db::models::commerce::OrderItemModel;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OrderItemRepositoryImpl;

impl OrderItemRepositoryImpl {
    /// All item lines belonging to any of the given orders.
    pub async fn find_by_order_ids(
        &self,
        order_ids: &[Uuid],
    ) -> Result<Vec<OrderItemModel>, Box<dyn Error + Send + Sync>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM commerce.order_items WHERE order_id = ANY($1)"#;
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(order_ids).fetch_all(&mut **transaction).await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(OrderItemModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}
