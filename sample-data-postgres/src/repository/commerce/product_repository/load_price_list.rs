use sample_data_db::models::commerce::PriceListEntry;
use crate::utils::TryFromRow;
use std::error::Error;

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    /// Id and price of every stored product, including rows that predate this run.
    pub async fn load_price_list(&self) -> Result<Vec<PriceListEntry>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT id, price FROM commerce.products")
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(PriceListEntry::try_from_row(&row)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{test_rng, setup_test_context};
    use sample_data_db::generator::generate_products;
    use sample_data_db::models::commerce::PriceListEntry;
    use sample_data_db::repository::CreateBatch;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_price_list_contains_every_stored_product() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let product_repo = &ctx.commerce_repos().product_repository;

        let before = product_repo.load_price_list().await?.len();

        let products = generate_products(&mut test_rng(), 4);
        product_repo.create_batch(&products).await?;

        let price_list = product_repo.load_price_list().await?;
        assert_eq!(price_list.len(), before + 4);
        for product in &products {
            assert!(price_list.contains(&PriceListEntry::from(product)));
        }

        Ok(())
    }
}
