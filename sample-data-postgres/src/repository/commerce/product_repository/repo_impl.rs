use sample_data_db::models::commerce::{PriceListEntry, ProductModel};
use crate::utils::{get_heapless_string, get_value_set, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct ProductRepositoryImpl {
    pub executor: Executor,
}

impl ProductRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ProductModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProductModel {
            id: row.try_get("id")?,
            sku: get_heapless_string(row, "sku")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category: get_value_set(row, "category")?,
        })
    }
}

impl TryFromRow<PgRow> for PriceListEntry {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PriceListEntry {
            product_id: row.try_get("id")?,
            price: row.try_get("price")?,
        })
    }
}
