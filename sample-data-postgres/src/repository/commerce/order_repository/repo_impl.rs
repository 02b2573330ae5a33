use sample_data_db::models::commerce::OrderModel;
use crate::utils::{get_value_set, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct OrderRepositoryImpl {
    pub executor: Executor,
}

impl OrderRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for OrderModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(OrderModel {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            total: row.try_get("total")?,
            created_at: row.try_get("created_at")?,
            status: get_value_set(row, "status")?,
        })
    }
}
