use sample_data_db::models::commerce::CustomerModel;
use crate::utils::{get_value_set, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct CustomerRepositoryImpl {
    pub executor: Executor,
}

impl CustomerRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CustomerModel {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            created_at: row.try_get("created_at")?,
            country: get_value_set(row, "country")?,
        })
    }
}
