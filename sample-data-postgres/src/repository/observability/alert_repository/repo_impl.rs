use sample_data_db::models::observability::{AlertMetadata, AlertModel};
use crate::utils::{get_value_set, TryFromRow};
use sqlx::types::Json;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct AlertRepositoryImpl {
    pub executor: Executor,
}

impl AlertRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AlertModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let metadata: Json<AlertMetadata> = row.try_get("metadata")?;
        Ok(AlertModel {
            id: row.try_get("id")?,
            alert_name: get_value_set(row, "alert_name")?,
            severity: get_value_set(row, "severity")?,
            fired_at: row.try_get("fired_at")?,
            resolved: row.try_get("resolved")?,
            metadata: metadata.0,
        })
    }
}
