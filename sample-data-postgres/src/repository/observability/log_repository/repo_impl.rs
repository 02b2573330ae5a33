use sample_data_db::models::observability::{LogContext, LogEntryModel};
use crate::utils::{get_value_set, TryFromRow};
use sqlx::types::Json;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct LogRepositoryImpl {
    pub executor: Executor,
}

impl LogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for LogEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let context: Json<LogContext> = row.try_get("context")?;
        Ok(LogEntryModel {
            id: row.try_get("id")?,
            service: get_value_set(row, "service")?,
            level: get_value_set(row, "level")?,
            message: row.try_get("message")?,
            logged_at: row.try_get("logged_at")?,
            context: context.0,
        })
    }
}
