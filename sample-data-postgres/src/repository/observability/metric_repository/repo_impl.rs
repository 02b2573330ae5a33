use sample_data_db::models::observability::{MetricModel, MetricTags};
use crate::utils::{get_value_set, TryFromRow};
use sqlx::types::Json;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;

pub struct MetricRepositoryImpl {
    pub executor: Executor,
}

impl MetricRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for MetricModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let tags: Json<MetricTags> = row.try_get("tags")?;
        Ok(MetricModel {
            id: row.try_get("id")?,
            metric_name: get_value_set(row, "metric_name")?,
            value: row.try_get("value")?,
            recorded_at: row.try_get("recorded_at")?,
            tags: tags.0,
        })
    }
}
