use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::{Environment, MetricName};
use crate::models::Identifiable;

/// Row of `observability.metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricModel {
    pub id: Uuid,
    pub metric_name: MetricName,
    /// Rounded to three decimals
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
    pub tags: MetricTags,
}

/// JSON payload of `metrics.tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTags {
    pub env: Environment,
    pub host: String,
}

impl Identifiable for MetricModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
