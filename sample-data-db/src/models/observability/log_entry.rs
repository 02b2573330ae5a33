use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::{LogLevel, LogService};
use crate::models::Identifiable;

/// Row of `observability.logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryModel {
    pub id: Uuid,
    pub service: LogService,
    pub level: LogLevel,
    pub message: String,
    pub logged_at: DateTime<Utc>,
    pub context: LogContext,
}

/// JSON payload of `logs.context`, carrying the correlation id of the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogContext {
    pub request_id: Uuid,
}

impl Identifiable for LogEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
