use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::{AlertName, Severity};
use crate::models::Identifiable;

/// Row of `observability.alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertModel {
    pub id: Uuid,
    pub alert_name: AlertName,
    pub severity: Severity,
    pub fired_at: DateTime<Utc>,
    pub resolved: bool,
    pub metadata: AlertMetadata,
}

/// JSON payload of `alerts.metadata`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMetadata {
    pub node: String,
}

impl Identifiable for AlertModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
