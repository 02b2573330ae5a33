use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::Country;
use crate::models::Identifiable;

/// Row of `commerce.customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub country: Country,
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
