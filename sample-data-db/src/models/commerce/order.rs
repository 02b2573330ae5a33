use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::OrderStatus;
use crate::models::Identifiable;

/// Row of `commerce.orders`.
///
/// `total` is rolled from its own quantity multipliers and is not the sum of the
/// order's item lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Identifiable for OrderModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
