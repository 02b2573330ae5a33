use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// Row of `commerce.order_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemModel {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl Identifiable for OrderItemModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
