use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common_enums::ProductCategory;
use crate::models::Identifiable;

/// Row of `commerce.products`.
///
/// `sku` is `SKU` followed by the zero-padded batch position, e.g. `SKU00042`.
/// `price` always carries two decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: Uuid,
    pub sku: HeaplessString<24>,
    pub name: String,
    pub price: Decimal,
    pub category: ProductCategory,
}

impl Identifiable for ProductModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Id and current price of a stored product, as read back before orders are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListEntry {
    pub product_id: Uuid,
    pub price: Decimal,
}

impl From<&ProductModel> for PriceListEntry {
    fn from(product: &ProductModel) -> Self {
        PriceListEntry {
            product_id: product.id,
            price: product.price,
        }
    }
}
