use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use sample_data_api::{SeedError, SeedResult};
use std::fmt::Write;

use super::{backdated_days_and_seconds, random_uuid};
use crate::models::commerce::{
    Country, CustomerModel, OrderItemModel, OrderModel, OrderStatus, PriceListEntry,
    ProductCategory, ProductModel,
};

pub const FIRST_NAMES: [&str; 12] = [
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Riley", "Chris", "Pat", "Robin", "Jamie", "Drew",
    "Morgan",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Lee", "Brown", "Garcia", "Martinez", "Lopez", "Wilson", "Anderson",
    "Thomas",
];

/// Upper bound of distinct products on one order
pub const MAX_ORDER_ITEMS: usize = 5;

/// Upper bound of the per-line quantity and of the total multiplier
pub const MAX_QUANTITY: i32 = 3;

/// Orders are backdated up to this many days
pub const ORDER_HISTORY_DAYS: i64 = 60;

const MIN_PRICE_CENTS: i64 = 500;
const MAX_PRICE_CENTS: i64 = 50_000;

/// An order together with the item lines that reference it
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub order: OrderModel,
    pub items: Vec<OrderItemModel>,
}

pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

pub fn generate_customers<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<CustomerModel> {
    (0..count)
        .map(|_| {
            let id = random_uuid(rng);
            let name = random_name(rng);
            let email = format!("user{}@example.com", rng.gen_range(1000..=9999));
            CustomerModel {
                id,
                name,
                email,
                created_at: now,
                country: Country::random(rng),
            }
        })
        .collect()
}

/// Zero-padded SKU for the product at `position` in its batch.
///
/// `SKU` plus the at most 20 digits of a `usize` always fits the 24-byte buffer.
pub fn sku_for(position: usize) -> HeaplessString<24> {
    let mut sku = HeaplessString::new();
    let _ = write!(sku, "SKU{position:05}");
    sku
}

pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ProductModel> {
    (0..count)
        .map(|position| ProductModel {
            id: random_uuid(rng),
            sku: sku_for(position),
            name: format!("Product {position}"),
            price: Decimal::new(rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), 2),
            category: ProductCategory::random(rng),
        })
        .collect()
}

/// Draws one order and its item lines.
///
/// The customer comes from `customers`, the products are a sample without
/// replacement from `price_list` (clamped to its size). The order total uses
/// one quantity roll per product and each item line rolls its own quantity
/// again, so the total does not have to match the lines.
pub fn generate_order<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &[CustomerModel],
    price_list: &[PriceListEntry],
    now: DateTime<Utc>,
) -> SeedResult<OrderDraft> {
    let customer = customers
        .choose(rng)
        .ok_or(SeedError::EmptyReferencePool("customers"))?;
    if price_list.is_empty() {
        return Err(SeedError::EmptyReferencePool("products"));
    }

    let created_at = backdated_days_and_seconds(rng, now, ORDER_HISTORY_DAYS);
    let status = OrderStatus::random(rng);

    let item_count = rng.gen_range(1..=MAX_ORDER_ITEMS);
    let sampled: Vec<PriceListEntry> = price_list
        .choose_multiple(rng, item_count)
        .copied()
        .collect();

    let total = sampled
        .iter()
        .map(|entry| entry.price * Decimal::from(rng.gen_range(1..=MAX_QUANTITY)))
        .sum::<Decimal>()
        .round_dp(2);

    let order = OrderModel {
        id: random_uuid(rng),
        customer_id: customer.id,
        total,
        created_at,
        status,
    };

    let items = sampled
        .iter()
        .map(|entry| OrderItemModel {
            id: random_uuid(rng),
            order_id: order.id,
            product_id: entry.product_id,
            quantity: rng.gen_range(1..=MAX_QUANTITY),
            unit_price: entry.price,
        })
        .collect();

    Ok(OrderDraft { order, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn price_list(products: &[ProductModel]) -> Vec<PriceListEntry> {
        products.iter().map(PriceListEntry::from).collect()
    }

    #[test]
    fn test_customers_use_known_countries_and_email_template() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Utc::now();
        let customers = generate_customers(&mut rng, 200, now);

        assert_eq!(customers.len(), 200);
        for customer in &customers {
            assert!(Country::ALL.contains(&customer.country));
            assert_eq!(customer.created_at, now);

            let number = customer
                .email
                .strip_prefix("user")
                .and_then(|rest| rest.strip_suffix("@example.com"))
                .expect("email should follow the user<n>@example.com template");
            let number: u32 = number.parse().unwrap();
            assert!((1000..=9999).contains(&number));

            let (first, last) = customer.name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }

    #[test]
    fn test_product_skus_are_unique_and_padded() {
        let mut rng = StdRng::seed_from_u64(2);
        let products = generate_products(&mut rng, 120);

        let skus: HashSet<&str> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus.len(), 120);
        assert_eq!(products[0].sku.as_str(), "SKU00000");
        assert_eq!(products[42].sku.as_str(), "SKU00042");
        assert_eq!(products[42].name, "Product 42");

        for product in &products {
            assert_eq!(product.sku.len(), 8);
            assert!(product.price >= Decimal::new(500, 2));
            assert!(product.price <= Decimal::new(50_000, 2));
            assert_eq!(product.price.scale(), 2);
        }
    }

    #[test]
    fn test_sku_keeps_growing_past_five_digits() {
        assert_eq!(sku_for(123_456).as_str(), "SKU123456");
    }

    #[test]
    fn test_sku_fits_for_every_position() {
        let sku = sku_for(usize::MAX);
        assert_eq!(sku.as_str(), format!("SKU{}", usize::MAX));
    }

    #[test]
    fn test_order_items_reference_sampled_products() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc::now();
        let customers = generate_customers(&mut rng, 10, now);
        let products = generate_products(&mut rng, 40);
        let prices = price_list(&products);
        let customer_ids: HashSet<_> = customers.iter().map(|c| c.id).collect();

        for _ in 0..200 {
            let draft = generate_order(&mut rng, &customers, &prices, now).unwrap();

            assert!(customer_ids.contains(&draft.order.customer_id));
            assert!((1..=MAX_ORDER_ITEMS).contains(&draft.items.len()));
            assert!(draft.order.created_at <= now);
            assert!(draft.order.created_at >= now - Duration::days(ORDER_HISTORY_DAYS + 1));

            let distinct: HashSet<_> = draft.items.iter().map(|i| i.product_id).collect();
            assert_eq!(distinct.len(), draft.items.len());

            for item in &draft.items {
                assert_eq!(item.order_id, draft.order.id);
                assert!((1..=MAX_QUANTITY).contains(&item.quantity));
                let entry = prices.iter().find(|e| e.product_id == item.product_id).unwrap();
                assert_eq!(item.unit_price, entry.price);
            }

            let floor: Decimal = draft.items.iter().map(|i| i.unit_price).sum();
            assert!(draft.order.total >= floor);
            assert!(draft.order.total <= floor * Decimal::from(MAX_QUANTITY));
        }
    }

    #[test]
    fn test_order_sample_is_clamped_to_available_products() {
        let mut rng = StdRng::seed_from_u64(4);
        let now = Utc::now();
        let customers = generate_customers(&mut rng, 1, now);
        let products = generate_products(&mut rng, 2);
        let prices = price_list(&products);

        for _ in 0..50 {
            let draft = generate_order(&mut rng, &customers, &prices, now).unwrap();
            assert!((1..=2).contains(&draft.items.len()));
        }
    }

    #[test]
    fn test_order_needs_customers_and_products() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = Utc::now();
        let customers = generate_customers(&mut rng, 3, now);
        let products = generate_products(&mut rng, 3);

        let err = generate_order(&mut rng, &[], &price_list(&products), now).unwrap_err();
        assert!(matches!(err, SeedError::EmptyReferencePool("customers")));

        let err = generate_order(&mut rng, &customers, &[], now).unwrap_err();
        assert!(matches!(err, SeedError::EmptyReferencePool("products")));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let now = Utc::now();
        let a = generate_customers(&mut StdRng::seed_from_u64(9), 5, now);
        let b = generate_customers(&mut StdRng::seed_from_u64(9), 5, now);
        let ids_a: Vec<_> = a.iter().map(|c| c.id).collect();
        let ids_b: Vec<_> = b.iter().map(|c| c.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
