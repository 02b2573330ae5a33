use chrono::{DateTime, Utc};
use rand::Rng;
use sample_data_api::SeedResult;
use sample_data_db::generator::{generate_customers, generate_order, generate_products};
use sample_data_db::repository::CreateBatch;
use std::slice;
use tracing::{debug, info};
use uuid::Uuid;

use super::TableReport;
use crate::repository::commerce::CommerceRepositories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommerceCounts {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommerceReport {
    pub customers: TableReport,
    pub products: TableReport,
    pub orders: TableReport,
    pub order_items: TableReport,
    /// Ids of the orders generated by this pass, in generation order
    pub order_ids: Vec<Uuid>,
}

/// Customers, then products, then orders with their item lines.
///
/// Orders pick customers from this run's batch and products from everything
/// stored in `commerce.products` once the new products are in.
pub async fn seed_commerce<R: Rng + ?Sized>(
    repos: &CommerceRepositories,
    counts: &CommerceCounts,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SeedResult<CommerceReport> {
    let mut report = CommerceReport {
        customers: TableReport::new("commerce.customers"),
        products: TableReport::new("commerce.products"),
        orders: TableReport::new("commerce.orders"),
        order_items: TableReport::new("commerce.order_items"),
        order_ids: Vec::with_capacity(counts.orders),
    };

    let customers = generate_customers(rng, counts.customers, now);
    let inserted = repos.customer_repository.create_batch(&customers).await?;
    report.customers.record(customers.len(), inserted);
    info!(inserted, "Inserted {} customers", customers.len());

    let products = generate_products(rng, counts.products);
    let inserted = repos.product_repository.create_batch(&products).await?;
    report.products.record(products.len(), inserted);
    info!(inserted, "Inserted {} products", products.len());

    let price_list = repos.product_repository.load_price_list().await?;
    debug!(products = price_list.len(), "Loaded product price list");

    for _ in 0..counts.orders {
        let draft = generate_order(rng, &customers, &price_list, now)?;

        let inserted = repos
            .order_repository
            .create_batch(slice::from_ref(&draft.order))
            .await?;
        report.orders.record(1, inserted);

        let inserted = repos.order_item_repository.create_batch(&draft.items).await?;
        report.order_items.record(draft.items.len(), inserted);

        report.order_ids.push(draft.order.id);
    }
    info!(
        order_items = report.order_items.inserted,
        "Inserted {} orders and items", counts.orders
    );

    Ok(report)
}
