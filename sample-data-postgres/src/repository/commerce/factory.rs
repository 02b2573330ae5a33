use std::sync::Arc;

use super::customer_repository::CustomerRepositoryImpl;
use super::order_item_repository::OrderItemRepositoryImpl;
use super::order_repository::OrderRepositoryImpl;
use super::product_repository::ProductRepositoryImpl;
use crate::unit_of_work::Executor;

/// Container for all commerce repositories, sharing one executor
pub struct CommerceRepositories {
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub product_repository: Arc<ProductRepositoryImpl>,
    pub order_repository: Arc<OrderRepositoryImpl>,
    pub order_item_repository: Arc<OrderItemRepositoryImpl>,
}

impl CommerceRepositories {
    pub fn new(executor: &Executor) -> Self {
        Self {
            customer_repository: Arc::new(CustomerRepositoryImpl::new(executor.clone())),
            product_repository: Arc::new(ProductRepositoryImpl::new(executor.clone())),
            order_repository: Arc::new(OrderRepositoryImpl::new(executor.clone())),
            order_item_repository: Arc::new(OrderItemRepositoryImpl::new(executor.clone())),
        }
    }
}
