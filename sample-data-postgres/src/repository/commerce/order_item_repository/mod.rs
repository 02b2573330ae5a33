pub mod repo_impl;
pub mod create_batch;
pub mod find_by_order_ids;

pub use repo_impl::OrderItemRepositoryImpl;
