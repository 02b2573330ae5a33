pub mod customer_repository;
pub mod factory;
pub mod order_item_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::CustomerRepositoryImpl;
pub use factory::CommerceRepositories;
pub use order_item_repository::OrderItemRepositoryImpl;
pub use order_repository::OrderRepositoryImpl;
pub use product_repository::ProductRepositoryImpl;
