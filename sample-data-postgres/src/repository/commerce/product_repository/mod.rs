pub mod repo_impl;
pub mod create_batch;
pub mod load_batch;
pub mod load_price_list;

pub use repo_impl::ProductRepositoryImpl;
