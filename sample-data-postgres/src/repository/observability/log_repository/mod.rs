pub mod repo_impl;
pub mod create_batch;
pub mod load_batch;

pub use repo_impl::LogRepositoryImpl;
