use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting multiple entities in bulk
///
/// Rows whose primary key already exists are skipped rather than rejected, so
/// running the same batch twice never raises a duplicate-key error.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, CustomerModel> for CustomerRepositoryImpl {
///     async fn create_batch(&self, items: &[CustomerModel]) -> Result<u64, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable + Sync>: Send + Sync {
    /// Insert multiple items, skipping conflicting primary keys
    ///
    /// # Arguments
    /// * `items` - The entities to insert
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of rows actually inserted
    /// * `Err` - An error if a statement could not be executed
    async fn create_batch(
        &self,
        items: &[T],
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
