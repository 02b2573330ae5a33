//! Single shared transaction for a seeding run.
//!
//! Every repository holds a clone of the same [`Executor`]; all statements of
//! a run go through the one transaction it wraps. Dropping the last clone
//! without calling [`Executor::commit`] rolls everything back.

use sample_data_api::{SeedError, SeedResult};
use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Commits the transaction. Any later statement fails with a consumed-transaction error.
    pub async fn commit(&self) -> SeedResult<()> {
        let tx = self.tx.lock().await.take().ok_or(SeedError::TransactionConsumed)?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> SeedResult<()> {
        let tx = self.tx.lock().await.take().ok_or(SeedError::TransactionConsumed)?;
        tx.rollback().await?;
        Ok(())
    }
}
