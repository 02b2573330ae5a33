use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ConnectionSettings;
use crate::repository::commerce::CommerceRepositories;
use crate::repository::observability::ObservabilityRepositories;
use crate::unit_of_work::Executor;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens the single connection a seeding run works on.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(settings.connect_options())
            .await?;
        Ok(Self::new(Arc::new(pool)))
    }

    /// Create all repositories sharing a single transaction
    pub async fn begin_session(&self) -> Result<SeedSession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(SeedSession {
            commerce: CommerceRepositories::new(&executor),
            observability: ObservabilityRepositories::new(&executor),
            executor,
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Every repository of a run, bound to the same transaction
pub struct SeedSession {
    pub executor: Executor,
    pub commerce: CommerceRepositories,
    pub observability: ObservabilityRepositories,
}
