//! The two population passes and the run that chains them.

pub mod commerce;
pub mod observability;

pub use commerce::{seed_commerce, CommerceCounts, CommerceReport};
pub use observability::{seed_observability, ObservabilityCounts, ObservabilityReport};

use chrono::{DateTime, Utc};
use rand::Rng;
use sample_data_api::SeedResult;

use crate::postgres_repositories::SeedSession;

/// Rows generated for one table and how many of them were actually written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReport {
    pub table: &'static str,
    pub generated: usize,
    pub inserted: u64,
}

impl TableReport {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            generated: 0,
            inserted: 0,
        }
    }

    pub fn record(&mut self, generated: usize, inserted: u64) {
        self.generated += generated;
        self.inserted += inserted;
    }

    /// Rows skipped because their primary key already existed
    pub fn skipped(&self) -> u64 {
        (self.generated as u64).saturating_sub(self.inserted)
    }
}

/// How many rows of each kind a run generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub commerce: CommerceCounts,
    pub observability: ObservabilityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub commerce: CommerceReport,
    pub observability: ObservabilityReport,
}

impl SeedSummary {
    pub fn tables(&self) -> [TableReport; 7] {
        [
            self.commerce.customers,
            self.commerce.products,
            self.commerce.orders,
            self.commerce.order_items,
            self.observability.metrics,
            self.observability.alerts,
            self.observability.logs,
        ]
    }
}

/// Runs the commerce pass, then the observability pass, on the session's transaction.
///
/// Nothing is committed here; the caller decides whether the session's
/// executor commits or rolls back.
pub async fn seed_all<R: Rng + ?Sized>(
    session: &SeedSession,
    plan: &SeedPlan,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SeedResult<SeedSummary> {
    let commerce = seed_commerce(&session.commerce, &plan.commerce, rng, now).await?;
    let observability = seed_observability(&session.observability, &plan.observability, rng, now).await?;
    Ok(SeedSummary {
        commerce,
        observability,
    })
}
