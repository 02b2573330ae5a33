use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_data_api::{SeedError, SeedResult};
use sample_data_postgres::probe::{wait_for_db, ProbePolicy};
use sample_data_postgres::seeder::{seed_all, CommerceCounts, ObservabilityCounts, SeedPlan, SeedSummary};
use sample_data_postgres::{ConnectionSettings, PostgresRepositories};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Populates the PostgreSQL instance with sample e-commerce and
/// observability data. The schema must already exist.
///
/// Connection parameters come from PGHOST, PGPORT, PGDB, PGUSER and
/// PGPASSWORD.
#[derive(Parser, Debug)]
#[command(name = "generate-sample-data", version)]
struct Args {
    #[arg(long, default_value_t = 50)]
    customers: usize,

    #[arg(long, default_value_t = 40)]
    products: usize,

    #[arg(long, default_value_t = 200)]
    orders: usize,

    #[arg(long, default_value_t = 1000)]
    metrics: usize,

    #[arg(long, default_value_t = 50)]
    alerts: usize,

    #[arg(long, default_value_t = 500)]
    logs: usize,

    /// Seconds to wait for the database to accept connections
    #[arg(long, default_value_t = 60)]
    wait: u64,

    /// Seed for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn plan(&self) -> SeedPlan {
        SeedPlan {
            commerce: CommerceCounts {
                customers: self.customers,
                products: self.products,
                orders: self.orders,
            },
            observability: ObservabilityCounts {
                metrics: self.metrics,
                alerts: self.alerts,
                logs: self.logs,
            },
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

async fn seed(repos: &PostgresRepositories, args: &Args) -> SeedResult<SeedSummary> {
    let session = repos.begin_session().await?;
    let summary = seed_all(&session, &args.plan(), &mut args.rng(), Utc::now()).await?;
    session.executor.commit().await?;
    Ok(summary)
}

async fn run(args: &Args) -> SeedResult<SeedSummary> {
    let settings = ConnectionSettings::from_env()?;
    wait_for_db(&settings, &ProbePolicy::new(Duration::from_secs(args.wait))).await?;

    let repos = PostgresRepositories::connect(&settings).await?;
    let result = seed(&repos, args).await;
    repos.close().await;
    result
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let result = run(&args).await;

    match &result {
        Ok(summary) => {
            for table in summary.tables() {
                info!(
                    table = table.table,
                    generated = table.generated,
                    inserted = table.inserted,
                    skipped = table.skipped(),
                    "table seeded"
                );
            }
            info!("Data generation complete.");
        }
        // Already reported by the prober
        Err(SeedError::DatabaseUnreachable { .. }) => {}
        Err(e) => error!(error = %e, "Data generation failed"),
    }

    ExitCode::from(exit_status(&result))
}

/// Process exit status for the outcome of a run.
fn exit_status(result: &SeedResult<SeedSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(SeedError::DatabaseUnreachable { .. }) => 1,
        Err(_) => 2,
    }
}
