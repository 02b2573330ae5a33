//! Connectivity prober: bounded retry with a fixed poll interval.

use sample_data_api::{SeedError, SeedResult};
use sqlx::{Connection, PgConnection};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::config::ConnectionSettings;

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeDecision {
    /// Attempt again once `after` has passed
    Retry { after: Duration },
    GiveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    pub timeout: Duration,
    pub interval: Duration,
}

impl ProbePolicy {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Decides what to do after `attempts` failed attempts, `elapsed` after the start.
    ///
    /// The first attempt always happens. Later attempts are only scheduled when
    /// they would start before the deadline.
    pub fn decide(&self, attempts: u32, elapsed: Duration) -> ProbeDecision {
        if attempts == 0 {
            return ProbeDecision::Retry { after: Duration::ZERO };
        }
        if elapsed + self.interval >= self.timeout {
            return ProbeDecision::GiveUp;
        }
        ProbeDecision::Retry { after: self.interval }
    }

    /// Time one attempt may take when started `elapsed` after the start.
    pub fn attempt_budget(&self, elapsed: Duration) -> Duration {
        let remaining = self.timeout.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.interval
        } else {
            remaining
        }
    }
}

/// Runs `attempt` until it succeeds or `policy` gives up.
pub async fn wait_until_reachable<F, Fut, E>(policy: &ProbePolicy, mut attempt: F) -> SeedResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let started = Instant::now();
    let mut attempts = 0u32;

    loop {
        match policy.decide(attempts, started.elapsed()) {
            ProbeDecision::GiveUp => {
                error!(attempts, timeout_secs = policy.timeout.as_secs(), "Timed out waiting for DB");
                return Err(SeedError::DatabaseUnreachable {
                    waited_secs: policy.timeout.as_secs(),
                });
            }
            ProbeDecision::Retry { after } => {
                if !after.is_zero() {
                    tokio::time::sleep(after).await;
                }
            }
        }

        attempts += 1;
        let budget = policy.attempt_budget(started.elapsed());
        match tokio::time::timeout(budget, attempt()).await {
            Ok(Ok(())) => {
                info!(attempts, "DB reachable");
                return Ok(());
            }
            Ok(Err(e)) => warn!(attempts, error = %e, "Waiting for DB..."),
            Err(_) => warn!(attempts, budget_ms = budget.as_millis() as u64, "Waiting for DB... (connect timed out)"),
        }
    }
}

/// Opens and immediately closes a connection until one succeeds.
pub async fn wait_for_db(settings: &ConnectionSettings, policy: &ProbePolicy) -> SeedResult<()> {
    info!(host = %settings.host, port = settings.port, dbname = %settings.dbname, "Waiting for DB to be ready...");
    let connect_options = settings.connect_options();
    let options = &connect_options;
    wait_until_reachable(policy, move || async move {
        let conn = PgConnection::connect_with(options).await?;
        conn.close().await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_first_attempt_is_immediate() {
        let policy = ProbePolicy::new(Duration::ZERO);
        assert_eq!(
            policy.decide(0, Duration::from_secs(100)),
            ProbeDecision::Retry { after: Duration::ZERO }
        );
    }

    #[test]
    fn test_retries_with_fixed_interval_until_deadline() {
        let policy = ProbePolicy::new(Duration::from_secs(60));
        assert_eq!(
            policy.decide(1, Duration::from_secs(1)),
            ProbeDecision::Retry { after: POLL_INTERVAL }
        );
        assert_eq!(
            policy.decide(20, Duration::from_secs(57)),
            ProbeDecision::Retry { after: POLL_INTERVAL }
        );
        assert_eq!(policy.decide(21, Duration::from_secs(58)), ProbeDecision::GiveUp);
        assert_eq!(policy.decide(30, Duration::from_secs(90)), ProbeDecision::GiveUp);
    }

    #[test]
    fn test_attempt_budget_never_crosses_deadline() {
        let policy = ProbePolicy::new(Duration::from_secs(10));
        assert_eq!(policy.attempt_budget(Duration::from_secs(4)), Duration::from_secs(6));
        assert_eq!(policy.attempt_budget(Duration::from_secs(12)), POLL_INTERVAL);
    }

    #[tokio::test]
    async fn test_unreachable_target_gives_up_in_time() {
        let policy = ProbePolicy::new(Duration::from_millis(300)).with_interval(Duration::from_millis(100));
        let calls = Cell::new(0u32);

        let started = std::time::Instant::now();
        let result = wait_until_reachable(&policy, || {
            calls.set(calls.get() + 1);
            async { Err::<(), _>("connection refused") }
        })
        .await;

        assert!(matches!(result, Err(SeedError::DatabaseUnreachable { .. })));
        assert!(calls.get() >= 2);
        assert!(started.elapsed() <= policy.timeout + policy.interval + Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_hanging_attempt_is_cut_at_deadline() {
        let policy = ProbePolicy::new(Duration::from_millis(200)).with_interval(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let result = wait_until_reachable(&policy, || async {
            std::future::pending::<()>().await;
            Ok::<(), String>(())
        })
        .await;

        assert!(result.is_err());
        assert!(started.elapsed() <= policy.timeout + policy.interval + Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_succeeds_once_target_comes_up() {
        let policy = ProbePolicy::new(Duration::from_secs(5)).with_interval(Duration::from_millis(10));
        let calls = Cell::new(0u32);

        let result = wait_until_reachable(&policy, || {
            calls.set(calls.get() + 1);
            let up = calls.get() >= 3;
            async move {
                if up {
                    Ok(())
                } else {
                    Err("not yet")
                }
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_wait_for_db_reports_unreachable_server() {
        let mut settings = ConnectionSettings::resolve(|_| None).unwrap();
        settings.host = "127.0.0.1".to_string();
        settings.port = 1;
        let policy = ProbePolicy::new(Duration::from_millis(500)).with_interval(Duration::from_millis(100));

        let started = std::time::Instant::now();
        let result = wait_for_db(&settings, &policy).await;

        assert!(matches!(result, Err(SeedError::DatabaseUnreachable { .. })));
        assert!(started.elapsed() <= policy.timeout + policy.interval + Duration::from_millis(500));
    }
}
