use chrono::{DateTime, Utc};
use rand::Rng;

use super::{backdated_days, backdated_seconds, random_uuid};
use crate::models::observability::{
    AlertMetadata, AlertModel, AlertName, Environment, LogContext, LogEntryModel, LogLevel,
    LogService, MetricModel, MetricName, MetricTags, Severity,
};

/// Metrics, alerts and logs are backdated up to this many days
pub const OBSERVABILITY_HISTORY_DAYS: i64 = 30;

pub const MAX_METRIC_VALUE: f64 = 1000.0;
pub const HOST_COUNT: u32 = 20;
pub const NODE_COUNT: u32 = 5;
pub const MAX_LOG_MESSAGE_NUMBER: u32 = 10_000;

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn generate_metrics<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<MetricModel> {
    (0..count)
        .map(|_| {
            let metric_name = MetricName::random(rng);
            let recorded_at = backdated_seconds(rng, now, OBSERVABILITY_HISTORY_DAYS);
            let value = round_to_thousandths(rng.gen_range(0.0..=MAX_METRIC_VALUE));
            let tags = MetricTags {
                env: Environment::random(rng),
                host: format!("host-{}", rng.gen_range(1..=HOST_COUNT)),
            };
            MetricModel {
                id: random_uuid(rng),
                metric_name,
                value,
                recorded_at,
                tags,
            }
        })
        .collect()
}

pub fn generate_alerts<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<AlertModel> {
    (0..count)
        .map(|_| {
            let fired_at = backdated_days(rng, now, OBSERVABILITY_HISTORY_DAYS);
            AlertModel {
                id: random_uuid(rng),
                alert_name: AlertName::random(rng),
                severity: Severity::random(rng),
                fired_at,
                resolved: rng.gen_bool(0.5),
                metadata: AlertMetadata {
                    node: format!("node-{}", rng.gen_range(1..=NODE_COUNT)),
                },
            }
        })
        .collect()
}

pub fn generate_log_entries<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<LogEntryModel> {
    (0..count)
        .map(|_| {
            let logged_at = backdated_days(rng, now, OBSERVABILITY_HISTORY_DAYS);
            LogEntryModel {
                id: random_uuid(rng),
                service: LogService::random(rng),
                level: LogLevel::random(rng),
                message: format!("Sample log message {}", rng.gen_range(1..=MAX_LOG_MESSAGE_NUMBER)),
                logged_at,
                context: LogContext {
                    request_id: random_uuid(rng),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_metrics_are_bounded_and_tagged() {
        let mut rng = StdRng::seed_from_u64(21);
        let now = Utc::now();
        let metrics = generate_metrics(&mut rng, 300, now);

        assert_eq!(metrics.len(), 300);
        for metric in &metrics {
            assert!((0.0..=MAX_METRIC_VALUE).contains(&metric.value));
            assert_eq!(metric.value, round_to_thousandths(metric.value));
            assert!(metric.recorded_at <= now);
            assert!(metric.recorded_at >= now - Duration::days(OBSERVABILITY_HISTORY_DAYS));

            let host: u32 = metric.tags.host.strip_prefix("host-").unwrap().parse().unwrap();
            assert!((1..=HOST_COUNT).contains(&host));
        }
    }

    #[test]
    fn test_metric_tags_serialize_to_env_and_host() {
        let mut rng = StdRng::seed_from_u64(22);
        let metric = generate_metrics(&mut rng, 1, Utc::now()).remove(0);
        let json = serde_json::to_value(&metric.tags).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(matches!(object["env"].as_str(), Some("staging") | Some("production")));
        assert!(object["host"].as_str().unwrap().starts_with("host-"));
    }

    #[test]
    fn test_alerts_carry_node_metadata() {
        let mut rng = StdRng::seed_from_u64(23);
        let now = Utc::now();
        let alerts = generate_alerts(&mut rng, 100, now);

        assert!(alerts.iter().any(|a| a.resolved));
        assert!(alerts.iter().any(|a| !a.resolved));
        for alert in &alerts {
            let node: u32 = alert.metadata.node.strip_prefix("node-").unwrap().parse().unwrap();
            assert!((1..=NODE_COUNT).contains(&node));
            assert!(alert.fired_at >= now - Duration::days(OBSERVABILITY_HISTORY_DAYS));
        }
    }

    #[test]
    fn test_log_entries_get_fresh_request_ids() {
        let mut rng = StdRng::seed_from_u64(24);
        let logs = generate_log_entries(&mut rng, 50, Utc::now());

        let mut request_ids: Vec<_> = logs.iter().map(|l| l.context.request_id).collect();
        request_ids.sort();
        request_ids.dedup();
        assert_eq!(request_ids.len(), 50);

        for log in &logs {
            let number: u32 = log
                .message
                .strip_prefix("Sample log message ")
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..=MAX_LOG_MESSAGE_NUMBER).contains(&number));
            assert_ne!(log.context.request_id, log.id);
        }
    }
}
