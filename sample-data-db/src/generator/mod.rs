//! Random record generation.
//!
//! Every generator takes the random source and the reference time explicitly,
//! so a seeded `StdRng` and a fixed `now` reproduce the same batch.

pub mod commerce;
pub mod observability;

pub use commerce::*;
pub use observability::*;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

const SECONDS_PER_DAY: i64 = 86_400;

/// Builds a version 4 UUID from the given random source.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// `now` minus a uniform number of whole days in `0..=max_days`.
pub fn backdated_days<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    now - Duration::days(rng.gen_range(0..=max_days))
}

/// `now` minus a uniform number of seconds covering `0..=max_days` days.
pub fn backdated_seconds<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    now - Duration::seconds(rng.gen_range(0..=max_days * SECONDS_PER_DAY))
}

/// `now` minus whole days in `0..=max_days` plus up to one more day of seconds.
pub fn backdated_days_and_seconds<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    max_days: i64,
) -> DateTime<Utc> {
    let days = rng.gen_range(0..=max_days);
    let seconds = rng.gen_range(0..=SECONDS_PER_DAY);
    now - Duration::days(days) - Duration::seconds(seconds)
}
