//! Test helpers shared across the Tempus crates.

use std::sync::{Arc, Once};

use arrow::array::{ArrayRef, Date32Array, Int64Array, TimestampMillisecondArray, TimestampSecondArray};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub mod fixtures;

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let env = std::env::var("RUST_LOG").ok();
        let filter = match env {
            Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            None => EnvFilter::new("info"),
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

#[cfg(feature = "auto-init")]
mod auto {
    // Runs at binary load so individual tests need not call the init.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}

/// Day-number column.
pub fn date_column(days: &[i32]) -> ArrayRef {
    Arc::new(Date32Array::from(days.to_vec()))
}

/// Epoch-second column stored as an Arrow second timestamp.
pub fn datetime_column(seconds: &[i64], timezone: Option<&str>) -> ArrayRef {
    let array = TimestampSecondArray::from(seconds.to_vec());
    match timezone {
        Some(tz) => Arc::new(array.with_timezone(tz)),
        None => Arc::new(array),
    }
}

/// Millisecond tick column, the storage of `DateTime64(3)`.
pub fn datetime64_millis_column(ticks: &[i64], timezone: Option<&str>) -> ArrayRef {
    let array = TimestampMillisecondArray::from(ticks.to_vec());
    match timezone {
        Some(tz) => Arc::new(array.with_timezone(tz)),
        None => Arc::new(array),
    }
}

/// Raw tick column for `DateTime64` scales with no Arrow timestamp unit.
pub fn raw_ticks_column(ticks: &[i64]) -> ArrayRef {
    Arc::new(Int64Array::from(ticks.to_vec()))
}

/// Deterministic random values in `low..high`.
pub fn seeded_values(seed: u64, n: usize, low: i64, high: i64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(low..high)).collect()
}
