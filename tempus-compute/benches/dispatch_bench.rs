//! Throughput of the batch dispatch path for each temporal encoding, and the
//! cost of the `DateTime64` scale adapter relative to plain epoch seconds.

#![forbid(unsafe_code)]

use std::hint::black_box;

use arrow::array::{Date32Array, Int64Array, TimestampMillisecondArray};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use tempus_compute::{ToHour, ToStartOfMonth, ToYear, execute_batch};
use tempus_types::{LogicalType, TimeZoneRef};

const N: usize = 1_000_000;

// 2000-01-01 .. 2040-01-01
const LOW_SECONDS: i64 = 946_684_800;
const HIGH_SECONDS: i64 = 2_208_988_800;

fn make_seconds(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(0xDA7E_71E5_0000_0001);
    (0..n)
        .map(|_| rng.random_range(LOW_SECONDS..HIGH_SECONDS))
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let seconds = make_seconds(N);
    let days = Date32Array::from(
        seconds
            .iter()
            .map(|s| (s / 86_400) as i32)
            .collect::<Vec<_>>(),
    );
    let epoch = Int64Array::from(seconds.clone());
    let millis = TimestampMillisecondArray::from(
        seconds.iter().map(|s| s * 1_000 + 123).collect::<Vec<_>>(),
    );

    let utc = TimeZoneRef::UTC;
    let berlin = TimeZoneRef::resolve("Europe/Berlin").unwrap();
    let datetime = LogicalType::datetime(None);
    let datetime64 = LogicalType::datetime64(3, None).unwrap();

    c.bench_function("dispatch/date/to_year", |b| {
        b.iter(|| black_box(execute_batch(&ToYear, &LogicalType::Date, &days, &utc).unwrap()))
    });

    c.bench_function("dispatch/datetime/to_year_utc", |b| {
        b.iter(|| black_box(execute_batch(&ToYear, &datetime, &epoch, &utc).unwrap()))
    });

    c.bench_function("dispatch/datetime/to_year_berlin", |b| {
        b.iter(|| black_box(execute_batch(&ToYear, &datetime, &epoch, &berlin).unwrap()))
    });

    c.bench_function("dispatch/datetime64/to_year_utc", |b| {
        b.iter(|| black_box(execute_batch(&ToYear, &datetime64, &millis, &utc).unwrap()))
    });

    c.bench_function("dispatch/datetime64/to_hour_utc", |b| {
        b.iter(|| black_box(execute_batch(&ToHour, &datetime64, &millis, &utc).unwrap()))
    });

    c.bench_function("dispatch/datetime64/to_start_of_month_utc", |b| {
        b.iter(|| {
            black_box(execute_batch(&ToStartOfMonth, &datetime64, &millis, &utc).unwrap())
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
