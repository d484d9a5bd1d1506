//! Benchmarks for the binary codec.
//!
//! Performance-critical paths:
//! - `codec::encode` / `codec::decode` on list responses of growing size
//! - `Catalog::resolve` by full and short name

#![allow(missing_docs)]

use app_schema::app::{ListLocationsResponse, Location, LocationAuth, SharedSecret, shared_secret};
use app_schema::catalog::Catalog;
use app_schema::codec;
use app_schema::wkt::Timestamp;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const CREATED_ON: Timestamp = Timestamp {
    seconds: 1_700_000_000,
    nanos: 0,
};

fn locations(count: usize) -> ListLocationsResponse {
    ListLocationsResponse {
        locations: (0..count)
            .map(|i| Location {
                id: format!("loc{i}"),
                name: format!("Location {i}"),
                auth: Some(LocationAuth {
                    secret: String::new(),
                    location_id: format!("loc{i}"),
                    secrets: vec![SharedSecret {
                        id: format!("s{i}"),
                        secret: "0123456789abcdef".to_string(),
                        created_on: Some(CREATED_ON),
                        state: shared_secret::State::Enabled.into(),
                    }],
                }),
                created_on: Some(CREATED_ON),
                robot_count: 4,
                ..Default::default()
            })
            .collect(),
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/encode");

    for count in [1, 16, 256] {
        let response = locations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &response, |b, r| {
            b.iter(|| codec::encode(black_box(r)));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/decode");

    for count in [1, 16, 256] {
        let bytes = codec::encode(&locations(count));
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| codec::decode::<ListLocationsResponse>(black_box(bytes)));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::global();
    let mut group = c.benchmark_group("catalog/resolve");

    for name in ["viam.app.v1.RobotPart", "RobotPart", "viam.component.servo.v1.MoveRequest"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| catalog.resolve(black_box(name)).is_ok());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_resolve);
criterion_main!(benches);
