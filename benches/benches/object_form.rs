//! Benchmarks for object-form conversion.
//!
//! Measures `to_object` / `from_object` on a robot part carrying a nested
//! configuration struct, and the type-erased catalog path used by the CLI.

#![allow(missing_docs)]

use app_schema::app::RobotPart;
use app_schema::catalog::{Catalog, Framing};
use app_schema::codec::Codec;
use app_schema::object;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

fn part_object() -> serde_json::Value {
    json!({
        "id": "p1",
        "name": "main",
        "robot": "r1",
        "locationId": "loc1",
        "robotConfig": {
            "components": [
                { "name": "arm", "type": "arm", "attributes": { "speed": 30 } },
                { "name": "servo1", "type": "servo", "attributes": { "pin": 12 } }
            ]
        },
        "lastAccess": { "seconds": 1_700_000_000, "nanos": 0 },
        "mainPart": true,
        "secrets": [ { "id": "s1", "secret": "abc", "state": 1 } ]
    })
}

fn bench_typed(c: &mut Criterion) {
    let value = part_object();
    let part: RobotPart = object::from_object(&value).unwrap_or_default();

    c.bench_function("object_form/to_object", |b| {
        b.iter(|| object::to_object(black_box(&part)));
    });
    c.bench_function("object_form/from_object", |b| {
        b.iter(|| object::from_object::<RobotPart>(black_box(&value)));
    });
}

fn bench_catalog(c: &mut Criterion) {
    let value = part_object();
    let codec = Codec::default();
    let Ok(entry) = Catalog::global().resolve("RobotPart") else {
        return;
    };
    let bytes = entry
        .encode_from_object(&codec, &value, Framing::Bare)
        .unwrap_or_default();

    c.bench_function("object_form/catalog_encode", |b| {
        b.iter(|| entry.encode_from_object(&codec, black_box(&value), Framing::Bare));
    });
    c.bench_function("object_form/catalog_decode", |b| {
        b.iter(|| entry.decode_to_object(&codec, black_box(&bytes), Framing::Bare));
    });
}

criterion_group!(benches, bench_typed, bench_catalog);
criterion_main!(benches);
