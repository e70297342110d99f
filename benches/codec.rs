//! Encode/decode throughput for the short id codec.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use uuid::Uuid;

use shortuuid_worker::{named_uuid, short_to_uuid, uuid_to_short};

fn bench_short_id(c: &mut Criterion) {
    let uuid = Uuid::from_u128(0xa8e4_1dc6_74c9_42c5_bb03_3bfd_6230_44c5);
    let base36 = uuid_to_short(&uuid, false);
    let base62 = uuid_to_short(&uuid, true);

    c.bench_function("encode_base36", |b| {
        b.iter(|| uuid_to_short(black_box(&uuid), false));
    });
    c.bench_function("encode_base62", |b| {
        b.iter(|| uuid_to_short(black_box(&uuid), true));
    });
    c.bench_function("decode_base36", |b| {
        b.iter(|| short_to_uuid(black_box(&base36), false));
    });
    c.bench_function("decode_base62", |b| {
        b.iter(|| short_to_uuid(black_box(&base62), true));
    });
}

fn bench_named(c: &mut Criterion) {
    let namespace = Uuid::from_u128(0x4bdb_e8ec_5cb5_11ea_bc55_0242_ac13_0003);

    c.bench_function("named_v3", |b| {
        b.iter(|| named_uuid(3, Some(black_box(&namespace)), black_box("widget/1234567890")));
    });
    c.bench_function("named_v5", |b| {
        b.iter(|| named_uuid(5, Some(black_box(&namespace)), black_box("widget/1234567890")));
    });
}

criterion_group!(benches, bench_short_id, bench_named);
criterion_main!(benches);
