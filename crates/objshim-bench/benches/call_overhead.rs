//! Criterion micro-benchmarks for per-call overhead across the C boundary.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use objshim_bench::{CheckedFixture, RawFixture};
use objshim_ffi::{
    construct, destruct, mul, multiply, objshim_create, objshim_destroy, objshim_multiply,
    subtract,
};

/// Benchmark: raw `multiply` on a live pointer handle.
#[allow(unsafe_code)]
fn bench_raw_multiply(c: &mut Criterion) {
    let fixture = RawFixture::new(4);
    let h = fixture.handle();

    c.bench_function("raw_multiply", |b| {
        b.iter(|| unsafe { multiply(black_box(h), black_box(4)) });
    });
    c.bench_function("raw_subtract", |b| {
        b.iter(|| unsafe { subtract(black_box(h), black_box(4)) });
    });
    c.bench_function("legacy_mul", |b| {
        b.iter(|| unsafe { mul(black_box(h), black_box(4)) });
    });
}

/// Benchmark: checked `objshim_multiply` including table lock and lookup.
fn bench_checked_multiply(c: &mut Criterion) {
    let Some(fixture) = CheckedFixture::new(4) else {
        panic!("checked surface refused to create a fixture");
    };
    let h = fixture.handle();

    c.bench_function("checked_multiply", |b| {
        b.iter(|| {
            let mut out = 0i32;
            let status = objshim_multiply(black_box(h), black_box(4), &mut out);
            black_box((status, out))
        });
    });
}

/// Benchmark: full construct/destruct cycle on both surfaces.
#[allow(unsafe_code)]
fn bench_lifecycle(c: &mut Criterion) {
    c.bench_function("raw_construct_destruct", |b| {
        b.iter(|| {
            let h = construct(black_box(8));
            unsafe { destruct(h) };
        });
    });
    c.bench_function("checked_create_destroy", |b| {
        b.iter(|| {
            let mut h = 0u64;
            objshim_create(black_box(8), &mut h);
            objshim_destroy(h)
        });
    });
}

criterion_group!(
    benches,
    bench_raw_multiply,
    bench_checked_multiply,
    bench_lifecycle
);
criterion_main!(benches);
