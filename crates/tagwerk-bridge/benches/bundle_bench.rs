// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the JSON-to-bundle conversion in the
// tagwerk-bridge crate, on a representative e-commerce payload.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tagwerk_bridge::ParamBundle;

/// Benchmark bundle conversion on a typical purchase payload: a handful of
/// scalars plus a small item array with nested objects. This is the shape
/// every direct-callable dispatch pays for on the native side.
fn bench_bundle_conversion(c: &mut Criterion) {
    let payload = r#"{
        "currency": "AUD",
        "value": 0,
        "coupon": "WELCOME10",
        "items": [
            {"id": "sku1", "name": "tea pot", "price": 9.99, "quantity": 1},
            {"id": "sku2", "name": "tea cosy", "price": 4.5, "quantity": 2},
            {"id": "sku3", "name": "loose leaf", "price": 12.0, "quantity": 1}
        ]
    }"#;

    c.bench_function("param_bundle_from_json (purchase)", |b| {
        b.iter(|| {
            let bundle = ParamBundle::from_json(black_box(payload)).expect("convert");
            black_box(bundle);
        });
    });
}

criterion_group!(benches, bench_bundle_conversion);
criterion_main!(benches);
