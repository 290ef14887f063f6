//! Benchmarks for smckit protocol operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smckit::protocol::{pack_param, unpack_param, ParamStruct, Selector, SmcKey};

fn protocol_benchmarks(c: &mut Criterion) {
    c.bench_function("key_encode", |b| {
        b.iter(|| SmcKey::encode(black_box("TC0P")))
    });

    let request = ParamStruct::request(Selector::GetKeyInfo, SmcKey::new("TC0P").unwrap());
    c.bench_function("param_pack", |b| b.iter(|| pack_param(black_box(&request))));

    let packed = pack_param(&request);
    c.bench_function("param_unpack", |b| {
        b.iter(|| unpack_param(black_box(&packed)))
    });
}

criterion_group!(benches, protocol_benchmarks);
criterion_main!(benches);
