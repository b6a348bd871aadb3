// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;
use zano_address::{
    SecretKey,
    derivation::generate_key_derivation
};

fn derivation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Derivation");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(3));

    let view = SecretKey::generate();
    let spend = SecretKey::generate().to_public().unwrap();
    let tx_public_key = SecretKey::generate().to_public().unwrap();

    let derivation = generate_key_derivation(&tx_public_key, &view).unwrap();

    group.bench_with_input(BenchmarkId::new("Generate", "Key derivation"), &view,
    |b, view| b.iter(|| {
        black_box(generate_key_derivation(&tx_public_key, view).unwrap());
    }));

    group.bench_with_input(BenchmarkId::new("Generate", "Hs"), &derivation,
    |b, derivation| b.iter(|| {
        black_box(derivation.to_scalar(black_box(3)));
    }));

    group.bench_with_input(BenchmarkId::new("Generate", "Output key"), &derivation,
    |b, derivation| b.iter(|| {
        black_box(derivation.derive_public_key(black_box(3), &spend).unwrap());
    }));
}

criterion_group!(derivation, derivation_benchmark);
criterion_main!(derivation);
