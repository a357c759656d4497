/*
Copyright 2024 NetApp, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    https://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doubleints::{ligate, split, SplitPair};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates the sample values, same range as the round trip tests
fn sample_values(count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..count).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn split_benchmark(c: &mut Criterion) {
    let data = sample_values(2048);

    c.bench_function("Split", |b| {
        b.iter(|| {
            for value in &data {
                black_box(split(black_box(*value)));
            }
        });
    });
}

fn ligate_benchmark(c: &mut Criterion) {
    let pairs: Vec<(i32, i32)> = sample_values(2048).into_iter().map(split).collect();

    c.bench_function("Ligate", |b| {
        b.iter(|| {
            for (low, high) in &pairs {
                black_box(ligate(black_box(*low), black_box(*high)));
            }
        });
    });
}

fn round_trip_benchmark(c: &mut Criterion) {
    let data = sample_values(2048);

    c.bench_function("SplitPair round trip", |b| {
        b.iter(|| {
            for value in &data {
                let pair = SplitPair::from(black_box(*value));
                black_box(f64::from(pair));
            }
        });
    });
}

criterion_group!(
    benches,
    split_benchmark,
    ligate_benchmark,
    round_trip_benchmark
);
criterion_main!(benches);
