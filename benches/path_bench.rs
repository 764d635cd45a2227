use criterion::{criterion_group, criterion_main, Criterion};
use keypath::config::BatchConfig;
use keypath::{api, Keyboard, TypingTask};
use std::hint::black_box;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789 .,;'-";

fn random_word(rng: &mut fastrand::Rng, len: usize) -> String {
    let keys: Vec<char> = ALPHABET.chars().collect();
    (0..len).map(|_| keys[rng.usize(..keys.len())]).collect()
}

fn bench_assemble(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let kb = Keyboard::build(ALPHABET, 9).unwrap();
    let word = random_word(&mut rng, 64);

    c.bench_function("assemble_64_letters", |b| {
        b.iter(|| kb.assemble(black_box('a'), black_box(&word)).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(7);
    let tasks: Vec<TypingTask> = (0..256)
        .map(|i| TypingTask::new(ALPHABET, 5 + (i % 7), 'a', &random_word(&mut rng, 16)))
        .collect();

    let mut group = c.benchmark_group("batch_256");
    group.bench_function("parallel", |b| {
        b.iter(|| api::solve_all(black_box(&tasks), &BatchConfig::default()).unwrap())
    });
    group.bench_function("sequential", |b| {
        b.iter(|| api::solve_all(black_box(&tasks), &BatchConfig::sequential()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_assemble, bench_batch);
criterion_main!(benches);
