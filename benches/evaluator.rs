use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tdb_poker::deck::draw;
use tdb_poker::evaluator::classify_hand;
use tdb_poker::hand::Hand;

fn bench_classify(c: &mut Criterion) {
    let cases: [(&str, Hand); 3] = [
        ("no_win", "2c 5d 9h Js Kc".parse().unwrap()),
        ("royal", "Th Jh Qh Kh Ah".parse().unwrap()),
        ("four_twos", "2c 2d 2h 2s Kc".parse().unwrap()),
    ];

    let mut g = c.benchmark_group("classify_hand");
    for (name, hand) in cases.iter() {
        g.bench_with_input(BenchmarkId::new("category", name), hand, |b, input| {
            b.iter(|| classify_hand(black_box(input)))
        });
    }
    g.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    c.bench_function("draw_five", |b| b.iter(|| draw(black_box(5), &mut rng)));
}

criterion_group!(benches, bench_classify, bench_draw);
criterion_main!(benches);
