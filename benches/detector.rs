use cacho::bot::{best_flip, lookahead_value};
use cacho::{detect_all, BotPolicy, Match, MatchConfig, SeatConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const HANDS: [(&str, [u8; 5]); 5] = [
    ("nothing", [1, 2, 4, 4, 6]),
    ("straight", [3, 1, 4, 2, 5]),
    ("full", [2, 3, 2, 3, 3]),
    ("poker", [6, 6, 1, 6, 6]),
    ("grande", [5, 5, 5, 5, 5]),
];

fn detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_all");
    for (name, dice) in HANDS {
        group.bench_function(BenchmarkId::new("de_mano", name), |b| {
            b.iter(|| black_box(detect_all(black_box(&dice), true)))
        });
        group.bench_function(BenchmarkId::new("plain", name), |b| {
            b.iter(|| black_box(detect_all(black_box(&dice), false)))
        });
    }
    group.finish();
}

fn flip_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_search");
    for (name, dice) in HANDS {
        group.bench_function(BenchmarkId::new("best_flip", name), |b| {
            b.iter(|| black_box(best_flip(black_box(&dice))))
        });
        group.bench_function(BenchmarkId::new("lookahead", name), |b| {
            b.iter(|| black_box(lookahead_value(black_box(&dice))))
        });
    }
    group.finish();
}

fn bot_match(c: &mut Criterion) {
    let config = MatchConfig {
        seats: vec![
            SeatConfig::bot("Hard", BotPolicy::Hard),
            SeatConfig::bot("Medium", BotPolicy::Medium),
        ],
        seed: 0,
    };
    let mut seed = 0u64;
    c.bench_function("bot_match/hard_vs_medium", |b| {
        b.iter(|| {
            seed += 1;
            let mut game = Match::new(config.clone().with_seed(seed)).unwrap();
            black_box(game.run_bots().unwrap())
        })
    });
}

criterion_group!(benches, detector, flip_search, bot_match);
criterion_main!(benches);
