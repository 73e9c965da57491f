//! Benchmarks for the display formatters and leaderboard presentation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use youbuidl::format::{format_balance, format_number, truncate_address};
use youbuidl::model::fixtures::sample_leaders;
use youbuidl::model::Leader;
use youbuidl::present_leaderboard;
use youbuidl::view::LeaderboardState;

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let values = [0.0, 999.0, 1500.0, 999_999.0, 22_580_000_000.0, 4.2e15];
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("format_number", |b| {
        b.iter(|| {
            for value in values {
                black_box(format_number(black_box(value)));
            }
        })
    });

    group.bench_function("truncate_address", |b| {
        b.iter(|| truncate_address(black_box("0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f3c4d")))
    });

    group.bench_function("format_balance", |b| {
        b.iter(|| format_balance(black_box(Some("1.23456"))))
    });

    group.finish();
}

fn bench_leaderboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard");
    let state = LeaderboardState::default();

    for size in [10, 100, 1000] {
        let leaders: Vec<Leader> = sample_leaders()
            .into_iter()
            .cycle()
            .take(size)
            .enumerate()
            .map(|(i, leader)| Leader {
                id: i as u64,
                rank: (size - i) as i64,
                ..leader
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("present_{}", size), |b| {
            b.iter(|| present_leaderboard(black_box(&leaders), &state))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format, bench_leaderboard);
criterion_main!(benches);
