use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cricvision_terminal::datasets::ERA_CATALOG;
use cricvision_terminal::predict::{chase_win_probability, ChaseInputs};
use cricvision_terminal::queries::{head_to_head, top_run_scorers};

fn bench_leaderboards(c: &mut Criterion) {
    let era = ERA_CATALOG
        .iter()
        .find(|e| e.key == "modern")
        .expect("modern era bundled");
    c.bench_function("top_run_scorers_modern", |b| {
        b.iter(|| {
            let rows = top_run_scorers(black_box(&era.players), black_box(5));
            black_box(rows.len());
        })
    });
}

fn bench_head_to_head(c: &mut Criterion) {
    let era = ERA_CATALOG
        .iter()
        .find(|e| e.key == "historic")
        .expect("historic era bundled");
    c.bench_function("head_to_head_historic", |b| {
        b.iter(|| {
            let h2h = head_to_head(
                black_box(&era.matches),
                black_box("Mumbai Indians"),
                black_box("Chennai Super Kings"),
            )
            .expect("distinct teams");
            black_box(h2h.total_matches);
        })
    });
}

fn bench_chase_predictor(c: &mut Criterion) {
    let inputs = ChaseInputs {
        batting_team: "Chennai Super Kings".to_string(),
        bowling_team: "Mumbai Indians".to_string(),
        target: 180,
        current_score: 90,
        overs_completed: 10.0,
        wickets_down: 3,
    };
    c.bench_function("chase_win_probability", |b| {
        b.iter(|| {
            let out = chase_win_probability(black_box(&inputs)).expect("valid inputs");
            black_box(out.batting_win);
        })
    });
}

criterion_group!(
    benches,
    bench_leaderboards,
    bench_head_to_head,
    bench_chase_predictor
);
criterion_main!(benches);
