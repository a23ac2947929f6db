//! Benchmark suite for Yodelr engine operations
//!
//! Covers the `Yodelr` API:
//! - add_post (topic extraction + three-structure insert)
//! - get_posts_for_topic
//! - get_trending_topics over narrow and wide ranges
//! - delete_user cascade
//!
//! Run: cargo bench --bench engine_operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use yodelr::{Yodelr, YodelrEngine};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TOPICS: &[&str] = &["rust", "oslo", "vespa", "db", "search", "go_lang", "hash-tags"];

fn post_text(i: usize) -> String {
    format!(
        "post number {} about #{} and #{}",
        i,
        TOPICS[i % TOPICS.len()],
        TOPICS[(i * 3 + 1) % TOPICS.len()]
    )
}

fn create_engine(user_count: usize, post_count: usize) -> YodelrEngine {
    let mut engine = YodelrEngine::new();
    for u in 0..user_count {
        engine.add_user(&format!("user_{}", u)).unwrap();
    }
    for i in 0..post_count {
        let user = format!("user_{}", i % user_count);
        engine.add_post(&user, &post_text(i), i as u64 + 1).unwrap();
    }
    engine
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_add_post(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_post");
    for &count in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut engine = YodelrEngine::new();
                    engine.add_user("author").unwrap();
                    engine
                },
                |mut engine| {
                    for i in 0..count {
                        engine.add_post("author", &post_text(i), i as u64 + 1).unwrap();
                    }
                    engine
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_posts_for_topic(c: &mut Criterion) {
    let engine = create_engine(100, 10_000);
    c.bench_function("get_posts_for_topic", |b| {
        b.iter(|| black_box(engine.get_posts_for_topic(black_box("Go-Lang"))))
    });
}

fn bench_trending(c: &mut Criterion) {
    let engine = create_engine(100, 50_000);
    let mut group = c.benchmark_group("get_trending_topics");
    for &(from, to) in &[(1u64, 100u64), (1, 50_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}..={}", from, to)),
            &(from, to),
            |b, &(from, to)| b.iter(|| black_box(engine.get_trending_topics(from, to))),
        );
    }
    group.finish();
}

fn bench_delete_user(c: &mut Criterion) {
    c.bench_function("delete_user", |b| {
        b.iter_batched(
            || create_engine(10, 10_000),
            |mut engine| {
                engine.delete_user("user_3").unwrap();
                engine
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_add_post,
    bench_posts_for_topic,
    bench_trending,
    bench_delete_user
);
criterion_main!(benches);
