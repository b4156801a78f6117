// Criterion benchmarks for Persona Assist

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persona_assist::core::{build_messages, similarity, Matcher, SEED_CONVERSATIONS};
use persona_assist::models::ConversationPair;

fn create_pairs(count: usize) -> Vec<ConversationPair> {
    SEED_CONVERSATIONS
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, &(pattern, response))| ConversationPair::new(format!("{pattern} #{i}"), response))
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("jaccard_similarity", |b| {
        b.iter(|| {
            similarity(
                black_box("how do you usually approach hard challenges"),
                black_box("How do you usually approach challenges?"),
            )
        });
    });
}

fn bench_find_best_match(c: &mut Criterion) {
    let matcher = Matcher::default();
    let mut group = c.benchmark_group("find_best_match");

    for size in [12, 100, 1000] {
        let pairs = create_pairs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| matcher.find_best_match(black_box("What time is it in Tokyo?"), pairs));
        });
    }

    group.finish();
}

fn bench_build_messages(c: &mut Criterion) {
    let pairs = create_pairs(100);
    c.bench_function("build_messages", |b| {
        b.iter(|| build_messages(black_box("What time is it in Tokyo?"), &pairs, 20));
    });
}

criterion_group!(benches, bench_similarity, bench_find_best_match, bench_build_messages);
criterion_main!(benches);
