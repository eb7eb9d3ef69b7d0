// Criterion benchmarks for EduPath Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edupath_engine::core::{cosine_similarity, Catalog, Engine};
use edupath_engine::models::{
    AptitudeResponse, AptitudeScores, InterestProfile, InterestResponse, RiasecCategory,
    ScoringWeights,
};

fn create_interests() -> InterestProfile {
    InterestProfile::from_array([35.0, 80.0, 55.0, 70.0, 90.0, 40.0])
}

fn create_aptitude() -> AptitudeScores {
    AptitudeScores::from_array([60.0, 75.0, 40.0, 85.0])
}

/// Builtin catalog with its careers repeated `copies` times under fresh ids
fn create_catalog(copies: usize) -> Catalog {
    let mut catalog = Catalog::builtin();
    let base = catalog.careers.clone();
    catalog.careers = (0..copies)
        .flat_map(|i| {
            base.iter().cloned().map(move |mut career| {
                career.id = format!("{}_{}", career.id, i);
                career
            })
        })
        .collect();
    catalog
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let a = create_interests().to_array();
    let b = [20.0, 90.0, 30.0, 20.0, 40.0, 60.0];

    c.bench_function("cosine_similarity", |bench| {
        bench.iter(|| cosine_similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_normalize_interests(c: &mut Criterion) {
    let engine = Engine::with_defaults();
    let responses: Vec<InterestResponse> = (0..60)
        .map(|i| {
            let category = RiasecCategory::ALL[i % 6];
            InterestResponse::new(category.as_str(), (i % 5 + 1) as i64)
        })
        .collect();

    c.bench_function("normalize_interests_60_responses", |b| {
        b.iter(|| engine.normalize_interests(black_box(&responses)));
    });
}

fn bench_score_aptitude(c: &mut Criterion) {
    let engine = Engine::with_defaults();
    let responses: Vec<AptitudeResponse> = (0..40)
        .map(|i| AptitudeResponse::new(["logical", "numerical", "spatial", "verbal"][i % 4], i % 3 != 0))
        .collect();

    c.bench_function("score_aptitude_40_responses", |b| {
        b.iter(|| engine.score_aptitude(black_box(&responses)));
    });
}

fn bench_recommend_careers(c: &mut Criterion) {
    let interests = create_interests();
    let aptitude = create_aptitude();

    let mut group = c.benchmark_group("recommend_careers");

    for copies in [1, 10, 100].iter() {
        let engine = Engine::new(create_catalog(*copies), ScoringWeights::default()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("careers", copies * 5),
            copies,
            |b, _| {
                b.iter(|| {
                    engine.recommend_careers(
                        black_box(&interests),
                        black_box(Some(&aptitude)),
                        None,
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_recommend_streams(c: &mut Criterion) {
    let engine = Engine::with_defaults();
    let interests = create_interests();
    let aptitude = create_aptitude();

    c.bench_function("recommend_streams", |b| {
        b.iter(|| engine.recommend_streams(black_box(&interests), black_box(Some(&aptitude)), 10));
    });
}

criterion_group!(
    benches,
    bench_cosine_similarity,
    bench_normalize_interests,
    bench_score_aptitude,
    bench_recommend_careers,
    bench_recommend_streams
);

criterion_main!(benches);
