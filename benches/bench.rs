// Criterion benchmarks for Gift Predictor

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use gift_predictor::core::{Catalog, Predictor, PredictorOptions};
use std::collections::BTreeMap;

fn create_predictor(interest_count: usize) -> Predictor {
    let gifts: BTreeMap<String, String> = (1..=120)
        .filter(|age| age % 3 == 0)
        .map(|age| (age.to_string(), format!("Gift for age {}", age)))
        .collect();
    let interests: BTreeMap<String, String> = (0..interest_count)
        .map(|i| (format!("interest{}", i), format!("Category {}", i)))
        .collect();

    Predictor::from_catalog(Catalog::new(gifts, interests), PredictorOptions::default())
}

fn bench_predict(c: &mut Criterion) {
    let predictor = create_predictor(12);

    c.bench_function("predict_hit", |b| {
        b.iter(|| predictor.predict(black_box(30), black_box("interest3")))
    });

    c.bench_function("predict_default_gift", |b| {
        b.iter(|| predictor.predict(black_box(31), black_box("Interest3")))
    });
}

fn bench_predict_by_interest_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_interest_count");

    for count in [10, 100, 1000] {
        let predictor = create_predictor(count);
        let interest = format!("interest{}", count - 1);

        group.bench_with_input(BenchmarkId::from_parameter(count), &interest, |b, interest| {
            b.iter(|| predictor.predict(black_box(60), black_box(interest)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_predict, bench_predict_by_interest_count);
criterion_main!(benches);
