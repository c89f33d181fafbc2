//! Request path benchmark: payload → feature vector → risk tier.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use risk_scorer::features::FeatureAssembler;
use risk_scorer::risk::RiskClassifier;

fn bench_assemble(c: &mut Criterion) {
    let assembler = FeatureAssembler::new();
    let payload = serde_json::json!({
        "amt": "12.50",
        "city_pop": "1000",
        "hour": "14",
        "distance_km": "3.2",
        "category": "category_travel"
    });

    c.bench_function("assemble_string_fields", |b| {
        b.iter(|| assembler.assemble(black_box(&payload)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = RiskClassifier::default();
    let mut g = c.benchmark_group("classify_by_tier");
    for p in [0.1, 0.45, 0.9] {
        g.bench_function(format!("p_{}", p).as_str(), |b| {
            b.iter(|| classifier.classify(black_box(p)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_assemble, bench_classify);
criterion_main!(benches);
