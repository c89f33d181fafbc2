//! Inference benchmark: feature vector → logistic model probability.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use risk_scorer::features::{FeatureVector, FEATURE_DIM};
use risk_scorer::model::{LogisticModel, RiskModel};

fn bench_logistic(c: &mut Criterion) {
    let model = LogisticModel::new(vec![0.05; FEATURE_DIM], -1.0);
    let fv = FeatureVector {
        values: vec![0.1f32; FEATURE_DIM],
    };

    c.bench_function("logistic_18d", |b| {
        b.iter(|| model.predict_proba(black_box(&fv)))
    });
}

criterion_group!(benches, bench_logistic);
criterion_main!(benches);
