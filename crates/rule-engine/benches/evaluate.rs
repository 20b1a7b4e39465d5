use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knowledge_base::{SymptomKey, SymptomState};
use rule_engine::RuleEngine;

fn bench_evaluate(c: &mut Criterion) {
    let engine = RuleEngine::new();
    let empty = SymptomState::new();
    let high_fever = SymptomState::new().with(SymptomKey::HighFever);
    let emergency = SymptomState::new().with(SymptomKey::ChestPain);

    c.bench_function("evaluate_default", |b| b.iter(|| engine.evaluate(black_box(&empty))));
    c.bench_function("evaluate_last_rule", |b| {
        b.iter(|| engine.evaluate(black_box(&high_fever)))
    });
    c.bench_function("evaluate_first_rule", |b| {
        b.iter(|| engine.evaluate(black_box(&emergency)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
