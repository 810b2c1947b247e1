use criterion::{criterion_group, criterion_main, Criterion};
use statusroll::{build_breakdown, ChildRecord, Locale, StatusEntity, StatusRollup};
use std::hint::black_box;

fn fixture(n: usize) -> Vec<ChildRecord> {
    let pool: Vec<StatusEntity> = (0..8)
        .map(|i| {
            StatusEntity::new(format!("st-{i}"), format!("Status {i}"))
                .with_name_en(format!("State {i}"))
                .with_color("#336699")
        })
        .collect();

    (0..n)
        .map(|i| ChildRecord::with_status(format!("p{i}"), pool[i % pool.len()].clone()))
        .collect()
}

fn bench_build_breakdown(c: &mut Criterion) {
    let records = fixture(10_000);
    c.bench_function("build_breakdown_10k", |b| {
        b.iter(|| build_breakdown(black_box(&records)))
    });
}

fn bench_status_rollup(c: &mut Criterion) {
    let records = fixture(10_000);
    c.bench_function("status_rollup_10k", |b| {
        b.iter(|| StatusRollup::from_records(black_box(&records), Locale::Pt))
    });
}

criterion_group!(benches, bench_build_breakdown, bench_status_rollup);
criterion_main!(benches);
