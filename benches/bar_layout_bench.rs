use barchart_rs::api::{BarChartConfig, BarChartEngine};
use barchart_rs::core::{
    AnimationPhases, BarChartData, BarDataSet, BarEntry, ValueTransformer, Viewport,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn simple_data(entry_count: usize) -> BarChartData {
    let entries: Vec<BarEntry> = (0..entry_count)
        .map(|i| {
            let x = i as f64;
            let y = if i % 2 == 0 { 50.0 + x * 0.01 } else { -25.0 };
            BarEntry::new(x, y).expect("valid generated entry")
        })
        .collect();
    let set = BarDataSet::new("bench-simple", entries).expect("valid data set");
    BarChartData::new(vec![set], 0.8).expect("valid data")
}

fn stacked_data(entry_count: usize) -> BarChartData {
    let entries: Vec<BarEntry> = (0..entry_count)
        .map(|i| {
            let x = i as f64;
            BarEntry::stacked(x, &[30.0, -10.0, 20.0]).expect("valid generated entry")
        })
        .collect();
    let set = BarDataSet::new("bench-stacked", entries).expect("valid data set");
    BarChartData::new(vec![set], 0.8).expect("valid data")
}

fn transformer(entry_count: usize) -> ValueTransformer {
    ValueTransformer::new(
        Viewport::new(1920, 1080),
        -1.0,
        entry_count as f64,
        -60.0,
        120.0,
    )
    .expect("valid transformer")
}

fn bench_simple_geometry_10k(c: &mut Criterion) {
    let data = simple_data(10_000);
    let transformer = transformer(10_000);
    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine init");
    engine.prepare(&data);

    c.bench_function("simple_geometry_10k", |b| {
        b.iter(|| {
            engine
                .build_geometry(
                    black_box(&data),
                    black_box(&transformer),
                    black_box(AnimationPhases::full()),
                )
                .expect("geometry should succeed");
        })
    });
}

fn bench_stacked_geometry_10k(c: &mut Criterion) {
    let data = stacked_data(10_000);
    let transformer = transformer(10_000);
    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine init");
    engine.prepare(&data);

    c.bench_function("stacked_geometry_10k", |b| {
        b.iter(|| {
            engine
                .build_geometry(
                    black_box(&data),
                    black_box(&transformer),
                    black_box(AnimationPhases::full()),
                )
                .expect("geometry should succeed");
        })
    });
}

fn bench_partial_reveal_geometry_10k(c: &mut Criterion) {
    let data = simple_data(10_000);
    let transformer = transformer(10_000);
    let mut engine = BarChartEngine::new(BarChartConfig::default()).expect("engine init");
    engine.prepare(&data);
    let phases = AnimationPhases::new(0.35, 0.6).expect("valid phases");

    c.bench_function("partial_reveal_geometry_10k", |b| {
        b.iter(|| {
            engine
                .build_geometry(
                    black_box(&data),
                    black_box(&transformer),
                    black_box(phases),
                )
                .expect("geometry should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_simple_geometry_10k,
    bench_stacked_geometry_10k,
    bench_partial_reveal_geometry_10k
);
criterion_main!(benches);
