use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tracer_core::presets::benchmark_scene;
use tracer_renderer::{Engine, RenderOptions, DEFAULT_BUCKET_SIZE};

fn render_benchmark_scene(c: &mut Criterion) {
    let scene = benchmark_scene();
    let engine = Engine::new(RenderOptions::benchmark()).unwrap();

    c.bench_function("benchmark_scene_sequential", |b| {
        b.iter(|| black_box(engine.render_checksum(&scene).checksum))
    });

    c.bench_function("benchmark_scene_parallel", |b| {
        b.iter(|| black_box(engine.render_parallel(&scene, DEFAULT_BUCKET_SIZE).1.checksum))
    });
}

criterion_group!(benches, render_benchmark_scene);
criterion_main!(benches);
