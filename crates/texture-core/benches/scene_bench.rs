use texture_core::{CanvasGeometry, Composition, SvgRenderer, TexturalTriangle};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_scene(c: &mut Criterion) {
    let tri = TexturalTriangle::new();
    let sample = Composition::new(20.0, 40.0, 40.0).expect("valid sample");

    let mut group = c.benchmark_group("scene");
    for &size in &[400.0f64, 1600.0f64] {
        let g = CanvasGeometry::new(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(format!("record_{size}")), &g, |b, g| {
            b.iter(|| black_box(tri.scene(g, Some(&sample))));
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("svg_{size}")), &g, |b, g| {
            b.iter(|| {
                let mut svg = SvgRenderer::new(g.width, g.height);
                tri.draw(g, Some(&sample), &mut svg);
                black_box(svg.into_string())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
