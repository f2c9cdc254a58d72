//! Benchmarks for the resolution pipeline.
//!
//! Each input exercises a different depth of the auto-detection chain:
//! hex matches on the first detector, an RGB triple on the second, and an
//! X11 name only after both have rejected it.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use colorview::render::{OutputStyle, render};
use colorview::{ColorQuery, normalize, resolve};

const INPUTS: [(&str, &str); 4] = [
    ("hex", "#1E90FF"),
    ("rgb", "30, 144, 255"),
    ("x11", "Dodger Blue"),
    ("miss", "not a color at all"),
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize/spaced_name", |b| {
        b.iter(|| normalize(black_box("Light Goldenrod Yellow")));
    });
}

fn bench_resolve_auto(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_auto");
    for (label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(label), input, |b, input| {
            b.iter(|| {
                let query = ColorQuery::new(black_box(input), None).expect("non-empty");
                let _ = black_box(resolve(query));
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let style = OutputStyle::default();
    let mut group = c.benchmark_group("render");
    for (label, input) in &INPUTS[..3] {
        let resolution = resolve(ColorQuery::new(input, None).expect("non-empty")).expect("resolves");
        group.bench_function(*label, |b| {
            b.iter(|| render(black_box(&resolution), &style));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve_auto, bench_render);
criterion_main!(benches);
