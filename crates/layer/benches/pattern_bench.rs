//! Benchmarks for layer tiling patterns.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use u_pallet_layer::{
    all_descriptors, evaluate_candidates, Axis, BoxDimensions, Config, ContainerFootprint, Layer,
    LayerPattern, Pattern,
};

fn pattern_benchmark(c: &mut Criterion) {
    let box_dims = BoxDimensions::new(400.0, 300.0, 200.0);
    let pallet = ContainerFootprint::new(1200.0, 1000.0);

    for pattern in LayerPattern::ALL {
        c.bench_function(&format!("generate_{}", pattern.name()), |b| {
            b.iter(|| {
                let mut layer = Layer::new(box_dims, pallet, Axis::ZPos, false);
                let generated = pattern.generate(black_box(&mut layer));
                black_box((generated, layer))
            })
        });
    }

    // Small boxes stress the spiral size search.
    let small = BoxDimensions::new(40.0, 30.0, 20.0);
    c.bench_function("enlarged_spiral_small_boxes", |b| {
        b.iter(|| {
            let layer = Layer::new(small, pallet, Axis::ZPos, false);
            black_box(LayerPattern::EnlargedSpiral.layer_dimensions(black_box(&layer)))
        })
    });

    let descriptors = all_descriptors();
    let config = Config::default();
    c.bench_function("evaluate_18_candidates", |b| {
        b.iter(|| {
            let layers = evaluate_candidates(
                box_dims,
                pallet,
                black_box(&descriptors),
                &config,
                1500.0,
            );
            black_box(layers)
        })
    });
}

criterion_group!(benches, pattern_benchmark);
criterion_main!(benches);
