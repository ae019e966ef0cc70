use criterion::{Criterion, criterion_group, criterion_main};
use oncoband::BandFacetScale;
use std::hint::black_box;

fn bench_rebuild(c: &mut Criterion, n: usize) {
    let domain: Vec<String> = (0..n).map(|i| format!("sample_{i}")).collect();
    // Ten contiguous facet groups of equal size.
    let facet: Vec<String> = (0..n).map(|i| format!("group_{}", i * 10 / n)).collect();

    c.bench_function(&format!("band_scale_rebuild_{n}"), |b| {
        b.iter(|| {
            let mut scale = BandFacetScale::new();
            scale
                .domain(black_box(domain.clone()))
                .expect("valid domain")
                .range(black_box([0.0, 1920.0]))
                .padding_inner(0.05)
                .padding_outer(0.05)
                .facet_padding_multiplier(5.0)
                .facet(black_box(facet.clone()))
                .expect("valid facet");
            black_box(scale.bandwidth())
        })
    });
}

fn bench_band_scale_rebuild_100(c: &mut Criterion) {
    bench_rebuild(c, 100);
}

fn bench_band_scale_rebuild_1k(c: &mut Criterion) {
    bench_rebuild(c, 1_000);
}

fn bench_resolve_lookup(c: &mut Criterion) {
    let domain: Vec<String> = (0..500).map(|i| format!("sample_{i}")).collect();
    let mut scale = BandFacetScale::new();
    scale
        .domain(domain)
        .expect("valid domain")
        .range([0.0, 1920.0]);

    c.bench_function("band_scale_resolve_500", |b| {
        b.iter(|| black_box(scale.resolve(black_box("sample_250"))))
    });
}

criterion_group!(
    benches,
    bench_band_scale_rebuild_100,
    bench_band_scale_rebuild_1k,
    bench_resolve_lookup
);
criterion_main!(benches);
