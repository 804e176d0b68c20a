use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridbounds::interior::interior_mask;

fn bench_classify(c: &mut Criterion) {
    for resolution in [256u32, 1024] {
        c.bench_function(&format!("interior_mask/{resolution}"), |b| {
            b.iter(|| interior_mask(black_box(resolution)))
        });
    }
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
