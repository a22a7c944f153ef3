use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lax_uri::{component::Split, Uri};

criterion_group!(
    benches,
    bench_split,
    bench_normalize,
    bench_make_file,
    bench_validate,
);
criterion_main!(benches);

const SPLIT_CASE: &str = "https://user@example.com:8080/search/results.html?q=test";
const NORMALIZE_CASE: &str = "file:///C:\\games\\quake//data/../maps/e1m1.bsp";
const FILE_CASE: &str = "C:\\games\\quake\\maps\\e1m1.bsp";

fn bench_split(c: &mut Criterion) {
    c.bench_function("split", |b| b.iter(|| Split::of(black_box(SPLIT_CASE))));
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| {
            let mut u = Uri::new(black_box(NORMALIZE_CASE).to_owned());
            u.normalize();
            u
        })
    });
}

fn bench_make_file(c: &mut Criterion) {
    c.bench_function("make_file", |b| {
        b.iter(|| Uri::make_file(black_box(FILE_CASE)))
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate", |b| {
        b.iter(|| Uri::new(black_box(SPLIT_CASE)).is_valid())
    });
}
