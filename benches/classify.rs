use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proev_remarks::{lexicon::BUILTIN, pipelines::remark_sentiment::classify};

static REMARKS: &[&str] = &[
    "The instructor was excellent and very helpful",
    "The lectures were confusing and boring",
    "The instructor was not good",
    "The course content was great but the pacing was confusing",
    "The class met on Tuesdays",
];

fn bench_classify(c: &mut Criterion) {
    let remarks: Vec<&str> = REMARKS.iter().copied().cycle().take(1_000).collect();

    c.bench_function("classify 1000 remarks", |b| {
        b.iter(|| classify(black_box(&remarks), &BUILTIN))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
