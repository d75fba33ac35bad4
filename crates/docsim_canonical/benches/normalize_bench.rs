use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use docsim_canonical::{normalize, NormalizeConfig};

fn bench_normalize(c: &mut Criterion) {
    let cfg = NormalizeConfig::default();
    let mut group = c.benchmark_group("normalize");

    let sentence = "Съешь же ещё этих мягких французских булок, да выпей чаю. ";
    for repeats in [10usize, 100, 1000] {
        let input = sentence.repeat(repeats);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("sentences_{repeats}"), |b| {
            b.iter(|| normalize(black_box(&input), black_box(&cfg)).expect("normalize"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
