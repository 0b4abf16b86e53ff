use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashline_digest::{Algorithm, digest};

fn bench_digest(c: &mut Criterion) {
    let data = vec![0xa5u8; 1 << 20];
    let mut group = c.benchmark_group("digest");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for alg in [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(alg), &data, |b, data| {
            b.iter(|| digest(alg, data).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_digest);
criterion_main!(benches);
