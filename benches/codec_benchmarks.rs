use criterion::{criterion_group, criterion_main, Criterion};
use recfile::ops;
use recfile::record::{Record, ScaledDecimal};

fn bench_record_encode(c: &mut Criterion) {
    let amount = ScaledDecimal::new(9999, false, 2).unwrap();
    let record = Record::new(12345, amount, true);

    c.bench_function("record_encode", |b| {
        b.iter(|| std::hint::black_box(&record).encode())
    });
}

fn bench_record_decode(c: &mut Criterion) {
    let amount = ScaledDecimal::new(9999, false, 2).unwrap();
    let bytes = Record::new(12345, amount, true).encode();

    c.bench_function("record_decode", |b| {
        b.iter(|| Record::decode(std::hint::black_box(&bytes)).unwrap())
    });
}

fn bench_chunked_copy_1kb(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("src.bin");
    let dst = temp_dir.path().join("dst.bin");
    std::fs::write(&src, vec![0u8; 1024]).unwrap();

    c.bench_function("chunked_copy_1kb", |b| {
        b.iter(|| ops::copy_file(&src, &dst).unwrap())
    });
}

fn bench_chunked_copy_1mb(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("src.bin");
    let dst = temp_dir.path().join("dst.bin");
    std::fs::write(&src, vec![0u8; 1024 * 1024]).unwrap();

    c.bench_function("chunked_copy_1mb", |b| {
        b.iter(|| ops::copy_file(&src, &dst).unwrap())
    });
}

criterion_group!(
    benches,
    bench_record_encode,
    bench_record_decode,
    bench_chunked_copy_1kb,
    bench_chunked_copy_1mb
);

criterion_main!(benches);
