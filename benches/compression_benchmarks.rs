use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffman_codec::{decode, encode};

fn sample_text() -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog ".repeat(1000)
}

fn bench_encode(c: &mut Criterion) {
    let data = sample_text();
    c.bench_function("encode 44k", |b| b.iter(|| encode(black_box(&data)).unwrap()));
}

fn bench_decode(c: &mut Criterion) {
    let data = sample_text();
    let (bits, table) = encode(&data).unwrap();
    c.bench_function("decode 44k", |b| {
        b.iter(|| decode(black_box(&bits), black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
