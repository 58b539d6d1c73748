use bigend::{decode, encode, Width};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode u16", |b| b.iter(|| encode(black_box(0xabcdu16))));
    c.bench_function("encode u64", |b| {
        b.iter(|| encode(black_box(0x0123_4567_89ab_cdefu64)))
    });
    c.bench_function("encode runtime width 64", |b| {
        b.iter(|| Width::W64.encode(black_box(0x0123_4567_89ab_cdef)))
    });
}

pub fn bench_decode(c: &mut Criterion) {
    let bytes = [0xffu8, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
    c.bench_function("decode u16 from 9 bytes", |b| {
        b.iter(|| decode::<u16>(black_box(&bytes[..])))
    });
    c.bench_function("decode u64 from 9 bytes", |b| {
        b.iter(|| decode::<u64>(black_box(&bytes[..])))
    });
    c.bench_function("decode u32 from empty", |b| {
        b.iter(|| decode::<u32>(black_box(&[0u8; 0][..])))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
