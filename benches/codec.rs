//! Codec throughput benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use unitext::codec::{
    decode_utf8, decode_utf16, decode_utf32, encode_utf8, encode_utf16, validate_utf8,
};

fn sample_text() -> String {
    "Hello, 世界! Grüße 🌍 ".repeat(256)
}

fn decoding(c: &mut Criterion) {
    let text = sample_text();
    let utf8 = text.as_bytes().to_vec();
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let utf32: Vec<u32> = text.chars().map(u32::from).collect();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(utf32.len() as u64));
    group.bench_function("utf8_mixed", |b| b.iter(|| decode_utf8(black_box(&utf8))));
    group.bench_function("utf16_mixed", |b| {
        b.iter(|| decode_utf16(black_box(&utf16)))
    });
    group.bench_function("utf32_mixed", |b| {
        b.iter(|| decode_utf32(black_box(&utf32)))
    });

    let ascii = "x".repeat(10_000);
    group.throughput(Throughput::Bytes(ascii.len() as u64));
    group.bench_function("utf8_ascii_10k", |b| {
        b.iter(|| decode_utf8(black_box(ascii.as_bytes())))
    });

    let noisy: Vec<u8> = (0..10_000u32).map(|i| (i * 37 % 256) as u8).collect();
    group.bench_function("utf8_malformed_10k", |b| {
        b.iter(|| decode_utf8(black_box(&noisy)))
    });
    group.finish();
}

fn encoding(c: &mut Criterion) {
    let chars: Vec<char> = sample_text().chars().collect();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(chars.len() as u64));
    group.bench_function("utf8_mixed", |b| b.iter(|| encode_utf8(black_box(&chars))));
    group.bench_function("utf16_mixed", |b| {
        b.iter(|| encode_utf16(black_box(&chars)))
    });
    group.finish();
}

fn validation(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("validate_utf8_mixed", |b| {
        b.iter(|| validate_utf8(black_box(text.as_bytes())))
    });
}

criterion_group!(benches, decoding, encoding, validation);
criterion_main!(benches);
