//! Benchmarks for EMV payload encoding, decoding and checksum validation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emv_qr_core::{crc16_ccitt_false, validate_payload, Decimal, PaymentDefaults, PaymentPayload};

fn create_test_payload() -> PaymentPayload {
    PaymentDefaults::default()
        .retail("Boutique Ndiaye", "Dakar", Decimal::new(1_250_000, 2))
        .with_merchant_id("MERCHANT-0042")
        .with_additional_data("0503***0708TERM0001")
}

fn benchmark_encoding(c: &mut Criterion) {
    let payload = create_test_payload();

    c.bench_function("encode", |b| b.iter(|| black_box(&payload).encode()));

    c.bench_function("encode_checked", |b| {
        b.iter(|| black_box(&payload).encode_checked())
    });
}

fn benchmark_decoding(c: &mut Criterion) {
    let raw = create_test_payload().encode().expect("benchmark payload encodes");

    c.bench_function("decode", |b| {
        b.iter(|| PaymentPayload::decode(black_box(&raw)))
    });

    c.bench_function("parse", |b| b.iter(|| PaymentPayload::parse(black_box(&raw))));

    c.bench_function("validate_payload", |b| {
        b.iter(|| validate_payload(black_box(&raw)))
    });
}

fn benchmark_crc(c: &mut Criterion) {
    let short = b"123456789".to_vec();
    let long = create_test_payload().encode().expect("benchmark payload encodes").repeat(8);

    c.bench_function("crc16_9_bytes", |b| {
        b.iter(|| crc16_ccitt_false(black_box(&short)))
    });

    c.bench_function("crc16_payload_x8", |b| {
        b.iter(|| crc16_ccitt_false(black_box(long.as_bytes())))
    });
}

criterion_group!(benches, benchmark_encoding, benchmark_decoding, benchmark_crc);
criterion_main!(benches);
