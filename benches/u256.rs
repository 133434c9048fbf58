use uint256::U256;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const LEFT: U256 = U256::from_words([
    0xe1a96ad2, 0xe6499b1e, 0x136e9ef3, 0x03d900de, 0x3d4e8c93, 0x2a98dab1, 0xb0d2941d, 0x0ec8a915,
]);
const RIGHT: U256 = U256::from_words([
    0xc4337d6d, 0x954bb345, 0x8b33686f, 0x2ac4e8ae, 0x132e93df, 0x8f6f05d8, 0x9c92d508, 0x02531c80,
]);

pub fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("u256 add", |b| {
        b.iter(|| black_box(LEFT).wrapping_add(black_box(RIGHT)))
    });
    c.bench_function("u256 sub", |b| {
        b.iter(|| black_box(LEFT).wrapping_sub(black_box(RIGHT)))
    });
    c.bench_function("u256 negate", |b| b.iter(|| black_box(LEFT).wrapping_neg()));
}

pub fn bench_rotate(c: &mut Criterion) {
    c.bench_function("u256 rotate_left 77", |b| {
        b.iter(|| black_box(LEFT).rotate_left(black_box(77)))
    });
    c.bench_function("u256 rotate_right 64", |b| {
        b.iter(|| black_box(LEFT).rotate_right(black_box(64)))
    });
}

pub fn bench_hex(c: &mut Criterion) {
    let hex = LEFT.to_hex();

    c.bench_function("u256 to_hex", |b| b.iter(|| black_box(LEFT).to_hex()));
    c.bench_function("u256 from_hex", |b| {
        b.iter(|| U256::from_hex(black_box(&hex)))
    });
}

criterion_group!(benches, bench_arithmetic, bench_rotate, bench_hex);
criterion_main!(benches);
