use autobahn_bigint::bigint::{Bigint, Sign, binary_long_divide, word_long_divide};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand(words: usize) -> Bigint {
    let hex: String = "ABCD1234".repeat(words);
    Bigint::parse_hex(&hex, Sign::Positive)
}

pub fn bench_divide(c: &mut Criterion) {
    for words in [4usize, 16, 64] {
        let dividend = operand(words);
        let divisor = operand(words / 2);

        c.bench_function(&format!("word_long_divide {words} words"), |b| {
            b.iter(|| word_long_divide(black_box(&dividend), black_box(&divisor)))
        });
    }

    // binary_long_divide only at small width: it is O(bit_length) and not
    // meant to be competitive, only a correctness reference.
    let dividend = operand(4);
    let divisor = operand(2);
    c.bench_function("binary_long_divide 4 words", |b| {
        b.iter(|| binary_long_divide(black_box(&dividend), black_box(&divisor)))
    });
}

criterion_group!(benches, bench_divide);
criterion_main!(benches);
