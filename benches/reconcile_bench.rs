use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use fapiao::core::*;

fn bench_tax_id(c: &mut Criterion) {
    c.bench_function("is_valid_tax_id", |b| {
        b.iter(|| is_valid_tax_id(black_box("22099131")))
    });

    c.bench_function("is_valid_tax_id_invalid", |b| {
        b.iter(|| is_valid_tax_id(black_box("22099132")))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let fields = FieldValues {
        price: 1_234_567,
        tax_rate: dec!(5),
        total: 0,
    };
    c.bench_function("reconcile_price_edited", |b| {
        b.iter(|| reconcile(EditedField::Price, black_box(&fields)))
    });

    let fields = FieldValues {
        price: 0,
        tax_rate: dec!(5),
        total: 1_296_295,
    };
    c.bench_function("reconcile_total_edited", |b| {
        b.iter(|| reconcile(EditedField::Total, black_box(&fields)))
    });

    c.bench_function("reconcile_raw", |b| {
        b.iter(|| {
            reconcile_raw(
                EditedField::Price,
                black_box("1,234,567"),
                black_box("5"),
                black_box(""),
            )
        })
    });
}

fn bench_numeral(c: &mut Criterion) {
    c.bench_function("to_chinese_numeral_9_digits", |b| {
        b.iter(|| to_chinese_numeral(black_box(987_654_321)))
    });

    c.bench_function("numeral_string", |b| {
        b.iter(|| numeral_string(black_box(10_010_000)))
    });
}

fn bench_grouping(c: &mut Criterion) {
    c.bench_function("group_digits_with_caret", |b| {
        b.iter(|| group_digits_with_caret(black_box("123456789012"), black_box(6)))
    });
}

criterion_group!(
    benches,
    bench_tax_id,
    bench_reconcile,
    bench_numeral,
    bench_grouping
);
criterion_main!(benches);
