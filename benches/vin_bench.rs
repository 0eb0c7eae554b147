use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vin_decode::{decode, is_valid, validate, wmi, year};

const VALID: &str = "1HGCM82633A004352";
const BAD_CHECKSUM: &str = "5YJSA1E14FF101183";

fn batch_of_1000() -> Vec<String> {
    (0..1000)
        .map(|n| format!("1HGCM8263{}A{n:06}", ['3', '4', '5', 'Y'][n % 4]))
        .collect()
}

fn bench_is_valid(c: &mut Criterion) {
    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(is_valid(black_box(VALID))));
    });
    c.bench_function("validate_checksum_error", |b| {
        b.iter(|| black_box(validate(black_box(BAD_CHECKSUM))));
    });
}

fn bench_is_valid_batch(c: &mut Criterion) {
    let vins = batch_of_1000();
    c.bench_function("is_valid_1000", |b| {
        b.iter(|| vins.iter().filter(|v| is_valid(black_box(v))).count());
    });
}

fn bench_world_manufacturer(c: &mut Criterion) {
    c.bench_function("world_manufacturer_two_char", |b| {
        b.iter(|| black_box(wmi::world_manufacturer(black_box(VALID))));
    });
    c.bench_function("world_manufacturer_three_char", |b| {
        b.iter(|| black_box(wmi::world_manufacturer(black_box(BAD_CHECKSUM))));
    });
}

fn bench_model_year(c: &mut Criterion) {
    c.bench_function("model_year", |b| {
        b.iter(|| black_box(year::model_year(black_box(VALID), black_box(Some(1980)))));
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| {
        b.iter(|| black_box(decode::decode_at(black_box(VALID), None, 2024)));
    });
}

criterion_group!(
    benches,
    bench_is_valid,
    bench_is_valid_batch,
    bench_world_manufacturer,
    bench_model_year,
    bench_decode,
);
criterion_main!(benches);
