use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use nano_explore::explore::{Explorer, Selection};
use nano_explore::processing::{drop_nulls, filter_range, value_counts};
use nano_explore::types::{ClosedRange, DataSet, DataType, Field, Schema, Value};

const TYPES: &[&str] = &["Espresso", "Filter", "Latte", "Cappuccino", "Americano", "Cold Brew"];

fn survey(n: usize) -> DataSet {
    let schema = Schema::new(vec![
        Field::new("cups_per_day", DataType::Int64),
        Field::new("coffee_type", DataType::Utf8),
    ]);
    let rows = (0..n)
        .map(|i| {
            let cups = if i % 17 == 0 {
                Value::Null
            } else {
                Value::Int64((i % 7) as i64)
            };
            vec![cups, Value::from(TYPES[i % TYPES.len()])]
        })
        .collect();
    DataSet::new(schema, rows)
}

fn bench_pipeline(c: &mut Criterion) {
    let ds = survey(10_000);
    let cleaned = drop_nulls(&ds);
    let range = ClosedRange::new(2, 4);

    c.bench_function("drop_nulls_10k", |b| b.iter(|| drop_nulls(black_box(&ds))));
    c.bench_function("filter_range_10k", |b| {
        b.iter(|| filter_range(black_box(&cleaned), "cups_per_day", range).unwrap())
    });
    c.bench_function("value_counts_10k", |b| {
        b.iter(|| value_counts(black_box(&cleaned), "coffee_type").unwrap())
    });

    let explorer = Explorer::new(ds.clone(), "cups_per_day").unwrap();
    let selection = Selection::new("coffee_type").with_range(range);
    c.bench_function("explore_10k", |b| {
        b.iter(|| explorer.explore(black_box(&selection)).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
