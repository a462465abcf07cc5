//! Benchmarks for hashing and table operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phonebook::hash::fnv1;
use phonebook::{HashTable, Record};

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Person {}", i)).collect()
}

fn table_benchmarks(c: &mut Criterion) {
    c.bench_function("fnv1 short key", |b| {
        b.iter(|| fnv1(black_box(b"Alice Liddell")))
    });

    let keys = names(10_000);

    c.bench_function("insert 10k records", |b| {
        b.iter(|| {
            let mut table = HashTable::default();
            for key in &keys {
                table.insert(key.as_str(), Record::new(key.as_str(), "555-0100"));
            }
            table.len()
        })
    });

    let mut table = HashTable::default();
    for key in &keys {
        table.insert(key.as_str(), Record::new(key.as_str(), "555-0100"));
    }

    c.bench_function("lookup 10k records", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|key| table.get(black_box(key.as_str())).is_some())
                .count()
        })
    });

    c.bench_function("collision stats 10k records", |b| {
        b.iter(|| table.collision_stats())
    });
}

criterion_group!(benches, table_benchmarks);
criterion_main!(benches);
