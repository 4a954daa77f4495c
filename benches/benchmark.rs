use criterion::{Criterion, criterion_group, criterion_main};
use phonebook::{PhoneBook, Record};
use std::hint::black_box;

const ENTRY_COUNTS: &[(&str, usize)] = &[("1k", 1_000), ("10k", 10_000)];

/// Deterministic, well-spread names (multiplicative hash of the index), so
/// the tree stays reasonably shallow without a random number generator.
fn entries(count: usize) -> Vec<(String, String, String)> {
    (0..count)
        .map(|i| {
            let mixed = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            (
                format!("L{:016x}", mixed),
                format!("F{}", i % 97),
                format!("555-{:04}", i % 10_000),
            )
        })
        .collect()
}

fn build(entries: &[(String, String, String)]) -> PhoneBook {
    let mut book = PhoneBook::new();
    for (last, first, phone) in entries {
        book.insert(Record::new(last, first, phone)).unwrap();
    }
    book
}

fn book_operations(c: &mut Criterion) {
    for (name, count) in ENTRY_COUNTS {
        let entries = entries(*count);
        let book = build(&entries);

        c.bench_function(&format!("insert {name}"), |b| {
            b.iter(|| build(black_box(&entries)));
        });

        c.bench_function(&format!("find {name}"), |b| {
            b.iter(|| {
                for (last, first, _) in &entries {
                    black_box(book.find(last, first));
                }
            });
        });

        c.bench_function(&format!("delete {name}"), |b| {
            b.iter_batched(
                || build(&entries),
                |mut book| {
                    for (last, first, _) in &entries {
                        book.delete(last, first).unwrap();
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
}

fn store_format(c: &mut Criterion) {
    for (name, count) in ENTRY_COUNTS {
        let book = build(&entries(*count));
        let lines = book.serialize();

        c.bench_function(&format!("serialize {name}"), |b| {
            b.iter(|| black_box(book.serialize()));
        });

        c.bench_function(&format!("deserialize {name}"), |b| {
            b.iter(|| {
                let mut restored = PhoneBook::new();
                black_box(restored.deserialize(&lines))
            });
        });
    }
}

criterion_group!(regression, book_operations);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = store_format
}
criterion_main!(regression, reporting);
