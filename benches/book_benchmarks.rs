//! Performance benchmarks for address book listing and birthday lookups.
//!
//! These benchmarks measure:
//! - Paging over books of different sizes
//! - Birthday countdown for a contact in a large book

use chrono::NaiveDate;
use contact_book::operations::{add_birthday_on, add_contact, happy_birthday_on, list_first};
use contact_book::AddressBook;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

/// Build a book of `size` contacts with distinct alphabetic names.
fn create_book(size: usize) -> AddressBook {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut book = AddressBook::new();

    for i in 0..size {
        let suffix: String = format!("{:04}", i)
            .chars()
            .map(|c| (b'a' + c.to_digit(10).unwrap() as u8) as char)
            .collect();
        let name = format!("{}{}", NAMES[i % NAMES.len()], suffix);
        let phone = format!("555{:07}", i);
        add_contact(&mut book, &name, &phone).unwrap();
        add_birthday_on(&mut book, &name, "15-06-1990", today).unwrap();
    }

    book
}

fn bench_list_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_first");

    for size in [10, 100, 1000] {
        let book = create_book(size);
        let count = size.to_string();
        group.bench_with_input(BenchmarkId::from_parameter(size), &count, |b, count| {
            b.iter(|| list_first(black_box(&book), black_box(count)))
        });
    }

    group.finish();
}

fn bench_happy_birthday(c: &mut Criterion) {
    let book = create_book(1000);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    c.bench_function("happy_birthday", |b| {
        b.iter(|| happy_birthday_on(black_box(&book), black_box("Graceaaag"), today))
    });
}

criterion_group!(benches, bench_list_first, bench_happy_birthday);
criterion_main!(benches);
