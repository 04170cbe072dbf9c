//! Performance benchmarks for address book queries.
//!
//! These benchmarks measure the whole-book operations under different book sizes:
//! - Weekly birthday scan
//! - Listing all contacts
//! - Name lookup at the end of the book

use chrono::NaiveDate;
use contact_book::models::{AddressBook, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book of `size` contacts with birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .add_birthday(&format!("{:02}.{:02}.1990", day, month))
            .unwrap();
        book.add_record(record).unwrap();
    }
    book
}

fn bench_birthdays_this_week(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    let mut group = c.benchmark_group("birthdays_this_week");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.birthdays_for_week_of(black_box(today))));
        });
    }

    group.finish();
}

fn bench_list_all(c: &mut Criterion) {
    let book = create_test_book(1000);
    c.bench_function("list_all_1000", |b| {
        b.iter(|| black_box(book.list_all()));
    });
}

fn bench_find_last(c: &mut Criterion) {
    let book = create_test_book(1000);
    c.bench_function("find_last_of_1000", |b| {
        b.iter(|| black_box(book.find(black_box("Contact999"))));
    });
}

criterion_group!(benches, bench_birthdays_this_week, bench_list_all, bench_find_last);
criterion_main!(benches);
