//! Benchmarks for tag splitting, parsing and full validation walks
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::time::Duration;
use tagval::{parse_validators, split_validators, validate, Reflect};

#[derive(Reflect)]
struct Address {
    #[tag(validate = "empty=false")]
    street: String,
    #[tag(validate = "format=alpha_unicode")]
    city: String,
}

#[derive(Reflect)]
struct Customer {
    #[tag(validate = "gte=1")]
    id: u64,
    #[tag(validate = "gte=1&lte=64")]
    name: String,
    #[tag(validate = "empty=false > format=email")]
    emails: Vec<String>,
    #[tag(validate = "[format=alpha] > gte=0&lte=100")]
    scores: HashMap<String, u8>,
    #[tag(validate = "nil=true | nil=false")]
    address: Option<Address>,
    #[tag(validate = "gte=1s&lte=1m")]
    timeout: Duration,
    #[tag(validate = "enum=free,pro,enterprise")]
    plan: String,
}

fn create_customer(emails: usize) -> Customer {
    Customer {
        id: 7,
        name: "Ada Lovelace".to_string(),
        emails: (0..emails)
            .map(|i| format!("user{}@example.com", i))
            .collect(),
        scores: HashMap::from([("chess".to_string(), 90), ("go".to_string(), 75)]),
        address: Some(Address {
            street: "12 Analytical Row".to_string(),
            city: "London".to_string(),
        }),
        timeout: Duration::from_secs(30),
        plan: "pro".to_string(),
    }
}

fn bench_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("expressions");

    let tags = vec![
        ("simple", "gte=1"),
        ("and_or", "gte=1&lte=10|eq=0|enum=20,30,40"),
        ("nested", "empty=false [format=email] > gte=1&lte=64 > nil=false"),
    ];

    for (name, tag) in tags {
        group.bench_with_input(BenchmarkId::new("split", name), tag, |b, tag| {
            b.iter(|| split_validators(black_box(tag)))
        });
        group.bench_with_input(BenchmarkId::new("parse", name), tag, |b, tag| {
            let value = split_validators(tag).map(|s| s.value.into_owned()).unwrap_or_default();
            b.iter(|| parse_validators(black_box(&value)))
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [1usize, 10, 100] {
        let customer = create_customer(size);
        group.bench_with_input(BenchmarkId::new("customer", size), &customer, |b, customer| {
            b.iter(|| validate(black_box(customer)))
        });
    }

    let customers: Vec<Customer> = (0..100).map(|_| create_customer(3)).collect();
    group.bench_function("customer_batch_100", |b| {
        b.iter(|| validate(black_box(&customers)))
    });

    group.finish();
}

criterion_group!(benches, bench_expressions, bench_validation);
criterion_main!(benches);
