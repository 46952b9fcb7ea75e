// crates/explorer-core/benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion};
use explorer_core::filter::{available_regions, filter_countries};
use explorer_core::model::Country;
use std::hint::black_box;

const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

fn catalog(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            let mut c = Country::default();
            c.name.common = format!("Country {i} Land");
            c.cca3 = format!("C{i:02}");
            c.region = REGIONS[i % REGIONS.len()].to_string();
            c.population = (i as u64 + 1) * 1_000;
            c
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let countries = catalog(250);

    c.bench_function("filter_no_criteria", |b| {
        b.iter(|| filter_countries(black_box(&countries), "", ""))
    });
    c.bench_function("filter_query_and_region", |b| {
        b.iter(|| filter_countries(black_box(&countries), black_box("1 la"), "Europe"))
    });
    c.bench_function("available_regions", |b| {
        b.iter(|| available_regions(black_box(&countries)))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
