use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use people_database::{
    database::{options::default_seed, table::table::PersonTable},
    model::{action::Action, person::PersonData},
};

const TABLE_SIZES: [u64; 3] = [10, 100, 1_000];

fn filled_table(size: u64) -> PersonTable {
    let mut table = PersonTable::from_people(default_seed());

    for i in 0..size {
        let _ = table.apply(Action::Add(PersonData::new(
            &format!("Name {}", i),
            &format!("Last Name {}", i),
        )));
    }

    table
}

pub fn table_add_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_add");

    for size in TABLE_SIZES.iter() {
        group.throughput(Throughput::Elements(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_large_drop(|| filled_table(size));
        });
    }

    group.finish();
}

pub fn table_list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_list");

    for size in TABLE_SIZES.iter() {
        let mut table = filled_table(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| table.apply(Action::List));
        });
    }

    group.finish();
}

criterion_group!(benches, table_add_benchmark, table_list_benchmark);
criterion_main!(benches);
