//! Benchmarks for the symbolic name registry.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use elf_format::names::{code_for, name_for, Category};

fn bench_name_lookups(c: &mut Criterion) {
    c.bench_function("name_for_machine", |b| {
        b.iter(|| name_for(Category::Machine, black_box(62)))
    });

    c.bench_function("name_for_unknown_machine", |b| {
        b.iter(|| name_for(Category::Machine, black_box(0xffff)))
    });

    c.bench_function("code_for_dynamic_tag", |b| {
        b.iter(|| code_for(Category::DynamicTag, black_box("DT_JMPREL")))
    });
}

criterion_group!(benches, bench_name_lookups);
criterion_main!(benches);
