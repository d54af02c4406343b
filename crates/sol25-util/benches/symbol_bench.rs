//! Symbol interning benchmarks.
//!
//! Run with: `cargo bench --package sol25-util --bench symbol_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sol25_util::Symbol;

fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(1));

    group.bench_function("intern_new_string", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            Symbol::intern(&format!("new_string_{counter}"))
        })
    });

    group.bench_function("intern_existing_string", |b| {
        let _sym = Symbol::intern("plus:");
        b.iter(|| black_box(Symbol::intern("plus:")))
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    group.throughput(Throughput::Elements(1));

    let a = Symbol::intern("between:and:");
    let b_sym = Symbol::intern("between:and:");
    let c_sym = Symbol::intern("ifTrue:ifFalse:");

    group.bench_function("symbol_eq_symbol", |b| {
        b.iter(|| {
            black_box(a == b_sym);
            black_box(a == c_sym);
        })
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    let sym = Symbol::intern("concat:");
    group.bench_function("as_str", |b| b.iter(|| black_box(sym.as_str())));

    group.finish();
}

fn bench_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("varying_sizes");

    for &size in &[1usize, 10, 100, 1000] {
        let string = "a".repeat(size);
        group.bench_with_input(BenchmarkId::new("intern", size), &string, |b, s| {
            b.iter(|| black_box(Symbol::intern(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intern, bench_comparison, bench_resolve, bench_varying_sizes);
criterion_main!(benches);
