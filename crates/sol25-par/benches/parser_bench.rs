//! Parser benchmarks.
//!
//! Run with: `cargo bench --package sol25-par --bench parser_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sol25_lex::Lexer;
use sol25_par::parse;

fn parse_source(source: &str) {
    let tokens = Lexer::new(source).tokenize().expect("fixture must lex cleanly");
    parse(&tokens).expect("fixture must parse cleanly");
}

fn bench_parser_minimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_minimal");

    let source = "class Main : Object { run [ | ] }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("minimal_main", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_methods");

    let source = r#"
        class Counter : Object {
            value [ | ]
            increment: n [ :n | value := value plus: n. ]
            reset [ | value := 0. ]
        }
        class Main : Object { run [ | ] }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("several_methods", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_keyword_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_keyword_chains");

    let source = r#"
        class Main : Object {
            run [ |
                a := x compute: y and: z and: w.
                b := cond ifTrue: 1 ifFalse: 2.
                c := 1 between: 0 and: 10.
            ]
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("keyword_chains", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_blocks");

    let source = r#"
        class Main : Object {
            run [ |
                adder := [ :a :b | c := a plus: b. ].
                x := adder value: 1 value: 2.
            ]
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_blocks", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_many_classes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_many_classes");

    let mut source = String::new();
    for i in 0..50 {
        source.push_str(&format!("class C{i} : Object {{ foo [ | ] }}\n"));
    }
    source.push_str("class Main : Object { run [ | ] }\n");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fifty_classes", |b| b.iter(|| parse_source(black_box(&source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_minimal,
    bench_parser_methods,
    bench_parser_keyword_chains,
    bench_parser_blocks,
    bench_parser_many_classes
);
criterion_main!(benches);
