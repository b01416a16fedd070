//! Benchmarks for the part definition parser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use partcfg::parser::{encode_part, parse_part};

/// A small, realistic definition.
const SMALL: &str = "\
name = Mk1 Pod
module = CommandPod
author = dev
title = Command Pod Mk1
description = Cozy for one.
mass = 0.8
crashTolerance = 14
maxTemp = 3400
attachRules = 1,0,1,0,1
node0 = node, 0, -0.3, 0, 0, -1, 0

";

/// Generate a definition with many nodes and extension lines.
fn large_source() -> String {
    let mut source = String::from("name = kitchen-sink\nmodule = AdvSASModule\nmass = 2.5\n");
    for i in 0..64 {
        source.push_str(&format!("node{} = node, 0, {}, 0, 0, 1, 0\n", i, i));
    }
    for i in 0..64 {
        source.push_str(&format!("extra{} = {}\n", i, i * 3));
    }
    source.push_str("Ki = 0.5\nKp = 0.2\nKd = 0.1\n\n");
    source
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let large = large_source();

    group.bench_function("parse_part_small", |b| {
        b.iter(|| parse_part(black_box(SMALL)).unwrap())
    });

    group.bench_function("parse_part_large", |b| {
        b.iter(|| parse_part(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let small = parse_part(SMALL).unwrap();
    let large = parse_part(&large_source()).unwrap();

    group.bench_function("encode_part_small", |b| {
        b.iter(|| encode_part(black_box(&small)))
    });

    group.bench_function("encode_part_large", |b| {
        b.iter(|| encode_part(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_encoding);
criterion_main!(benches);
