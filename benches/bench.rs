//! Criterion benchmarks for the jarow metric engine.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use jarow::prelude::*;
use jarow::typo::table::DEFAULT_TYPO_TABLE;
use std::hint::black_box;

/// Name pairs of the kind record linkage actually compares.
const NAME_PAIRS: &[(&str, &str)] = &[
    ("SHACKLEFORD", "SHACKELFORD"),
    ("DUNNINGHAM", "CUNNIGHAM"),
    ("NICHLESON", "NICHULSON"),
    ("JONES", "JOHNSON"),
    ("MASSEY", "MASSIE"),
    ("ABROMS", "ABRAMS"),
    ("HARDIN", "MARTINEZ"),
    ("ITMAN", "SMITH"),
    ("JERALDINE", "GERALDINE"),
    ("MARTHA", "MARHTA"),
    ("MICHELLE", "MICHAEL"),
    ("JULIES", "JULIUS"),
    ("TANYA", "TONYA"),
    ("DWAYNE", "DUANE"),
    ("SEAN", "SUSAN"),
    ("JON", "JOHN"),
];

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_metrics");
    group.throughput(Throughput::Elements(NAME_PAIRS.len() as u64));

    group.bench_function("jaro", |b| {
        b.iter(|| {
            for &(s1, s2) in NAME_PAIRS {
                let _ = black_box(jaro(black_box(s1), black_box(s2)));
            }
        })
    });

    group.bench_function("jaro_winkler", |b| {
        b.iter(|| {
            for &(s1, s2) in NAME_PAIRS {
                let _ = black_box(jaro_winkler(black_box(s1), black_box(s2)));
            }
        })
    });

    group.bench_function("original", |b| {
        b.iter(|| {
            for &(s1, s2) in NAME_PAIRS {
                let _ = black_box(original(black_box(s1), black_box(s2)));
            }
        })
    });

    group.bench_function("custom", |b| {
        b.iter(|| {
            for &(s1, s2) in NAME_PAIRS {
                let score = custom(
                    black_box(s1),
                    black_box(s2),
                    Some(&DEFAULT_TYPO_TABLE),
                    10.0,
                    Some(0.7),
                    4,
                    0.1,
                    true,
                )
                .unwrap();
                let _ = black_box(score);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
