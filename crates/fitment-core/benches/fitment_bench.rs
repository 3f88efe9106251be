//! Criterion benchmarks for fitment-core.
//!
//! Everything here runs in memory on synthetic catalog rows; no fixtures or
//! I/O are involved, so the numbers isolate the parsing and tree-folding
//! costs themselves.
//!
//! ## Benchmark groups
//!
//! 1. **normalization** — Raw descriptor cleanup and truncation.
//! 2. **parsing** — Signature extraction from single descriptors.
//! 3. **tree_building** — Sequential vs parallel catalog folds at several sizes.
//! 4. **matching** — Strict descriptor matching and the engine-code fallback.
//!
//! ## Running
//!
//! ```sh
//! cargo bench --manifest-path crates/fitment-core/Cargo.toml
//! # Run only the tree-building group:
//! cargo bench --manifest-path crates/fitment-core/Cargo.toml -- tree_building
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fitment_core::hierarchy::{build_tree, build_tree_parallel, build_tree_report};
use fitment_core::matcher::{matches_vehicle, resolve_selection};
use fitment_core::models::SelectedVehicle;
use fitment_core::parser::normalize::normalize_descriptor;
use fitment_core::parser::signature::{parse_descriptor, preview_descriptors};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build `n` synthetic catalog rows in the shapes real part descriptions use:
/// mixed Cyrillic and Latin spellings, decimal commas, valve spellings, and
/// the occasional row with no vehicle data at all.
fn synthetic_descriptors(n: usize) -> Vec<String> {
    const FAMILIES: &[&str] = &[
        "ДАСТЕР",
        "Duster",
        "Логан",
        "LOGAN II",
        "Сандеро Степвей",
        "Меган 3",
        "Каптюр",
        "Сценик II",
        "ESPACE IV",
        "Клио",
    ];
    const VOLUMES: &[&str] = &["1.4", "1,6", "1.6", "2.0", "1.5"];
    const VALVES: &[&str] = &["16V", "16 КЛ", "8V", "8 КЛ", "16 V"];
    const ENGINES: &[&str] = &["K4M", "K7J", "F4R", "H4M", "K9K", "D4F"];
    const YEARS: &[&str] = &[
        "2010-2015",
        "2012 - 2017",
        "2005-2014",
        "2014-н.в.",
        "1998-2004",
    ];

    (0..n)
        .map(|i| {
            // Every ninth row carries no vehicle data, like the accessory
            // rows that show up in real part feeds.
            if i % 9 == 8 {
                return "масляный фильтр оригинальное качество".to_string();
            }
            let family = FAMILIES[i % FAMILIES.len()];
            let volume = VOLUMES[i % VOLUMES.len()];
            let valves = VALVES[i % VALVES.len()];
            let engine = ENGINES[i % ENGINES.len()];
            let years = YEARS[i % YEARS.len()];
            match i % 4 {
                0 => format!("{family} ({years}) {volume} {valves} {engine}"),
                2 => format!("Рено {family} {volume}/{valves} {engine} {years} 102 л.с."),
                _ => format!("{family} {volume} {valves} {engine} {years}"),
            }
        })
        .collect()
}

/// Catalog rows for vehicles other than the benchmark selection, so that
/// miss-path benchmarks scan the whole slice without an early return.
fn foreign_descriptors(n: usize) -> Vec<String> {
    const FAMILIES: &[&str] = &["Логан", "Сандеро", "Меган 3", "Клио V", "ESPACE IV"];
    const YEARS: &[&str] = &["2005-2014", "2014-н.в.", "1998-2004"];

    (0..n)
        .map(|i| {
            let family = FAMILIES[i % FAMILIES.len()];
            let years = YEARS[i % YEARS.len()];
            format!("{family} 1.4 8V K7J {years}")
        })
        .collect()
}

/// Selection used by the matching benchmarks.
fn duster_selection() -> SelectedVehicle {
    SelectedVehicle {
        model: "Duster".to_string(),
        generation: "2010-2015".to_string(),
        modification: "1.6 16V K4M".to_string(),
        engine_code: "K4M".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Benchmark: Descriptor normalization
// ---------------------------------------------------------------------------

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    group.bench_function("short_latin", |b| {
        b.iter(|| normalize_descriptor(black_box("Duster 1.6 16V K4M 2010-2015")));
    });

    group.bench_function("cyrillic_with_punctuation", |b| {
        b.iter(|| normalize_descriptor(black_box("Рено Дастер (2010-2015), 1,6/16 КЛ; K4M")));
    });

    group.bench_function("oversized_input", |b| {
        // Repeats push the row well past the length cap, so this measures
        // the truncation path too.
        let long = "Дастер 1.6 16V K4M 2010-2015 ".repeat(40);
        b.iter(|| normalize_descriptor(black_box(&long)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Signature parsing
// ---------------------------------------------------------------------------

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("complete_cyrillic", |b| {
        b.iter(|| parse_descriptor(black_box("Дастер 1.6 16V K4M 2010-2015 102 л.с.")));
    });

    group.bench_function("complete_latin", |b| {
        b.iter(|| parse_descriptor(black_box("RENAULT LOGAN 1,6 8 КЛ K7M 2014 - н.в.")));
    });

    group.bench_function("roman_generation", |b| {
        b.iter(|| parse_descriptor(black_box("Сценик II 1.5 DCI K9K 2003-2009")));
    });

    group.bench_function("no_vehicle_data", |b| {
        b.iter(|| parse_descriptor(black_box("масляный фильтр оригинальное качество")));
    });

    group.bench_function("preview_batch_100", |b| {
        let rows = synthetic_descriptors(100);
        b.iter(|| preview_descriptors(black_box(&rows)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Tree building
// ---------------------------------------------------------------------------

fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_building");
    group.measurement_time(std::time::Duration::from_secs(10));

    for &rows in &[100usize, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("sequential", rows), &rows, |b, &rows| {
            let descriptors = synthetic_descriptors(rows);
            b.iter(|| {
                let tree = build_tree(descriptors.iter().map(String::as_str));
                black_box(tree);
            });
        });
    }

    for &rows in &[100usize, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("parallel_4", rows), &rows, |b, &rows| {
            let descriptors = synthetic_descriptors(rows);
            b.iter(|| {
                let tree = build_tree_parallel(&descriptors, 4);
                black_box(tree);
            });
        });
    }

    // Worker sweep at a fixed catalog size, to see where the rayon fan-out
    // stops paying for itself.
    for &workers in &[1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("workers_5000", workers),
            &workers,
            |b, &workers| {
                let descriptors = synthetic_descriptors(5_000);
                b.iter(|| {
                    let tree = build_tree_parallel(&descriptors, workers);
                    black_box(tree);
                });
            },
        );
    }

    group.bench_function("report_sink_1000", |b| {
        let descriptors = synthetic_descriptors(1_000);
        b.iter(|| {
            let mut dropped = 0usize;
            let (tree, stats) =
                build_tree_report(descriptors.iter().map(String::as_str), |_, _| dropped += 1);
            black_box((tree, stats, dropped));
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Matching and selection
// ---------------------------------------------------------------------------

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    group.bench_function("strict_hit_first", |b| {
        let descriptors = vec!["ДАСТЕР 1,6 16 КЛ K4M 2010 - 2015".to_string()];
        let selected = duster_selection();
        b.iter(|| matches_vehicle(black_box(&selected), black_box(&descriptors), &[]));
    });

    group.bench_function("strict_hit_last_of_50", |b| {
        let mut descriptors = foreign_descriptors(49);
        descriptors.push("ДАСТЕР 1,6 16 КЛ K4M 2010 - 2015".to_string());
        let selected = duster_selection();
        b.iter(|| matches_vehicle(black_box(&selected), black_box(&descriptors), &[]));
    });

    group.bench_function("engine_code_fallback", |b| {
        let descriptors = vec![
            "масляный фильтр".to_string(),
            "прокладка клапанной крышки".to_string(),
        ];
        let codes = vec!["K7M".to_string(), "K4M".to_string()];
        let selected = duster_selection();
        b.iter(|| {
            matches_vehicle(
                black_box(&selected),
                black_box(&descriptors),
                black_box(&codes),
            )
        });
    });

    group.bench_function("miss_all_foreign", |b| {
        let descriptors = foreign_descriptors(50);
        let selected = duster_selection();
        b.iter(|| matches_vehicle(black_box(&selected), black_box(&descriptors), &[]));
    });

    group.bench_function("resolve_selection", |b| {
        let tree = build_tree([
            "Дастер 1.6 16V K4M 2010-2015",
            "Дастер 2.0 16V F4R 2010-2015",
            "Логан 1,6 8 КЛ K7M 2014-н.в.",
        ]);
        b.iter(|| {
            let selected =
                resolve_selection(black_box(&tree), "Duster", "2010-2015", "1.6 16V K4M").unwrap();
            black_box(selected);
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register all benchmark groups
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_normalization,
    bench_parsing,
    bench_tree_building,
    bench_matching,
);
criterion_main!(benches);
