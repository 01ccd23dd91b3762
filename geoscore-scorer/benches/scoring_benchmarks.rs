//! Criterion benchmarks for location scoring.
//!
//! Measures end-to-end scoring time across neighbourhood sizes (20, 60, 200
//! nearby places) to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package geoscore-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geoscore_core::test_support::poi_at_bearing;
use geoscore_core::{LatLng, PointOfInterest};
use geoscore_scorer::score_location;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic neighbourhood generation.
const BENCHMARK_SEED: u64 = 42;

/// Neighbourhood sizes to benchmark.
const NEIGHBOURHOOD_SIZES: &[u32] = &[20, 60, 200];

/// Search radius used by upstream place lookups, in metres.
const SEARCH_RADIUS_METRES: f64 = 2_000.0;

const TAGS: &[&str] = &[
    "restaurant",
    "cafe",
    "store",
    "bar",
    "night_club",
    "police",
    "hospital",
    "school",
    "shopping_mall",
    "bank",
];

const ORIGIN: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};

/// Scatter `count` places uniformly by bearing and distance around the origin.
fn generate_neighbourhood(count: u32, seed: u64) -> Vec<PointOfInterest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let bearing = rng.gen_range(0.0..360.0);
            let distance = rng.gen_range(0.0..SEARCH_RADIUS_METRES);
            let tag = TAGS
                .get(rng.gen_range(0..TAGS.len()))
                .copied()
                .unwrap_or("store");
            poi_at_bearing(ORIGIN, bearing, distance, &[tag])
        })
        .collect()
}

fn transit_stations() -> Vec<PointOfInterest> {
    ["bus_station", "train_station", "subway_station"]
        .into_iter()
        .map(|tag| PointOfInterest::unlocated(tag, [tag]))
        .collect()
}

fn bench_score_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_location");
    let transit = transit_stations();

    for &size in NEIGHBOURHOOD_SIZES {
        let nearby = generate_neighbourhood(size, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("places", size), &nearby, |b, nearby| {
            b.iter(|| {
                black_box(score_location(
                    black_box(ORIGIN),
                    black_box(nearby),
                    black_box(&transit),
                    Some("food_service"),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_location);
criterion_main!(benches);
