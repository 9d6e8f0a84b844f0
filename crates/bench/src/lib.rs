//! Shared criterion settings and dataset generators for the workspace benches.

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sampling settings suited to an input of `size` elements.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size < LARGE_INPUT {
        group.sampling_mode(SamplingMode::Auto);
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    RandomUniform,
    /// Only 16 distinct values.
    FewDistinct,
    /// Ascending with 1% random swaps.
    NearlySorted,
}

pub const ALL_PATTERNS: [Pattern; 3] = [
    Pattern::RandomUniform,
    Pattern::FewDistinct,
    Pattern::NearlySorted,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct => "few_distinct",
            Self::NearlySorted => "nearly_sorted_1pct_swaps",
        }
    }
}

/// Generates `size` values following `pattern`.
///
/// `FewDistinct` and `NearlySorted` draw a pool of random values and then
/// arrange it, so they work for any type the standard distribution covers.
pub fn generate<T>(pattern: Pattern, size: usize, rng: &mut StdRng) -> Vec<T>
where
    T: Copy + PartialOrd,
    StandardUniform: Distribution<T>,
{
    match pattern {
        Pattern::RandomUniform => (0..size).map(|_| rng.random()).collect(),
        Pattern::FewDistinct => {
            let pool: Vec<T> = (0..16).map(|_| rng.random()).collect();
            (0..size).map(|_| pool[rng.random_range(0..pool.len())]).collect()
        }
        Pattern::NearlySorted => {
            let mut data: Vec<T> = (0..size).map(|_| rng.random()).collect();
            data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            if size > 1 {
                for _ in 0..(size / 100).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
    }
}
