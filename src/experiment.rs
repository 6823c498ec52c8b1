use std::{fmt, time::Instant};

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::ExperimentConfig,
    heightfield::{GeneratorConfig, Heightfield, generate},
    log_err,
    presenters::{Presentation, WorldPresenter},
    sources::{NoiseSource, Seed},
    stats::ExperimentStats,
    validation::ChunkValidator,
};

pub const MIN_SEED: Seed = 1000;
pub const MAX_SEED: Seed = 9999;

/// Draws `count` seeds uniformly from [`MIN_SEED`, `MAX_SEED`]. The same set
/// is meant to be reused for every noise source so runs are comparable.
pub fn generate_seeds<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Seed> {
    info!("Generating {count} seeds...");
    let seeds: Vec<Seed> = (0..count)
        .map(|_| rng.gen_range(MIN_SEED..=MAX_SEED))
        .collect();
    debug!("Seeds: {seeds:?}");
    seeds
}

/// Seeds for a configured run, reproducible when `rng_seed` is set
pub fn seeds_for(config: &ExperimentConfig) -> Vec<Seed> {
    match config.rng_seed {
        Some(rng_seed) => generate_seeds(config.seeds_count, &mut StdRng::seed_from_u64(rng_seed)),
        None => generate_seeds(config.seeds_count, &mut rand::thread_rng()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedResult {
    pub seed: Seed,
    pub passed: bool,
}

/// Validation verdicts of one noise source, in seed order
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    name: String,
    results: Vec<SeedResult>,
}

impl ExperimentReport {
    pub fn new(name: &str) -> ExperimentReport {
        Self {
            name: name.to_string(),
            results: vec![],
        }
    }

    pub fn push(&mut self, result: SeedResult) {
        self.results.push(result);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results(&self) -> &[SeedResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result for {}", self.name)?;
        for result in &self.results {
            write!(f, "\nSeed: {}  Result: {}", result.seed, result.passed)?;
        }
        write!(f, "\nPassed: {}/{}", self.passed(), self.len())
    }
}

/// Generates and validates one heightfield per seed.
///
/// Returns the report together with the heightfield of the last seed in
/// `seeds`; that one is what gets shown to the user.
pub fn run_experiment(
    name: &str,
    source: &NoiseSource,
    generator: &GeneratorConfig,
    validator: &dyn ChunkValidator,
    limit: f32,
    seeds: &[Seed],
) -> (ExperimentReport, Heightfield) {
    assert!(!seeds.is_empty(), "experiment {name} needs at least one seed");
    info!("Starting tests for {name}...");
    let mut report = ExperimentReport::new(name);
    let mut last = None;
    for (i, &seed) in seeds.iter().enumerate() {
        let heightfield = generate(source, generator, seed);
        let passed = validator.validate(&heightfield, limit);
        debug!("{name}: seed {seed} -> {passed} ({})", validator.name());
        report.push(SeedResult { seed, passed });
        // Keep by position, duplicate seed values must not pick an earlier field
        if i == seeds.len() - 1 {
            last = Some(heightfield);
        }
    }
    let Some(last) = last else {
        unreachable!("seed set is non-empty");
    };
    (report, last)
}

/// Runs every configured source against the same seed set and hands each
/// last heightfield to the presenters that accept the source.
pub fn run_suite(
    config: &ExperimentConfig,
    seeds: &[Seed],
    presenters: &mut [&mut dyn WorldPresenter],
) -> Vec<ExperimentReport> {
    let validator = config.policy.validator(config.quantization_step);
    info!(
        "Running {} sources x {} seeds on a {}x{} world with {} validation",
        config.sources.len(),
        seeds.len(),
        config.generator.width,
        config.generator.height,
        validator.name()
    );

    let mut reports = Vec::with_capacity(config.sources.len());
    for (index, source_config) in config.sources.iter().enumerate() {
        let name = source_config.name();
        let source = source_config.kind.build(config.generator.scale);
        let (min, max) = source_config.kind.range();
        info!(
            "{name} samples in [{min:.2}, {max:.2}], heights in [{:.1}, {:.1}]",
            min * config.generator.amplitude,
            max * config.generator.amplitude
        );

        let first = Instant::now();
        let (report, heightfield) = run_experiment(
            name,
            &source,
            &config.generator,
            validator.as_ref(),
            config.chunk_height_limit,
            seeds,
        );
        ExperimentStats::new(&report, first, Instant::now()).log_stats();
        info!("{report}");

        let presentation = Presentation {
            index,
            name,
            generator: &config.generator,
            quantization_step: config.quantization_step,
        };
        for presenter in presenters.iter_mut() {
            if presenter.accepts(source_config) {
                log_err!(
                    presenter.present(&presentation, &heightfield),
                    "Presenting {name} failed: {err}"
                );
            }
        }
        reports.push(report);
    }
    reports
}
