//! Sensor package generation with athlete parameters.

use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use workouts::{ActivityKind, config::Package};

/// Configuration for package generation.
#[derive(Debug, Clone)]
pub struct PackageGenConfig {
    /// Mean athlete weight in kilograms.
    pub weight_mean: f64,
    /// Standard deviation of weight.
    pub weight_std: f64,
    /// Mean athlete height in centimeters.
    pub height_mean: f64,
    /// Standard deviation of height.
    pub height_std: f64,
    /// Workout duration in hours.
    pub duration_h: Range<f64>,
    /// Running steps per hour.
    pub running_cadence: Range<f64>,
    /// Walking steps per hour.
    pub walking_cadence: Range<f64>,
    /// Swimming strokes per hour.
    pub stroke_rate: Range<f64>,
    /// Pool lengths to choose from, in meters.
    pub pool_lengths: Vec<f64>,
    /// Laps per hour.
    pub laps_per_hour: Range<f64>,
}

impl Default for PackageGenConfig {
    fn default() -> Self {
        Self {
            weight_mean: 75.0,
            weight_std: 12.0,
            height_mean: 175.0,
            height_std: 9.0,
            duration_h: 0.25..2.5,
            running_cadence: 9000.0..16000.0,
            walking_cadence: 5000.0..9000.0,
            stroke_rate: 500.0..1500.0,
            pool_lengths: vec![25.0, 50.0],
            laps_per_hour: 20.0..80.0,
        }
    }
}

/// Generates valid and deliberately broken sensor packages.
pub struct PackageGenerator {
    config: PackageGenConfig,
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PackageGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PackageGenConfig) -> Self {
        Self { config }
    }

    fn sample_clamped(mean: f64, std: f64, min: f64, max: f64, rng: &mut impl Rng) -> f64 {
        Normal::new(mean, std)
            .map(|normal| normal.sample(rng))
            .unwrap_or(mean)
            .clamp(min, max)
    }

    fn numbers(&self, kind: ActivityKind, rng: &mut impl Rng) -> Vec<f64> {
        let cfg = &self.config;
        let duration = rng.gen_range(cfg.duration_h.clone());
        let weight = Self::sample_clamped(cfg.weight_mean, cfg.weight_std, 40.0, 150.0, rng);

        match kind {
            ActivityKind::Running => {
                let steps = (rng.gen_range(cfg.running_cadence.clone()) * duration).round();
                vec![steps, duration, weight]
            }
            ActivityKind::Walking => {
                let steps = (rng.gen_range(cfg.walking_cadence.clone()) * duration).round();
                let height =
                    Self::sample_clamped(cfg.height_mean, cfg.height_std, 140.0, 210.0, rng);
                vec![steps, duration, weight, height]
            }
            ActivityKind::Swimming => {
                let strokes = (rng.gen_range(cfg.stroke_rate.clone()) * duration).round();
                let pool = cfg.pool_lengths.choose(rng).copied().unwrap_or(25.0);
                let laps = (rng.gen_range(cfg.laps_per_hour.clone()) * duration).round();
                vec![strokes, duration, weight, pool, laps]
            }
        }
    }

    /// Generates a single valid package for `kind`.
    pub fn generate(&self, kind: ActivityKind, rng: &mut impl Rng) -> Package {
        Package::new(kind.code(), &self.numbers(kind, rng))
    }

    /// Generates packages for randomly chosen kinds.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<Package> {
        debug!("Generating {count} packages");
        (0..count)
            .map(|_| {
                let kind = *ActivityKind::ALL.choose(rng).unwrap_or(&ActivityKind::Running);
                self.generate(kind, rng)
            })
            .collect()
    }

    /// A package whose duration is zero or negative.
    pub fn invalid_duration(&self, kind: ActivityKind, rng: &mut impl Rng) -> Package {
        let mut numbers = self.numbers(kind, rng);
        numbers[1] = -rng.gen_range(0.0..3.0);
        Package::new(kind.code(), &numbers)
    }

    /// A package with one field too many or too few for `kind`.
    pub fn wrong_arity(&self, kind: ActivityKind, rng: &mut impl Rng) -> Package {
        let mut numbers = self.numbers(kind, rng);
        if rng.gen_bool(0.5) {
            numbers.pop();
        } else {
            numbers.push(1.0);
        }
        Package::new(kind.code(), &numbers)
    }
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes packages in the form the `workouts` binary reads from `WORKOUTS_PACKAGES`.
pub fn to_env_json(packages: &[Package]) -> serde_json::Result<String> {
    serde_json::to_string(packages)
}
