use serde::{Deserialize, Serialize};

pub mod gradient;
pub mod improved_perlin;
pub mod simplex;
pub mod sine_hash;

pub use gradient::GradientNoise;
pub use improved_perlin::ImprovedPerlinNoise;
pub use simplex::SimplexNoise;
pub use sine_hash::SineHashNoise;

/// Experiment seed, drawn from [1000, 9999]
pub type Seed = i32;

/// Noise function without a notion of seeds. The heightfield generator folds
/// the seed into the sampled coordinates instead.
pub trait NoiseFn2D: Send + Sync {
    fn evaluate(&self, x: f32, y: f32) -> f32;
}

impl<F> NoiseFn2D for F
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    fn evaluate(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Noise function that derives its lattice from the seed it is queried with
pub trait SeededNoiseFn2D: Send + Sync {
    fn evaluate(&self, x: f32, y: f32, seed: Seed) -> f32;
}

pub enum NoiseSource {
    Plain(Box<dyn NoiseFn2D>),
    Seeded(Box<dyn SeededNoiseFn2D>),
}

impl NoiseSource {
    pub fn plain(noise: impl NoiseFn2D + 'static) -> NoiseSource {
        NoiseSource::Plain(Box::new(noise))
    }

    pub fn seeded(noise: impl SeededNoiseFn2D + 'static) -> NoiseSource {
        NoiseSource::Seeded(Box::new(noise))
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, NoiseSource::Seeded(_))
    }
}

/// Config-selectable tag for the built-in noise variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseKind {
    Gradient,
    SineHash,
    ImprovedPerlin,
    Simplex {
        /// Falls back to the generator scale when unset
        #[serde(default)]
        scale: Option<f32>,
    },
}

impl NoiseKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            NoiseKind::Gradient => "Perlin Noise",
            NoiseKind::SineHash => "Sine Hash Noise",
            NoiseKind::ImprovedPerlin => "Improved Perlin",
            NoiseKind::Simplex { .. } => "Simplex Noise",
        }
    }

    /// Nominal output range before amplitude is applied. Variants are not
    /// normalized against each other, so validation outcomes are only
    /// comparable within one variant.
    pub fn range(&self) -> (f32, f32) {
        match self {
            NoiseKind::Gradient => (0.0, 1.0),
            NoiseKind::SineHash => (-1.0, 1.0),
            NoiseKind::ImprovedPerlin => (-1.0, 1.0),
            NoiseKind::Simplex { .. } => (0.0, 256.0 / 255.0),
        }
    }

    pub fn build(&self, generator_scale: f32) -> NoiseSource {
        match *self {
            NoiseKind::Gradient => NoiseSource::plain(GradientNoise::new()),
            NoiseKind::SineHash => NoiseSource::plain(SineHashNoise),
            NoiseKind::ImprovedPerlin => NoiseSource::plain(ImprovedPerlinNoise),
            NoiseKind::Simplex { scale } => {
                NoiseSource::seeded(SimplexNoise::new(scale.unwrap_or(generator_scale)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoiseKind, NoiseSource};

    #[test]
    fn only_simplex_is_seeded() {
        assert!(!NoiseKind::Gradient.build(20.0).is_seeded());
        assert!(!NoiseKind::SineHash.build(20.0).is_seeded());
        assert!(!NoiseKind::ImprovedPerlin.build(20.0).is_seeded());
        assert!(NoiseKind::Simplex { scale: None }.build(20.0).is_seeded());
    }

    #[test]
    fn closures_are_plain_sources() {
        let source = NoiseSource::plain(|x: f32, y: f32| x + y);
        let NoiseSource::Plain(noise) = source else {
            panic!("closure should be a plain source");
        };
        assert_eq!(noise.evaluate(1.0, 2.0), 3.0);
    }

    #[test]
    fn kind_parses_from_tagged_json() {
        let kind: NoiseKind = serde_json::from_str(r#"{"kind":"simplex","scale":10.0}"#).unwrap();
        assert_eq!(kind, NoiseKind::Simplex { scale: Some(10.0) });

        let kind: NoiseKind = serde_json::from_str(r#"{"kind":"sine_hash"}"#).unwrap();
        assert_eq!(kind, NoiseKind::SineHash);

        let kind: NoiseKind = serde_json::from_str(r#"{"kind":"simplex"}"#).unwrap();
        assert_eq!(kind, NoiseKind::Simplex { scale: None });
    }

    #[test]
    fn samples_stay_in_nominal_range() {
        let kinds = [
            NoiseKind::Gradient,
            NoiseKind::SineHash,
            NoiseKind::ImprovedPerlin,
        ];
        for kind in kinds {
            let (min, max) = kind.range();
            let NoiseSource::Plain(noise) = kind.build(20.0) else {
                panic!("{} should be plain", kind.display_name());
            };
            for i in 0..500 {
                let x = i as f32 * 0.173 + 3.1;
                let y = i as f32 * 0.311 - 7.9;
                let v = noise.evaluate(x, y);
                assert!(
                    v >= min - 1e-3 && v <= max + 1e-3,
                    "{} produced {v} at ({x}, {y})",
                    kind.display_name()
                );
            }
        }
    }
}
