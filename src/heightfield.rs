use std::ops::{Index, IndexMut};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::sources::{NoiseSource, Seed};

/// Fixed-size grid of elevation samples, stored row by row
#[derive(Debug, Clone, PartialEq)]
pub struct Heightfield {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl Heightfield {
    /// Flat heightfield with every sample at 0
    pub fn new(width: usize, height: usize) -> Heightfield {
        Self::filled(width, height, 0.0)
    }

    pub fn filled(width: usize, height: usize, value: f32) -> Heightfield {
        assert!(
            width > 0 && height > 0,
            "Heightfield dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            samples: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self[(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self[(x, y)] = value;
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Iterates `(x, y, height)` in row order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, h)| (i % self.width, i / self.width, *h))
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) out of bounds for {}x{} heightfield",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl Index<(usize, usize)> for Heightfield {
    type Output = f32;

    fn index(&self, (x, y): (usize, usize)) -> &f32 {
        &self.samples[self.offset(x, y)]
    }
}

impl IndexMut<(usize, usize)> for Heightfield {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f32 {
        let offset = self.offset(x, y);
        &mut self.samples[offset]
    }
}

/// Sampling parameters shared by every noise source of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub scale: f32,
    pub amplitude: f32,
    pub octaves: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            scale: 20.0,
            amplitude: 50.0,
            octaves: 5,
        }
    }
}

/// Samples `source` over the configured grid.
///
/// Octave `i` (starting at 1) samples at `i` times the base frequency of
/// `scale / 2`. The per-cell sum is averaged over the octave count and
/// scaled by the amplitude; octaves are not weighted. Plain sources have the
/// seed added to both coordinates before scaling, seeded sources receive it
/// directly.
pub fn generate(source: &NoiseSource, config: &GeneratorConfig, seed: Seed) -> Heightfield {
    assert!(config.octaves > 0, "octave count must be positive");
    let mut heightfield = Heightfield::new(config.width, config.height);
    let width = config.width as f32;
    let height = config.height as f32;
    let half_scale = config.scale / 2.0;

    for y in 0..config.height {
        for x in 0..config.width {
            let mut sum = 0.0;
            for i in 1..=config.octaves {
                let frequency = half_scale * i as f32;
                let sample = match source {
                    NoiseSource::Plain(noise) => {
                        let fx = (x as f32 + seed as f32) / width * frequency;
                        let fy = (y as f32 + seed as f32) / height * frequency;
                        noise.evaluate(fx, fy)
                    }
                    NoiseSource::Seeded(noise) => {
                        let fx = x as f32 / width * frequency;
                        let fy = y as f32 / height * frequency;
                        noise.evaluate(fx, fy, seed)
                    }
                };
                sum += sample * config.amplitude;
            }
            heightfield[(x, y)] = sum / config.octaves as f32;
        }
    }
    trace!(
        "Generated {}x{} heightfield for seed {seed}",
        config.width, config.height
    );
    heightfield
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::sources::{NoiseKind, NoiseSource, Seed, SeededNoiseFn2D};

    use super::{GeneratorConfig, Heightfield, generate};

    fn config(width: usize, height: usize) -> GeneratorConfig {
        GeneratorConfig {
            width,
            height,
            scale: 1.0,
            amplitude: 1.0,
            octaves: 1,
        }
    }

    #[test]
    fn constant_zero_source_yields_flat_field() {
        let source = NoiseSource::plain(|_: f32, _: f32| 0.0_f32);
        let heightfield = generate(&source, &config(16, 16), 4321);
        assert_eq!(heightfield.len(), 256);
        assert!(heightfield.samples().iter().all(|h| *h == 0.0));
    }

    #[test]
    fn output_matches_requested_dimensions() {
        let source = NoiseKind::ImprovedPerlin.build(20.0);
        for (width, height) in [(8, 8), (16, 8), (24, 40), (400, 400)] {
            let heightfield = generate(&source, &config(width, height), 1000);
            assert_eq!(heightfield.width(), width);
            assert_eq!(heightfield.height(), height);
            assert_eq!(heightfield.len(), width * height);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let config = GeneratorConfig {
            width: 32,
            height: 24,
            ..GeneratorConfig::default()
        };
        for kind in [
            NoiseKind::Gradient,
            NoiseKind::SineHash,
            NoiseKind::ImprovedPerlin,
            NoiseKind::Simplex { scale: None },
        ] {
            let source = kind.build(config.scale);
            let a = generate(&source, &config, 7777);
            let b = generate(&source, &config, 7777);
            let a_bits: Vec<u32> = a.samples().iter().map(|h| h.to_bits()).collect();
            let b_bits: Vec<u32> = b.samples().iter().map(|h| h.to_bits()).collect();
            assert_eq!(a_bits, b_bits, "{} is not deterministic", kind.display_name());
        }
    }

    #[test]
    fn octaves_are_averaged_then_amplified() {
        // Octave i samples x at i * scale / 2 / width; return that coordinate
        let source = NoiseSource::plain(|x: f32, _: f32| x);
        let config = GeneratorConfig {
            width: 8,
            height: 8,
            scale: 2.0,
            amplitude: 10.0,
            octaves: 3,
        };
        let heightfield = generate(&source, &config, 0);
        // x = 4: (0.5 + 1.0 + 1.5) / 3 * 10
        assert!((heightfield.get(4, 0) - 10.0).abs() < 1e-5);
        assert_eq!(heightfield.get(0, 5), 0.0);
    }

    #[test]
    fn plain_sources_fold_seed_into_coordinates() {
        let source = NoiseSource::plain(|x: f32, y: f32| x * 1000.0 + y);
        let config = config(8, 8);
        let heightfield = generate(&source, &config, 8);
        // (0 + 8) / 8 * 0.5 = 0.5 on both axes
        assert!((heightfield.get(0, 0) - 500.5).abs() < 1e-3);
    }

    struct RecordingNoise {
        calls: Arc<AtomicUsize>,
    }

    impl SeededNoiseFn2D for RecordingNoise {
        fn evaluate(&self, x: f32, y: f32, seed: Seed) -> f32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            assert_eq!(seed, 2500);
            x + y
        }
    }

    #[test]
    fn seeded_sources_receive_unshifted_coordinates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = NoiseSource::seeded(RecordingNoise {
            calls: Arc::clone(&calls),
        });
        let config = GeneratorConfig {
            octaves: 2,
            ..config(8, 8)
        };
        let heightfield = generate(&source, &config, 2500);
        assert_eq!(heightfield.get(0, 0), 0.0);
        assert_eq!(calls.load(Ordering::Relaxed), 8 * 8 * 2);
    }

    #[test]
    fn iter_walks_rows() {
        let mut heightfield = Heightfield::new(3, 2);
        heightfield.set(2, 1, 7.0);
        let cells: Vec<(usize, usize, f32)> = heightfield.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], (1, 0, 0.0));
        assert_eq!(cells[5], (2, 1, 7.0));
    }

    #[test]
    #[should_panic(expected = "octave count")]
    fn zero_octaves_fail_fast() {
        let source = NoiseSource::plain(|_: f32, _: f32| 0.0_f32);
        let config = GeneratorConfig {
            octaves: 0,
            ..config(8, 8)
        };
        generate(&source, &config, 1000);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reading_past_row_end_fails_fast() {
        let mut heightfield = Heightfield::new(8, 8);
        heightfield.set(0, 1, 42.0);
        // Would alias (0, 1) without the bounds check
        heightfield.get(8, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn writing_past_row_end_fails_fast() {
        let mut heightfield = Heightfield::new(8, 8);
        heightfield.set(9, 2, 7.0);
    }
}
