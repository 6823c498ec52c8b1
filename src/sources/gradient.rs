use noise::{NoiseFn, Perlin};

use super::NoiseFn2D;

// Lattice is fixed; experiments vary the seed by offsetting coordinates
const TABLE_SEED: u32 = 0;

/// Lattice gradient noise remapped to [0, 1]
pub struct GradientNoise {
    perlin: Perlin,
}

impl GradientNoise {
    pub fn new() -> GradientNoise {
        Self {
            perlin: Perlin::new(TABLE_SEED),
        }
    }
}

impl Default for GradientNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFn2D for GradientNoise {
    fn evaluate(&self, x: f32, y: f32) -> f32 {
        // [-1; 1] -> [0; 1]
        let v = self.perlin.get([x as f64, y as f64]);
        ((v + 1.0) * 0.5) as f32
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::NoiseFn2D;

    use super::GradientNoise;

    #[test]
    fn lattice_points_sit_at_midpoint() {
        let noise = GradientNoise::new();
        for (x, y) in [(0.0, 0.0), (3.0, 7.0), (-2.0, 5.0)] {
            assert!((noise.evaluate(x, y) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn is_continuous() {
        let noise = GradientNoise::new();
        let a = noise.evaluate(1.25, 4.5);
        let b = noise.evaluate(1.2501, 4.5001);
        assert!((a - b).abs() < 1e-3);
    }
}
