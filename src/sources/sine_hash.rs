use super::NoiseFn2D;

const HASH_DIRECTION: (f32, f32) = (12.9898, 78.233);
const HASH_MAGNITUDE: f32 = 43758.5453;

/// Shader-style hash of the coordinate pair. Fast and deterministic, but not
/// smooth: neighbouring samples are uncorrelated.
pub struct SineHashNoise;

impl NoiseFn2D for SineHashNoise {
    fn evaluate(&self, x: f32, y: f32) -> f32 {
        let dot = x * HASH_DIRECTION.0 + y * HASH_DIRECTION.1;
        let hashed = dot.sin() * HASH_MAGNITUDE;
        // GLSL fract, always in [0; 1)
        let fract = hashed - hashed.floor();
        2.0 * fract - 1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::NoiseFn2D;

    use super::SineHashNoise;

    #[test]
    fn origin_maps_to_lower_bound() {
        // sin(0) == 0 -> fract 0 -> -1
        assert_eq!(SineHashNoise.evaluate(0.0, 0.0), -1.0);
    }

    #[test]
    fn is_deterministic() {
        for i in 0..100 {
            let x = i as f32 * 0.37;
            let y = i as f32 * -1.91;
            assert_eq!(
                SineHashNoise.evaluate(x, y).to_bits(),
                SineHashNoise.evaluate(x, y).to_bits()
            );
        }
    }

    #[test]
    fn negative_coordinates_stay_in_range() {
        for i in 1..200 {
            let v = SineHashNoise.evaluate(-(i as f32) * 0.7, -(i as f32) * 1.3);
            assert!((-1.0..=1.0).contains(&v), "{v}");
        }
    }
}
