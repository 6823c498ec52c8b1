use log::debug;

use crate::{heightfield::Heightfield, quantize::quantize};

use super::{ChunkValidator, exceeds};

/// Compares every cell with its +x, +y and diagonal neighbours after
/// quantizing both heights.
pub struct DenseNeighborValidator {
    step: f32,
}

impl DenseNeighborValidator {
    pub fn new(step: f32) -> DenseNeighborValidator {
        Self { step }
    }
}

impl ChunkValidator for DenseNeighborValidator {
    fn name(&self) -> &'static str {
        "dense neighbor"
    }

    fn validate(&self, heightfield: &Heightfield, limit: f32) -> bool {
        let q = |x: usize, y: usize| quantize(heightfield[(x, y)], self.step);
        for y in 0..heightfield.height() - 1 {
            for x in 0..heightfield.width() - 1 {
                let origin = q(x, y);
                let neighbours = [(x, y + 1), (x + 1, y), (x + 1, y + 1)];
                for (nx, ny) in neighbours {
                    if exceeds(origin, q(nx, ny), limit) {
                        debug!("Cell ({x}, {y}) vs ({nx}, {ny}) over {limit}");
                        return false;
                    }
                }
            }
        }
        true
    }
}
