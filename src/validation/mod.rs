use serde::{Deserialize, Serialize};

use crate::heightfield::Heightfield;

pub mod chunk_corner;
pub mod dense_neighbor;

pub use chunk_corner::{CHUNK_SIZE, ChunkCornerValidator};
pub use dense_neighbor::DenseNeighborValidator;

/// Decides whether a heightfield can be assembled from chunk prefabs.
///
/// Returns `true` only when every checked pair of samples differs by at most
/// `limit`. Implementations stop at the first violation.
pub trait ChunkValidator {
    fn name(&self) -> &'static str;
    fn validate(&self, heightfield: &Heightfield, limit: f32) -> bool;
}

/// The two validation strategies give different verdicts on the same input,
/// so a run has to pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    ChunkCorner,
    #[default]
    DenseNeighbor,
}

impl ValidationPolicy {
    pub fn validator(&self, quantization_step: f32) -> Box<dyn ChunkValidator> {
        match self {
            ValidationPolicy::ChunkCorner => Box::new(ChunkCornerValidator),
            ValidationPolicy::DenseNeighbor => {
                Box::new(DenseNeighborValidator::new(quantization_step))
            }
        }
    }
}

/// True when `a` and `b` are further apart than `limit`
fn exceeds(a: f32, b: f32, limit: f32) -> bool {
    (a - b).abs() > limit
}
