use log::debug;

use crate::heightfield::Heightfield;

use super::{ChunkValidator, exceeds};

/// Side length of a chunk prefab in samples
pub const CHUNK_SIZE: usize = 8;

/// Compares raw heights across chunk boundaries.
///
/// For every chunk that has a neighbour on both the +x and +y side, each of
/// the 8 samples along its left column is compared with the origin of the
/// +x chunk, and each sample along its bottom row with the origin of the +y
/// chunk. Heights are not quantized.
pub struct ChunkCornerValidator;

impl ChunkValidator for ChunkCornerValidator {
    fn name(&self) -> &'static str {
        "chunk corner"
    }

    fn validate(&self, heightfield: &Heightfield, limit: f32) -> bool {
        let width = heightfield.width();
        let height = heightfield.height();
        assert!(
            width % CHUNK_SIZE == 0 && height % CHUNK_SIZE == 0,
            "{width}x{height} heightfield is not a whole number of {CHUNK_SIZE}x{CHUNK_SIZE} chunks"
        );

        for y in (0..height - CHUNK_SIZE).step_by(CHUNK_SIZE) {
            for x in (0..width - CHUNK_SIZE).step_by(CHUNK_SIZE) {
                let next_x_origin = heightfield[(x + CHUNK_SIZE, y)];
                let next_y_origin = heightfield[(x, y + CHUNK_SIZE)];
                for i in 0..CHUNK_SIZE {
                    if exceeds(heightfield[(x, y + i)], next_x_origin, limit) {
                        debug!("Chunk ({x}, {y}): sample (x, y + {i}) vs +x chunk origin over {limit}");
                        return false;
                    }
                    if exceeds(heightfield[(x + i, y)], next_y_origin, limit) {
                        debug!("Chunk ({x}, {y}): sample (x + {i}, y) vs +y chunk origin over {limit}");
                        return false;
                    }
                }
            }
        }
        true
    }
}
