use std::sync::{Mutex, PoisonError};

use log::trace;
use noise::{NoiseFn, Simplex};

use super::{Seed, SeededNoiseFn2D};

/// Seeded simplex noise sampled on an integer pixel grid.
///
/// Coordinates are truncated to whole pixels and multiplied by `scale`.
/// The raw sample is mapped onto a byte range and divided by 255, so the
/// output sits in roughly [0, 1].
///
/// The permutation table for the most recent seed is cached behind a mutex,
/// so queries for one seed never observe the table of another.
pub struct SimplexNoise {
    scale: f32,
    table: Mutex<Option<(Seed, Simplex)>>,
}

impl SimplexNoise {
    pub fn new(scale: f32) -> SimplexNoise {
        Self {
            scale,
            table: Mutex::new(None),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl SeededNoiseFn2D for SimplexNoise {
    fn evaluate(&self, x: f32, y: f32, seed: Seed) -> f32 {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        if table.as_ref().is_some_and(|(cached, _)| *cached != seed) {
            *table = None;
        }
        let (_, simplex) = table.get_or_insert_with(|| {
            trace!("Building simplex table for seed {seed}");
            (seed, Simplex::new(seed as u32))
        });

        let px = x.trunc() * self.scale;
        let py = y.trunc() * self.scale;
        let pixel = simplex.get([px as f64, py as f64]) * 128.0 + 128.0;
        (pixel / 255.0) as f32
    }
}
