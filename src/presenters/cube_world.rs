use std::{error::Error, fs, path::Path};

use glam::Vec3;
use log::info;
use serde::Serialize;

use crate::{config::SourceConfig, heightfield::Heightfield, quantize::quantize};

use super::{Presentation, WorldPresenter};

// Gap between the world origin and the first cube world, in cube units
const MARGIN: f32 = 10.0;

/// Cube positions for one experiment, one cube per heightfield cell
#[derive(Debug, Clone, Serialize)]
pub struct CubeWorld {
    pub name: String,
    pub origin: Vec3,
    pub cubes: Vec<Vec3>,
}

/// Lays heightfields out as cube worlds.
///
/// Each cube sits at its quantized height, so the layout matches exactly what
/// was validated. Successive worlds are shifted diagonally so they never
/// overlap.
pub struct CubeWorldPresenter {
    unit: Vec3,
    worlds: Vec<CubeWorld>,
}

impl CubeWorldPresenter {
    pub fn new(unit: Vec3) -> CubeWorldPresenter {
        Self {
            unit,
            worlds: vec![],
        }
    }

    pub fn worlds(&self) -> &[CubeWorld] {
        &self.worlds
    }

    pub fn layout(&self, name: &str, heightfield: &Heightfield, step: f32) -> CubeWorld {
        let k = self.worlds.len() as f32;
        let origin = Vec3::new(
            heightfield.width() as f32 * self.unit.x * k + MARGIN * self.unit.x,
            0.0,
            heightfield.height() as f32 * self.unit.z * k + MARGIN * self.unit.z,
        );
        let cubes = heightfield
            .iter()
            .map(|(x, y, h)| origin + Vec3::new(x as f32, quantize(h, step), y as f32) * self.unit)
            .collect();
        CubeWorld {
            name: name.to_string(),
            origin,
            cubes,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string(&self.worlds)?;
        fs::write(path, json)?;
        info!("Wrote {} cube worlds to {}", self.worlds.len(), path.display());
        Ok(())
    }
}

impl WorldPresenter for CubeWorldPresenter {
    fn accepts(&self, source: &SourceConfig) -> bool {
        source.cube_world
    }

    fn present(
        &mut self,
        presentation: &Presentation,
        heightfield: &Heightfield,
    ) -> Result<(), Box<dyn Error>> {
        info!("Started generating cube world for {}", presentation.name);
        let world = self.layout(presentation.name, heightfield, presentation.quantization_step);
        info!(
            "Cube world {} has {} cubes at {}",
            world.name,
            world.cubes.len(),
            world.origin
        );
        self.worlds.push(world);
        Ok(())
    }
}
