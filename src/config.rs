use std::{error::Error, fs, path::Path};

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    heightfield::GeneratorConfig,
    quantize::DEFAULT_STEP,
    sources::NoiseKind,
    validation::{CHUNK_SIZE, ValidationPolicy},
};

/// One noise source to evaluate, and what to do with its last heightfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(flatten)]
    pub kind: NoiseKind,
    /// Overrides the variant's display name in reports
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub render_texture: bool,
    #[serde(default)]
    pub cube_world: bool,
}

fn default_true() -> bool {
    true
}

impl SourceConfig {
    pub fn new(kind: NoiseKind) -> SourceConfig {
        Self {
            kind,
            name: None,
            render_texture: true,
            cube_world: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    pub seeds_count: usize,
    /// Fixes the seed set between runs when present
    pub rng_seed: Option<u64>,
    pub chunk_height_limit: f32,
    pub quantization_step: f32,
    pub policy: ValidationPolicy,
    pub sources: Vec<SourceConfig>,
    /// World-space size of one cube in the cube world layout
    pub cube_unit: Vec3,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        let mut improved_perlin = SourceConfig::new(NoiseKind::ImprovedPerlin);
        improved_perlin.cube_world = true;
        Self {
            generator: GeneratorConfig::default(),
            seeds_count: 30,
            rng_seed: None,
            chunk_height_limit: 4.0,
            quantization_step: DEFAULT_STEP,
            policy: ValidationPolicy::default(),
            sources: vec![
                SourceConfig::new(NoiseKind::Gradient),
                SourceConfig::new(NoiseKind::SineHash),
                improved_perlin,
                SourceConfig::new(NoiseKind::Simplex { scale: None }),
            ],
            cube_unit: Vec3::ONE,
        }
    }
}

impl ExperimentConfig {
    pub fn load(path: &Path) -> Result<ExperimentConfig, Box<dyn Error>> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        info!("Loaded experiment config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<ExperimentConfig, Box<dyn Error>> {
        let config: ExperimentConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would trip the generator or validator assertions
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let GeneratorConfig {
            width,
            height,
            octaves,
            ..
        } = self.generator;
        if width == 0 || height == 0 {
            return Err(format!("world must not be empty, got {width}x{height}").into());
        }
        if octaves == 0 {
            return Err("octaves must be at least 1".into());
        }
        if self.seeds_count == 0 {
            return Err("seeds_count must be at least 1".into());
        }
        if !(self.quantization_step.is_finite() && self.quantization_step > 0.0) {
            return Err(format!(
                "quantization_step must be positive, got {}",
                self.quantization_step
            )
            .into());
        }
        if self.chunk_height_limit < 0.0 {
            return Err(format!(
                "chunk_height_limit must not be negative, got {}",
                self.chunk_height_limit
            )
            .into());
        }
        if self.policy == ValidationPolicy::ChunkCorner
            && (width % CHUNK_SIZE != 0 || height % CHUNK_SIZE != 0)
        {
            return Err(format!(
                "chunk corner validation needs dimensions divisible by {CHUNK_SIZE}, got {width}x{height}"
            )
            .into());
        }
        if self.sources.is_empty() {
            return Err("no noise sources configured".into());
        }
        Ok(())
    }
}
