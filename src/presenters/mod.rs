use std::error::Error;

use crate::{config::SourceConfig, heightfield::{GeneratorConfig, Heightfield}};

pub mod cube_world;
pub mod texture;

pub use cube_world::{CubeWorld, CubeWorldPresenter};
pub use texture::TexturePresenter;

/// What a presenter gets to know about the experiment it is showing
pub struct Presentation<'a> {
    /// Position of the experiment within the run
    pub index: usize,
    pub name: &'a str,
    pub generator: &'a GeneratorConfig,
    pub quantization_step: f32,
}

/// Host-side consumer of the last heightfield of each experiment
pub trait WorldPresenter {
    fn accepts(&self, source: &SourceConfig) -> bool;

    fn present(
        &mut self,
        presentation: &Presentation,
        heightfield: &Heightfield,
    ) -> Result<(), Box<dyn Error>>;
}
