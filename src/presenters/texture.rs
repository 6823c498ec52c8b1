use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use image::{GrayImage, Luma};
use log::info;

use crate::{config::SourceConfig, heightfield::Heightfield};

use super::{Presentation, WorldPresenter};

/// Writes one grayscale PNG per experiment, one pixel per cell
pub struct TexturePresenter {
    output_dir: PathBuf,
}

impl TexturePresenter {
    pub fn new(output_dir: &Path) -> TexturePresenter {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn texture_path(&self, index: usize, name: &str) -> PathBuf {
        let slug: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        self.output_dir.join(format!("{index:02}_{slug}.png"))
    }
}

impl WorldPresenter for TexturePresenter {
    fn accepts(&self, source: &SourceConfig) -> bool {
        source.render_texture
    }

    fn present(
        &mut self,
        presentation: &Presentation,
        heightfield: &Heightfield,
    ) -> Result<(), Box<dyn Error>> {
        let texture = heightfield_to_texture(heightfield, presentation.generator.amplitude);
        fs::create_dir_all(&self.output_dir)?;
        let path = self.texture_path(presentation.index, presentation.name);
        texture.save(&path)?;
        info!("Wrote {} texture to {}", presentation.name, path.display());
        Ok(())
    }
}

/// Grayscale level is `height / amplitude`, clamped to [0, 1]. Texture rows
/// run top-down, so the grid is flipped to keep y = 0 at the bottom.
pub fn heightfield_to_texture(heightfield: &Heightfield, amplitude: f32) -> GrayImage {
    let width = heightfield.width() as u32;
    let height = heightfield.height() as u32;
    GrayImage::from_fn(width, height, |px, py| {
        let y = (height - 1 - py) as usize;
        let level = (heightfield.get(px as usize, y) / amplitude).clamp(0.0, 1.0);
        Luma([(level * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::heightfield::Heightfield;

    use super::{TexturePresenter, heightfield_to_texture};

    #[test]
    fn levels_are_clamped_and_flipped() {
        let mut heightfield = Heightfield::new(2, 2);
        heightfield.set(0, 0, 50.0);
        heightfield.set(1, 0, -20.0);
        heightfield.set(0, 1, 25.0);
        heightfield.set(1, 1, 500.0);

        let texture = heightfield_to_texture(&heightfield, 50.0);
        assert_eq!(texture.dimensions(), (2, 2));
        // Bottom row of the image is y = 0
        assert_eq!(texture.get_pixel(0, 1).0, [255]);
        assert_eq!(texture.get_pixel(1, 1).0, [0]);
        assert_eq!(texture.get_pixel(0, 0).0, [128]);
        assert_eq!(texture.get_pixel(1, 0).0, [255]);
    }

    #[test]
    fn texture_names_are_file_safe() {
        let presenter = TexturePresenter::new(Path::new("out"));
        assert_eq!(
            presenter.texture_path(3, "Improved Perlin"),
            Path::new("out").join("03_improved_perlin.png")
        );
    }
}
