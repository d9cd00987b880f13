use std::fs::File;
use std::path::Path;

use image::Rgba;
pub use image::RgbaImage;
use log::error;

use crate::error::StegoError;
use crate::result::Result;

use super::Persist;

/// Loads a raster image file (PNG or JPEG) into the RGBA pixel buffer the
/// codecs operate on.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| {
        error!("Error loading image {path:?}: {e}");
        StegoError::InvalidImageMedia
    })?;

    Ok(img.to_rgba8())
}

/// A blank, fully opaque white surface, the initial state of a drawing
/// canvas that a secret image gets painted onto.
pub fn blank_surface(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0xFF, 0xFF, 0xFF, 0xFF]))
}

impl Persist for RgbaImage {
    /// Serializes the buffer as PNG. Lossless, so embedded payload bits
    /// survive a save/load cycle.
    fn save_as(&self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;

        self.write_to(&mut f, image::ImageFormat::Png).map_err(|e| {
            error!("Error saving image: {e}");
            StegoError::ImageEncodingError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_start_surfaces_white_and_opaque() {
        let surface = blank_surface(3, 2);

        assert_eq!(surface.dimensions(), (3, 2));
        assert!(surface
            .pixels()
            .all(|p| p.0 == [0xFF, 0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn should_roundtrip_a_buffer_through_png() -> Result<()> {
        let out_dir = TempDir::new()?;
        let file = out_dir.path().join("buffer.png");

        let img = crate::test_utils::prepare_linear_image(4, 3);
        img.save_as(&file)?;

        let loaded = load_image(&file)?;
        assert_eq!(loaded, img);

        Ok(())
    }

    #[test]
    fn should_fail_on_a_non_image_file() {
        let out_dir = TempDir::new().unwrap();
        let file = out_dir.path().join("not-an-image.png");
        std::fs::write(&file, b"plain text").unwrap();

        let result = load_image(&file);
        assert!(matches!(result, Err(StegoError::InvalidImageMedia)));
    }
}
