use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::media::{load_image, Persist};
use crate::{commands, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

/// File-based unveil flow: pick the stego image, then recover either the
/// hidden text or the hidden image.
#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the stego image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Optional file the recovered secret is written to
    pub fn into_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Recovers the hidden text. When an output path is set, the text is
    /// written there as well.
    pub fn execute_text(self) -> Result<String, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let stego = load_image(&secret_media)?;
        let text = commands::unveil_text(&stego)?;

        if let Some(output) = self.output {
            fs::write(&output, &text).map_err(|source| StegoError::WriteError { source })?;
        }

        Ok(text)
    }

    /// Reconstructs the hidden image. When an output path is set, the
    /// binary approximation is written there as PNG.
    pub fn execute_image(self) -> Result<RgbaImage, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let stego = load_image(&secret_media)?;
        let secret = commands::unveil_image(&stego);

        if let Some(output) = self.output {
            secret.save_as(&output)?;
        }

        Ok(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_linear_image;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let stego = temp_dir.path().join("stego.png");
        let unveiled = temp_dir.path().join("secret-message.txt");
        prepare_linear_image(32, 32)
            .save_as(&carrier)
            .expect("Failed to save carrier image");

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(&stego)
            .execute()
            .expect("Failed to hide message in image");

        let text = crate::api::unveil::prepare()
            .from_secret_file(&stego)
            .into_output(&unveiled)
            .execute_text()
            .expect("Failed to unveil message from image");

        assert_eq!(text, "Hello, World!");
        assert_eq!(
            fs::read_to_string(&unveiled).expect("Failed to read output file"),
            "Hello, World!"
        );
    }

    #[test]
    fn should_require_a_stego_image() {
        let result = prepare().execute_text();

        assert!(matches!(result, Err(StegoError::CarrierNotSet)));
    }
}
