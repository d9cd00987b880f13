use std::path::{Path, PathBuf};

use crate::media::{load_image, Persist};
use crate::{commands, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// File-to-file hide flow: pick a carrier image, a secret (a text message
/// or a secret image of the same size), and an output path.
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    secret_image: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The image that gets hidden inside the carrier, must match its
    /// dimensions
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let cover = load_image(&image)?;
        let stego = if let Some(message) = self.message {
            commands::hide_text(&cover, &message)
        } else if let Some(secret_image) = self.secret_image {
            let secret = load_image(&secret_image)?;
            commands::hide_image(&cover, &secret)?
        } else {
            return Err(StegoError::MissingSecret);
        };

        stego.save_as(&output)
    }

    fn validate(&self) -> Result<(), StegoError> {
        if self.message.is_none() && self.secret_image.is_none() {
            return Err(StegoError::MissingSecret);
        }

        Ok(())
    }
}
