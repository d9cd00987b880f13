use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a cover/secret pair of different pixel dimensions,
    /// which the image-in-image codec cannot accept
    #[error("Cover image is {cover_width}x{cover_height} but secret image is {secret_width}x{secret_height}, dimensions must match")]
    DimensionMismatch {
        cover_width: u32,
        cover_height: u32,
        secret_width: u32,
        secret_height: u32,
    },

    /// Represents a carrier that ended before the embedded payload did,
    /// e.g. the image is too small or contains no hidden data at all
    #[error("Carrier ended early: {needed_bits} bits needed but only {available_bits} available")]
    TruncatedStream {
        available_bits: usize,
        needed_bits: usize,
    },

    /// Represents the error of invalid UTF-8 text data found inside of a message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret, provide either a message or a secret image")]
    MissingSecret,
}
