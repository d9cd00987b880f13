//! # Pixelveil
//!
//! Least-significant-bit steganography over RGBA pixel buffers. Two
//! pipelines share one carrier abstraction:
//!
//! - [`commands::hide_text`] / [`commands::unveil_text`] hide a UTF-8 text
//!   inside the color channels of a cover image, length-prefixed so the
//!   decoder knows when to stop
//! - [`commands::hide_image`] / [`commands::unveil_image`] hide a whole
//!   second image of the same dimensions, bit for bit, without framing
//!
//! Only the lowest bit of each R, G and B byte is touched, which keeps the
//! visual change below the perceptual threshold; alpha never carries data
//! and always comes out fully opaque.
//!
//! # Usage Examples
//!
//! ## Hide a text inside an image
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//!
//! let cover = RgbaImage::from_pixel(64, 64, Rgba([120, 83, 42, 255]));
//!
//! let stego = pixelveil::commands::hide_text(&cover, "The cake is a lie");
//! let revealed = pixelveil::commands::unveil_text(&stego).expect("Failed to unveil text");
//!
//! assert_eq!(revealed, "The cake is a lie");
//! ```
//!
//! ## Hide an image inside an image
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use pixelveil::media::blank_surface;
//!
//! let cover = RgbaImage::from_pixel(32, 32, Rgba([200, 100, 50, 255]));
//! let secret = blank_surface(32, 32);
//!
//! let stego = pixelveil::commands::hide_image(&cover, &secret).expect("Failed to hide image");
//! let revealed = pixelveil::commands::unveil_image(&stego);
//!
//! // white is above the 0x80 threshold on every channel
//! assert!(revealed.pixels().all(|p| p.0 == [0xFF, 0xFF, 0xFF, 0xFF]));
//! ```
//!
//! ## File to file
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use pixelveil::media::Persist;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbaImage::from_pixel(64, 64, Rgba([90, 120, 180, 255]))
//!     .save_as(&carrier)
//!     .expect("Failed to save carrier image");
//!
//! pixelveil::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("stego.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let revealed = pixelveil::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("stego.png"))
//!     .execute_text()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(revealed, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod message;
pub use message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::StegoError;
pub use crate::media::image::lsb_codec::{capacity_bits, payload_capacity_bytes};
pub use crate::media::image::{LsbCodec, SecretImageCodec};
pub use crate::result::Result;
