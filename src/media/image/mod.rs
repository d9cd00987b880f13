mod iterators;
pub mod lsb_codec;
pub mod secret_image;

pub use lsb_codec::LsbCodec;
pub use secret_image::SecretImageCodec;

use image::RgbaImage;

/// Forces every alpha byte of the buffer to fully opaque.
///
/// Both codecs write their output with alpha at 255, opacity never carries
/// data.
pub fn force_opaque(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = 0xFF;
    }
}
