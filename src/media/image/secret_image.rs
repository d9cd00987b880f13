use image::{Rgba, RgbaImage};

use crate::error::StegoError;
use crate::result::Result;

/// Hides one image inside another of the same pixel dimensions, bit for
/// bit, without any framing.
///
/// The top bit of every secret color channel becomes the low bit of the
/// corresponding stego channel, so the payload length is fixed by the
/// dimensions and both sides agree on it out of band. Only that single bit
/// of the original 8 bit channel depth is recoverable; the unveiled image
/// is a high-contrast binary approximation of the secret.
pub struct SecretImageCodec;

impl SecretImageCodec {
    /// Embeds `secret` into a fresh copy of `cover`.
    ///
    /// Fails with [`StegoError::DimensionMismatch`] when the two buffers
    /// differ in size; nothing is allocated or written in that case.
    pub fn hide(cover: &RgbaImage, secret: &RgbaImage) -> Result<RgbaImage> {
        if cover.dimensions() != secret.dimensions() {
            let (cover_width, cover_height) = cover.dimensions();
            let (secret_width, secret_height) = secret.dimensions();
            return Err(StegoError::DimensionMismatch {
                cover_width,
                cover_height,
                secret_width,
                secret_height,
            });
        }

        let mut stego = RgbaImage::new(cover.width(), cover.height());
        for (x, y, out) in stego.enumerate_pixels_mut() {
            let Rgba([cr, cg, cb, _]) = *cover.get_pixel(x, y);
            let Rgba([sr, sg, sb, _]) = *secret.get_pixel(x, y);
            *out = Rgba([
                (cr & 0xFE) | (sr >> 7),
                (cg & 0xFE) | (sg >> 7),
                (cb & 0xFE) | (sb >> 7),
                0xFF,
            ]);
        }

        Ok(stego)
    }

    /// Reconstructs the binary approximation of the hidden image: every
    /// channel comes back as 0xFF where the stego low bit is set and 0x00
    /// where it is not, independent of what the cover looked like.
    pub fn unveil(stego: &RgbaImage) -> RgbaImage {
        let mut secret = RgbaImage::new(stego.width(), stego.height());
        for (x, y, out) in secret.enumerate_pixels_mut() {
            let Rgba([r, g, b, _]) = *stego.get_pixel(x, y);
            *out = Rgba([
                if r & 0x1 > 0 { 0xFF } else { 0x00 },
                if g & 0x1 > 0 { 0xFF } else { 0x00 },
                if b & 0x1 > 0 { 0xFF } else { 0x00 },
                0xFF,
            ]);
        }

        secret
    }
}
