use image::RgbaImage;
use log::warn;

use crate::media::image::lsb_codec::{capacity_bits, LsbCodec};
use crate::media::image::{force_opaque, SecretImageCodec};
use crate::message::Message;
use crate::result::Result;

/// Hides a UTF-8 text inside a copy of the cover image.
///
/// The framed payload is embedded one bit per R, G and B channel in raster
/// order; alpha comes out fully opaque everywhere. A payload that does not
/// fit is truncated at the capacity limit and a warning is logged; check
/// [`payload_capacity_bytes`][cap] up front to avoid losing data.
///
/// [cap]: crate::media::image::lsb_codec::payload_capacity_bytes
pub fn hide_text(cover: &RgbaImage, text: &str) -> RgbaImage {
    let data = Message::new(text).to_raw_data();
    let mut stego = cover.clone();
    force_opaque(&mut stego);

    {
        let mut encoder = LsbCodec::encoder(&mut stego);
        if let Err(e) = encoder.write_all(&data) {
            // the only error a channel-backed encoder produces is running
            // out of channels
            warn!(
                "payload of {} bits truncated to the carrier capacity of {} bits: {e}",
                data.len() * 8,
                capacity_bits(cover),
            );
        }
    }

    stego
}

/// Recovers a hidden UTF-8 text from a stego image.
///
/// Returns the empty string for a zero-length payload; an untouched cover
/// whose channels are all even decodes that way. Fails with
/// [`StegoError::TruncatedStream`][trunc] when the carrier cannot even hold
/// the 32 header bits, or when the decoded header claims more bits than the
/// carrier has; with [`StegoError::InvalidTextData`][utf8] when the
/// extracted bytes are not valid UTF-8.
///
/// [trunc]: crate::StegoError::TruncatedStream
/// [utf8]: crate::StegoError::InvalidTextData
pub fn unveil_text(stego: &RgbaImage) -> Result<String> {
    let available_bits = capacity_bits(stego);
    let mut decoder = LsbCodec::decoder(stego);
    let message = Message::from_raw_data(&mut decoder, available_bits)?;

    Ok(message.text)
}

/// Hides a secret image of identical dimensions inside the cover image,
/// top bit of every secret channel into the low bit of the stego channel.
pub fn hide_image(cover: &RgbaImage, secret: &RgbaImage) -> Result<RgbaImage> {
    SecretImageCodec::hide(cover, secret)
}

/// Reconstructs the binary approximation of an image hidden by
/// [`hide_image`].
pub fn unveil_image(stego: &RgbaImage) -> RgbaImage {
    SecretImageCodec::unveil(stego)
}
