use std::io::{Read, Write};

use image::RgbaImage;

use super::iterators::{ChannelIter, ChannelIterMut};
use crate::message::HEADER_BITS;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

/// Color channels per pixel that carry payload bits.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements `Read`
    ///
    /// The decoder walks the low bit of every R, G and B byte in raster
    /// order and reassembles bytes least significant bit first.
    pub fn decoder(input: &RgbaImage) -> Box<dyn Read + '_> {
        Box::new(Decoder::new(ChannelIter::new(input), OneBitUnveil))
    }

    /// builds a LSB Image Encoder that implements `Write`
    ///
    /// The encoder replaces the low bit of every R, G and B byte in raster
    /// order; channels it never reaches keep their value.
    pub fn encoder(carrier: &mut RgbaImage) -> Box<dyn Write + '_> {
        Box::new(Encoder::new(ChannelIterMut::new(carrier), OneBitHide))
    }
}

/// Total number of payload bits the image can carry, one per R, G and B
/// channel of every pixel.
pub fn capacity_bits(image: &RgbaImage) -> usize {
    image.width() as usize * image.height() as usize * CHANNELS_PER_PIXEL
}

/// Number of whole text payload bytes that fit after the length header.
///
/// Check this before hiding to avoid the silent truncation an oversized
/// payload is subject to.
pub fn payload_capacity_bytes(image: &RgbaImage) -> usize {
    capacity_bits(image).saturating_sub(HEADER_BITS) / 8
}
