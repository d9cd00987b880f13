use image::buffer::{Pixels, PixelsMut};
use image::{Pixel, Rgba, RgbaImage};
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// Color channels per pixel that take part in embedding. Alpha never does.
const USED_CHANNELS: usize = 3;

/// Iterates the R, G and B channel bytes of an image in raster order: row
/// by row, left to right, three channels per pixel, every alpha skipped.
pub(crate) struct ChannelIter<'a> {
    pixels: Pixels<'a, Rgba<u8>>,
    channels: Take<Iter<'a, u8>>,
}

impl<'a> ChannelIter<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        let mut pixels = image.pixels();
        let channels = match pixels.next() {
            Some(pixel) => pixel.channels().iter().take(USED_CHANNELS),
            None => Iter::default().take(USED_CHANNELS),
        };

        Self { pixels, channels }
    }
}

impl<'a> Iterator for ChannelIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().copied().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels().iter().take(USED_CHANNELS);
            }
            self.channels.next().copied()
        })
    }
}

/// Mutable twin of [`ChannelIter`], same traversal order.
pub(crate) struct ChannelIterMut<'a> {
    pixels: PixelsMut<'a, Rgba<u8>>,
    channels: Take<IterMut<'a, u8>>,
}

impl<'a> ChannelIterMut<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        let mut pixels = image.pixels_mut();
        let channels = match pixels.next() {
            Some(pixel) => pixel.channels_mut().iter_mut().take(USED_CHANNELS),
            None => IterMut::default().take(USED_CHANNELS),
        };

        Self { pixels, channels }
    }
}

impl<'a> Iterator for ChannelIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels_mut().iter_mut().take(USED_CHANNELS);
            }
            self.channels.next()
        })
    }
}
