use bitstream_io::{BitWrite, BitWriter, LittleEndian};
use std::io::{BufWriter, Read, Result};

/// generic unveil algorithm, decides which bit of a carrier channel is the
/// payload bit
pub trait UnveilAlgorithm {
    fn unveil(&self, carrier: u8) -> bool;
}

/// default 1 bit unveil strategy: the lowest carrier bit is the payload bit
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    fn unveil(&self, carrier: u8) -> bool {
        (carrier & 0x1) > 0
    }
}

/// generic stegano decoder: adapts an iterator over carrier channels to
/// `std::io::Read`
///
/// Bits are reassembled into bytes least significant first. At the end of
/// the carrier `read` reports a short count and subsequently zero; it never
/// reads past the last channel, a shortfall shows up downstream as a
/// truncated stream.
pub struct Decoder<I, A = OneBitUnveil>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    input: I,
    algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bits_to_take = buf.len() << 3; // 1 bit per channel
        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, LittleEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(bits_to_take) {
            let bit = self.algorithm.unveil(carrier);
            bit_buffer.write_bit(bit)?;
            bits_read += 1;
        }

        if !bit_buffer.byte_aligned() {
            bit_buffer.byte_align()?;
        }

        Ok(bits_read >> 3)
    }
}
