use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Read;

use crate::error::StegoError;
use crate::result::Result;

/// Number of header bytes in front of a framed payload.
pub const HEADER_BYTES: usize = 4;
/// Number of carrier bits the header occupies.
pub const HEADER_BITS: usize = HEADER_BYTES * 8;

/// A text secret in transit.
///
/// On the wire a message is a 4 byte little-endian byte count followed by
/// the UTF-8 payload. Emitted bit by bit via [`BitIterator`][bits] this
/// yields the 32 count bits in ascending significance, then every payload
/// byte in ascending significance.
///
/// A zero byte count is the benign empty message, not an error; an
/// untouched cover whose channels are all even decodes exactly that way.
///
/// [bits]: crate::BitIterator
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Message { text: text.into() }
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    /// Serializes the message into its length-prefixed byte stream.
    ///
    /// Payloads of 2^32 bytes or more are out of scope, the count wraps.
    pub fn to_raw_data(&self) -> Vec<u8> {
        let payload = self.text.as_bytes();
        let mut data = Vec::with_capacity(HEADER_BYTES + payload.len());
        data.write_u32::<LittleEndian>(payload.len() as u32)
            .expect("Writing the header to a vec does not fail");
        data.extend_from_slice(payload);

        data
    }

    /// Parses a message back out of a raw data stream, usually an LSB
    /// decoder over a stego image.
    ///
    /// `available_bits` is the carrier capacity backing `dec`; the header
    /// and the claimed payload length are validated against it before
    /// anything is read or allocated, so a carrier that is too small or a
    /// header claiming more than the carrier holds fails closed with
    /// [`StegoError::TruncatedStream`] instead of reading past the end.
    pub fn from_raw_data(dec: &mut dyn Read, available_bits: usize) -> Result<Self> {
        if available_bits < HEADER_BITS {
            return Err(StegoError::TruncatedStream {
                available_bits,
                needed_bits: HEADER_BITS,
            });
        }

        let payload_len = dec.read_u32::<LittleEndian>().map_err(|_| {
            StegoError::TruncatedStream {
                available_bits,
                needed_bits: HEADER_BITS,
            }
        })? as usize;
        if payload_len == 0 {
            return Ok(Self::empty());
        }

        let needed_bits = HEADER_BITS as u64 + payload_len as u64 * 8;
        if needed_bits > available_bits as u64 {
            return Err(StegoError::TruncatedStream {
                available_bits,
                needed_bits: needed_bits as usize,
            });
        }

        let mut payload = vec![0u8; payload_len];
        dec.read_exact(&mut payload)
            .map_err(|_| StegoError::TruncatedStream {
                available_bits,
                needed_bits: needed_bits as usize,
            })?;

        Self::from_utf8(payload)
    }

    /// Creates a new message with the given text.
    fn from_utf8(content: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(content)?;

        Ok(Self { text })
    }
}
