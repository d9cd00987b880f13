use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates all bits of a `Read` stream, least significant bit of each byte
/// first.
///
/// This is the bit order the whole crate speaks: bit `i` of a byte is
/// emitted at position `i`, so a little-endian length header decomposes into
/// its 32 count bits in ascending significance. The order is identical to
/// what `bitstream_io::BitReader` yields for `LittleEndian` streams, see
/// `tests/bit_iterator.rs`.
pub struct BitIterator<R> {
    inner: R,
    byte: u8,
    mask: u16,
}

const FETCH_NEXT_BYTE: u16 = 0x100;

impl<R> BitIterator<R> {
    pub fn new(inner: R) -> Self {
        BitIterator {
            inner,
            byte: 0,
            mask: FETCH_NEXT_BYTE,
        }
    }
}

impl<R> Iterator for BitIterator<R>
where
    R: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= FETCH_NEXT_BYTE {
            loop {
                match self.inner.read(slice::from_mut(&mut self.byte)) {
                    Ok(0) => return None,
                    Ok(..) => break,
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => return None,
                }
            }
            self.mask = 0x1;
        }
        let bit = u8::from(u16::from(self.byte) & self.mask != 0);
        self.mask <<= 1;
        Some(bit)
    }
}
