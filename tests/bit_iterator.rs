use bitstream_io::{BitRead, BitReader, LittleEndian};

use pixelveil::BitIterator;

#[test]
fn should_return_the_8_bits_of_h_least_significant_first() {
    let b = [0b0100_1000, 0b0110_0001, 0b0110_1100];
    let mut it = BitIterator::new(&b[..]);

    assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 0, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 1, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "8th bit not correct");
}

#[test]
fn should_return_the_8_bits_of_a_after_skipping_one_byte() {
    let b = [0b0100_1000, 0b0110_0001];
    let mut it = BitIterator::new(&b[..]).skip(8);

    assert_eq!(it.next().unwrap(), 1, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 0, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "8th bit not correct");
    assert_eq!(
        it.next(),
        None,
        "it should end after the last bit of the last byte"
    );
}

#[test]
fn should_behave_as_the_little_endian_bit_reader() {
    let b = [0b0100_1000, 0b0110_0001];
    let mut it = BitIterator::new(&b[..]);
    let mut reader = BitReader::endian(&b[..], LittleEndian);

    for i in 0..16 {
        assert_eq!(
            it.next().unwrap(),
            u8::from(reader.read_bit().unwrap()),
            "{} bit not correct",
            i
        );
    }
}

#[test]
fn should_decompose_a_little_endian_u32_into_ascending_count_bits() {
    // 300 = 0b1_0010_1100; bit i of the count comes out at position i
    let header = 300u32.to_le_bytes();
    let bits: Vec<u8> = BitIterator::new(&header[..]).collect();

    let mut reassembled = 0u32;
    for (i, bit) in bits.iter().enumerate() {
        reassembled |= (*bit as u32) << i;
    }

    assert_eq!(bits.len(), 32);
    assert_eq!(reassembled, 300);
}
