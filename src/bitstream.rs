//! Binary digits and the encoded bitstream
//!
//! A [`Bitstream`] is the plain concatenation of code words. It carries no
//! header of its own: the code table and, for the packed form, the bit length
//! travel next to it.

use std::fmt;
use std::str::FromStr;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use serde::{Deserialize, Serialize};

use crate::error::HuffmanError;

/// One binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(b: Bit) -> Self {
        b == Bit::One
    }
}

/// Ordered sequence of binary digits produced by the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitstream {
    bits: Vec<Bit>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    pub fn extend_from_slice(&mut self, bits: &[Bit]) {
        self.bits.extend_from_slice(bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Drop everything past the first `len` bits.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Pack the bits MSB-first into bytes, zero-padding the last byte.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HuffmanError> {
        let mut writer = BitWriter::endian(Vec::with_capacity(self.len().div_ceil(8)), BigEndian);
        for bit in self.iter() {
            writer.write_bit(bit.into())?;
        }
        writer.byte_align()?;
        Ok(writer.into_writer())
    }

    /// Unpack `bit_len` bits previously produced by [`Bitstream::to_bytes`].
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Result<Self, HuffmanError> {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let mut stream = Self::with_capacity(bit_len);
        for _ in 0..bit_len {
            stream.push(reader.read_bit()?.into());
        }
        Ok(stream)
    }
}

impl From<Vec<Bit>> for Bitstream {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<Bit> for Bitstream {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.iter().map(Bit::as_char).collect();
        f.write_str(&text)
    }
}

impl FromStr for Bitstream {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, digit)| {
                Bit::from_char(digit).ok_or(HuffmanError::InvalidDigit { digit, position })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let stream: Bitstream = "0110100".parse().unwrap();
        assert_eq!(stream.len(), 7);
        assert_eq!(stream.to_string(), "0110100");
    }

    #[test]
    fn test_parse_rejects_bad_digit() {
        let err = "01x1".parse::<Bitstream>().unwrap_err();
        match err {
            HuffmanError::InvalidDigit { digit, position } => {
                assert_eq!(digit, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pack_msb_first() {
        let stream: Bitstream = "1010000011".parse().unwrap();
        let bytes = stream.to_bytes().unwrap();
        assert_eq!(bytes, vec![0b1010_0000, 0b1100_0000]);
        let unpacked = Bitstream::from_bytes(&bytes, stream.len()).unwrap();
        assert_eq!(unpacked, stream);
    }

    #[test]
    fn test_empty_stream_packs_to_nothing() {
        let stream = Bitstream::new();
        assert!(stream.to_bytes().unwrap().is_empty());
        assert_eq!(stream.to_string(), "");
    }

    #[test]
    fn test_unpack_past_end_fails() {
        let result = Bitstream::from_bytes(&[0xFF], 9);
        assert!(matches!(result, Err(HuffmanError::Io(_))));
    }
}
