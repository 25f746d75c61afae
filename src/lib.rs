//! huffman-codec: prefix-free entropy coding with Huffman codes.
//!
//! The pipeline has three stages:
//! - frequency counting over the input symbols
//! - Huffman tree construction by minimum-weight merging
//! - code table derivation and the encode/decode pair
//!
//! The code table is the only artifact a bitstream needs to be decoded; it
//! must be carried next to the stream by the caller.

pub mod bitstream;
pub mod codec;
pub mod config;
pub mod entropy;
pub mod error;
pub mod frequency;
pub mod tree;

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

pub use crate::bitstream::{Bit, Bitstream};
pub use crate::codec::{CodeTable, CodeWord};
use crate::config::CodecConfig;
pub use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;

/// An atomic unit of input data.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// Encode `text`, returning the bitstream and the table needed to decode it.
///
/// Empty input yields an empty stream and an empty table.
pub fn encode<S: Symbol>(text: &[S]) -> Result<(Bitstream, CodeTable<S>), HuffmanError> {
    let unbounded = CodecConfig {
        max_input_len: usize::MAX,
        ..CodecConfig::default()
    };
    HuffmanCodec::new(unbounded)
        .encode(text)
        .map(|out| (out.bits, out.table))
}

/// Decode `stream` with `table`. An empty stream decodes to an empty sequence.
pub fn decode<S: Symbol>(stream: &Bitstream, table: &CodeTable<S>) -> Result<Vec<S>, HuffmanError> {
    if stream.is_empty() {
        return Ok(Vec::new());
    }
    codec::decode(stream, table)
}

/// [`encode`] over the characters of a string.
pub fn encode_str(text: &str) -> Result<(Bitstream, CodeTable<char>), HuffmanError> {
    let chars: Vec<char> = text.chars().collect();
    encode(&chars)
}

/// [`decode`] back into a string.
pub fn decode_str(stream: &Bitstream, table: &CodeTable<char>) -> Result<String, HuffmanError> {
    decode(stream, table).map(|chars| chars.into_iter().collect())
}

/// Encoded output container
#[derive(Debug, Clone)]
pub struct EncodedOutput<S: Symbol> {
    pub bits: Bitstream,
    pub table: CodeTable<S>,
    pub metadata: EncodingMetadata,
}

/// Metadata about the encoding process
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EncodingMetadata {
    pub symbol_count: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    /// Shannon entropy of the input, in bits per symbol.
    pub entropy_bits: f64,
    pub average_code_length: f64,
    /// Encoded length relative to a fixed-length code over the same alphabet.
    pub ratio: f64,
}

impl EncodingMetadata {
    fn collect<S: Symbol>(freqs: &FrequencyTable<S>, table: &CodeTable<S>, bits: usize) -> Self {
        let symbol_count = freqs.total() as usize;
        let fixed_bits = symbol_count as f64 * entropy::fixed_code_width(freqs.len()) as f64;
        Self {
            symbol_count,
            distinct_symbols: freqs.len(),
            encoded_bits: bits,
            entropy_bits: entropy::shannon_entropy(freqs),
            average_code_length: entropy::average_code_length(freqs, table),
            ratio: if fixed_bits > 0.0 {
                bits as f64 / fixed_bits
            } else {
                1.0
            },
        }
    }
}

/// The configured Huffman engine
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Count, build the tree, derive the table and encode `text`.
    pub fn encode<S: Symbol>(&self, text: &[S]) -> Result<EncodedOutput<S>, HuffmanError> {
        if text.len() > self.config.max_input_len {
            return Err(HuffmanError::InputTooLarge {
                len: text.len(),
                max: self.config.max_input_len,
            });
        }
        if text.is_empty() {
            return Ok(EncodedOutput {
                bits: Bitstream::new(),
                table: CodeTable::new(),
                metadata: EncodingMetadata {
                    ratio: 1.0,
                    ..EncodingMetadata::default()
                },
            });
        }

        let freqs = frequency::count(text.iter().cloned());
        let table = {
            let root = tree::build(&freqs)?;
            codec::derive_table_with(&root, self.config.single_symbol_bit)
        };
        let bits = codec::encode(text, &table)?;
        let metadata = EncodingMetadata::collect(&freqs, &table, bits.len());

        debug!(
            symbols = metadata.symbol_count,
            distinct = metadata.distinct_symbols,
            bits = metadata.encoded_bits,
            ratio = metadata.ratio,
            "encoded input"
        );
        Ok(EncodedOutput {
            bits,
            table,
            metadata,
        })
    }

    /// Decode a previously encoded output
    pub fn decode<S: Symbol>(&self, output: &EncodedOutput<S>) -> Result<Vec<S>, HuffmanError> {
        decode(&output.bits, &output.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let (bits, table) = encode_str("").unwrap();
        assert!(bits.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_empty_ignores_table() {
        let table: CodeTable<char> = CodeTable::new();
        assert_eq!(decode_str(&Bitstream::new(), &table).unwrap(), "");
    }

    #[test]
    fn test_roundtrip_str() {
        let text = "abbcccddddeeeee";
        let (bits, table) = encode_str(text).unwrap();
        assert_eq!(decode_str(&bits, &table).unwrap(), text);
    }

    #[test]
    fn test_single_symbol() {
        let (bits, table) = encode_str("aaaa").unwrap();
        assert_eq!(bits.to_string(), "0000");
        assert_eq!(table.len(), 1);
        assert_eq!(decode_str(&bits, &table).unwrap(), "aaaa");
    }

    #[test]
    fn test_configured_single_symbol_bit() {
        let codec = HuffmanCodec::new(CodecConfig {
            single_symbol_bit: Bit::One,
            ..CodecConfig::default()
        });
        let out = codec.encode(&[7u8, 7, 7]).unwrap();
        assert_eq!(out.bits.to_string(), "111");
        assert_eq!(codec.decode(&out).unwrap(), vec![7u8, 7, 7]);
    }

    #[test]
    fn test_input_limit() {
        let codec = HuffmanCodec::new(CodecConfig {
            max_input_len: 4,
            ..CodecConfig::default()
        });
        let result = codec.encode(b"hello");
        assert!(matches!(
            result,
            Err(HuffmanError::InputTooLarge { len: 5, max: 4 })
        ));
    }

    #[test]
    fn test_metadata() {
        let codec = HuffmanCodec::default();
        let out = codec.encode(b"aaaabbbccd").unwrap();
        assert_eq!(out.metadata.symbol_count, 10);
        assert_eq!(out.metadata.distinct_symbols, 4);
        assert_eq!(out.metadata.encoded_bits, out.bits.len());
        assert!(out.metadata.ratio < 1.0);
        assert!(out.metadata.entropy_bits <= out.metadata.average_code_length + 1e-9);
    }
}
