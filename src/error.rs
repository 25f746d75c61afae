//! Error types for huffman-codec

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("empty input: no tree can represent zero symbols")]
    EmptyInput,

    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("malformed stream: {pending} unmatched bits after consuming {consumed}")]
    MalformedStream { consumed: usize, pending: usize },

    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("invalid code table: {0}")]
    InvalidTable(String),

    #[error("input too large: {len} symbols exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
