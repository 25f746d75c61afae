//! Configuration for huffman-codec

use serde::{Deserialize, Serialize};

use crate::bitstream::Bit;
use crate::error::HuffmanError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest input, in symbols, the engine accepts.
    pub max_input_len: usize,
    /// Code word given to the only symbol of a single-symbol alphabet.
    pub single_symbol_bit: Bit,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_len: 100 * 1024 * 1024, // 100 MiB
            single_symbol_bit: Bit::Zero,
        }
    }
}

impl CodecConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, HuffmanError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HuffmanError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HuffmanError> {
        if self.max_input_len == 0 {
            return Err(HuffmanError::Config(
                "max_input_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.max_input_len, 100 * 1024 * 1024);
        assert_eq!(config.single_symbol_bit, Bit::Zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = CodecConfig::from_json(r#"{ "single_symbol_bit": "One" }"#).unwrap();
        assert_eq!(config.single_symbol_bit, Bit::One);
        assert_eq!(config.max_input_len, CodecConfig::default().max_input_len);
    }

    #[test]
    fn test_from_json_rejects_zero_limit() {
        let result = CodecConfig::from_json(r#"{ "max_input_len": 0 }"#);
        assert!(matches!(result, Err(HuffmanError::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            CodecConfig::from_json("not json"),
            Err(HuffmanError::Config(_))
        ));
    }
}
