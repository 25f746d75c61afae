//! Code table derivation and the encode/decode pair

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::bitstream::{Bit, Bitstream};
use crate::error::HuffmanError;
use crate::tree::Node;
use crate::Symbol;

/// Binary digits assigned to one symbol.
pub type CodeWord = Vec<Bit>;

/// Prefix-free mapping from symbol to code word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, CodeWord>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Assemble a table from explicit pairs, rejecting empty, duplicate or
    /// prefix-overlapping code words and repeated symbols.
    pub fn from_codes<I>(pairs: I) -> Result<Self, HuffmanError>
    where
        I: IntoIterator<Item = (S, CodeWord)>,
    {
        let mut codes = HashMap::new();
        for (symbol, code) in pairs {
            if code.is_empty() {
                return Err(HuffmanError::InvalidTable(format!(
                    "empty code word for {symbol:?}"
                )));
            }
            if codes.insert(symbol.clone(), code).is_some() {
                return Err(HuffmanError::InvalidTable(format!(
                    "symbol {symbol:?} listed twice"
                )));
            }
        }

        // In sorted order a word that prefixes any other prefixes its successor.
        let mut words: Vec<&CodeWord> = codes.values().collect();
        words.sort();
        for pair in words.windows(2) {
            if pair[1].starts_with(pair[0]) {
                return Err(HuffmanError::InvalidTable(format!(
                    "code word {} is a prefix of {}",
                    render(pair[0]),
                    render(pair[1])
                )));
            }
        }
        Ok(Self { codes })
    }

    pub fn get(&self, symbol: &S) -> Option<&CodeWord> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &CodeWord)> {
        self.codes.iter()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Vec::len).max().unwrap_or(0)
    }

    fn inverted(&self) -> HashMap<&[Bit], &S> {
        self.codes
            .iter()
            .map(|(symbol, code)| (code.as_slice(), symbol))
            .collect()
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn render(code: &[Bit]) -> String {
    code.iter().map(|b| b.as_char()).collect()
}

/// Derive the code table from a tree, giving a lone-leaf tree the code `0`.
pub fn derive_table<S: Symbol>(root: &Node<S>) -> CodeTable<S> {
    derive_table_with(root, Bit::Zero)
}

/// Derive the code table from a tree. Left edges append `0`, right edges `1`.
/// When the root itself is a leaf it gets the one-digit code `lone`.
pub fn derive_table_with<S: Symbol>(root: &Node<S>, lone: Bit) -> CodeTable<S> {
    let mut table = CodeTable::new();

    if let Node::Leaf { symbol, .. } = root {
        table.codes.insert(symbol.clone(), vec![lone]);
        return table;
    }

    let mut stack: Vec<(&Node<S>, CodeWord)> = vec![(root, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.codes.insert(symbol.clone(), path);
            }
            Node::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(Bit::One);
                let mut left_path = path;
                left_path.push(Bit::Zero);
                stack.push((right.as_ref(), right_path));
                stack.push((left.as_ref(), left_path));
            }
        }
    }

    debug!(
        symbols = table.len(),
        max_code_len = table.max_code_len(),
        "code table derived"
    );
    table
}

/// Concatenate the code word of every input symbol, in input order.
pub fn encode<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<Bitstream, HuffmanError> {
    let mut stream = Bitstream::new();
    for (position, symbol) in input.iter().enumerate() {
        let code = table
            .get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol {
                symbol: format!("{symbol:?}"),
                position,
            })?;
        stream.extend_from_slice(code);
    }
    trace!(symbols = input.len(), bits = stream.len(), "encoded");
    Ok(stream)
}

/// Greedily match accumulated digits against the table's code words.
///
/// Fails with `MalformedStream` when the stream ends mid-word, or as soon as
/// the accumulator outgrows the longest code word and can never match.
pub fn decode<S: Symbol>(stream: &Bitstream, table: &CodeTable<S>) -> Result<Vec<S>, HuffmanError> {
    let lookup = table.inverted();
    let max_len = table.max_code_len();
    let bits = stream.as_slice();

    let mut output = Vec::new();
    let mut start = 0;
    for end in 1..=bits.len() {
        let pending = &bits[start..end];
        if let Some(&symbol) = lookup.get(pending) {
            output.push(symbol.clone());
            start = end;
        } else if pending.len() >= max_len {
            return Err(HuffmanError::MalformedStream {
                consumed: start,
                pending: pending.len(),
            });
        }
    }

    if start != bits.len() {
        return Err(HuffmanError::MalformedStream {
            consumed: start,
            pending: bits.len() - start,
        });
    }
    trace!(bits = bits.len(), symbols = output.len(), "decoded");
    Ok(output)
}
