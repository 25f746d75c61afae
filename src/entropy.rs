//! Entropy measures for frequency and code tables

use crate::codec::CodeTable;
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Shannon entropy of the symbol distribution, in bits per symbol.
pub fn shannon_entropy<S: Symbol>(freqs: &FrequencyTable<S>) -> f64 {
    let total = freqs.total();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    freqs
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Bits needed to encode the counted input with `table`.
/// Symbols missing from the table contribute nothing.
pub fn encoded_bits<S: Symbol>(freqs: &FrequencyTable<S>, table: &CodeTable<S>) -> u64 {
    freqs
        .iter()
        .filter_map(|(symbol, count)| table.get(symbol).map(|code| count * code.len() as u64))
        .sum()
}

/// Expected code length per symbol under the observed frequencies.
pub fn average_code_length<S: Symbol>(freqs: &FrequencyTable<S>, table: &CodeTable<S>) -> f64 {
    let total = freqs.total();
    if total == 0 {
        return 0.0;
    }
    encoded_bits(freqs, table) as f64 / total as f64
}

/// Width of a fixed-length code for `distinct` symbols (at least one bit).
pub fn fixed_code_width(distinct: usize) -> u32 {
    match distinct {
        0 | 1 => 1,
        n => usize::BITS - (n - 1).leading_zeros(),
    }
}
