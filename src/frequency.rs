//! Symbol frequency counting

use std::collections::HashMap;

use crate::Symbol;

/// Occurrence count of every distinct symbol in an input sequence.
///
/// Entries are kept in first-occurrence order so the tree builder breaks
/// weight ties the same way on every run. Equality ignores that order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn record(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of symbols counted, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(symbol, count)| other.get(symbol) == Some(count))
    }
}

impl<S: Symbol> Eq for FrequencyTable<S> {}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.record(symbol);
        }
        table
    }
}

/// Count the occurrences of each symbol in `sequence`.
pub fn count<S, I>(sequence: I) -> FrequencyTable<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    sequence.into_iter().collect()
}
