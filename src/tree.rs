//! Huffman tree construction
//!
//! Builds the textbook binary merge tree: repeatedly take the two lightest
//! nodes from a min-priority queue and join them under a new internal node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        self.fold_counts().0
    }

    pub fn internal_count(&self) -> usize {
        self.fold_counts().1
    }

    fn fold_counts(&self) -> (usize, usize) {
        let mut leaves = 0;
        let mut internals = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => leaves += 1,
                Node::Internal { left, right, .. } => {
                    internals += 1;
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        (leaves, internals)
    }
}

/// Queue entry. `seq` is the insertion number used to break weight ties.
struct Pending<S> {
    weight: u64,
    seq: u64,
    node: Node<S>,
}

impl<S> Eq for Pending<S> {}
impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on (weight, seq)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build the Huffman tree for `freqs` and return its root.
///
/// Leaves enter the queue in first-occurrence order; every merged node takes
/// the next sequence number. The first node popped becomes the left child.
/// A single-symbol table yields a lone leaf as root.
pub fn build<S: Symbol>(freqs: &FrequencyTable<S>) -> Result<Node<S>, HuffmanError> {
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut heap = BinaryHeap::with_capacity(freqs.len());
    let mut seq = 0u64;
    for (symbol, weight) in freqs.iter() {
        heap.push(Pending {
            weight,
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                weight,
            },
        });
        seq += 1;
    }

    loop {
        let left = heap.pop().ok_or(HuffmanError::EmptyInput)?;
        let Some(right) = heap.pop() else {
            debug!(
                symbols = freqs.len(),
                weight = left.weight,
                "huffman tree built"
            );
            return Ok(left.node);
        };
        let weight = left.weight + right.weight;
        heap.push(Pending {
            weight,
            seq,
            node: Node::Internal {
                weight,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        });
        seq += 1;
    }
}
