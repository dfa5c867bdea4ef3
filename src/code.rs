use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;

use crate::tree::{HuffmanTree, Node};

/// A code word is represented as
/// a [`bitvec::vec::BitVec`](https://docs.rs/bitvec/1/bitvec/vec/struct.BitVec.html),
/// one bit per edge from the root to the symbol's leaf.
pub type Code = BitVec;

const ZERO: bool = false;
const ONE: bool = true;

/// The mapping from every symbol of an alphabet to its code word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    codes: HashMap<S, Code>,
}

impl<S: Eq + Hash> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.codes.keys()
    }

    /// Total number of bits needed to write every symbol `frequency` times,
    /// i.e. `Σ frequency · len(code)`. Symbols missing from the table count
    /// for nothing. `None` if the total does not fit in a `usize`, which can
    /// happen even when the weights themselves summed without overflow.
    ///
    /// ```
    /// let items = vec![('A', 5), ('B', 1), ('C', 6), ('D', 3)];
    /// let table = huffman_codes::huffman_codes(items.clone()).unwrap();
    /// assert_eq!(table.weighted_length(items), Some(28));
    /// ```
    pub fn weighted_length<I>(&self, frequencies: I) -> Option<usize>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        frequencies
            .into_iter()
            .try_fold(0usize, |total, (symbol, frequency)| {
                match self.codes.get(&symbol) {
                    Some(code) => total.checked_add(frequency.checked_mul(code.len())?),
                    None => Some(total),
                }
            })
    }

    /// Whether no code word is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.codes.values().collect::<Vec<_>>();
        // After sorting, a code that prefixes others sits right before them.
        codes.sort();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0].as_bitslice()))
    }

    /// `Σ 2^-len(code)`. `1.0` for any complete code over two or more
    /// symbols, `0.5` for the one-bit code of a lone symbol.
    ///
    /// Codes longer than `i32::MAX` bits are counted as that long; their
    /// terms are zero in an `f64` either way.
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|code| 0.5f64.powi(i32::try_from(code.len()).unwrap_or(i32::MAX)))
            .sum()
    }
}

impl<S: Eq + Hash> IntoIterator for CodeTable<S> {
    type Item = (S, Code);
    type IntoIter = std::collections::hash_map::IntoIter<S, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

impl<S: Eq + Hash> FromIterator<(S, Code)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, Code)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<S: Clone + Eq + Hash> HuffmanTree<S> {
    /// Derives the code word of every leaf: `0` for each step to a left
    /// child, `1` for each step to a right child.
    ///
    /// A tree that is a single leaf has no edges; its symbol gets the one-bit
    /// code `0` so that it still takes room in a bit stream.
    ///
    /// ```
    /// use bitvec::prelude::*;
    /// use huffman_codes::{Config, HuffmanTree};
    ///
    /// let tree = HuffmanTree::build(vec![('A', 5)], &Config::default()).unwrap();
    /// assert_eq!(tree.codes().get(&'A'), Some(&bitvec![0]));
    /// ```
    pub fn codes(&self) -> CodeTable<S> {
        let mut codes = HashMap::new();
        match self.root() {
            Node::Leaf { symbol, .. } => {
                let mut code = Code::new();
                code.push(ZERO);
                codes.insert(symbol.clone(), code);
            }
            root => split(root, &mut Code::new(), &mut codes),
        }
        log::debug!("derived {} huffman codes", codes.len());
        CodeTable { codes }
    }
}

// Walks the tree depth-first, left before right. Each step down pushes one
// bit onto `prefix` and the step back up pops it, so a leaf finds its full
// path in `prefix`. The walk uses an explicit stack: a skewed tree can be as
// deep as the alphabet is large.
fn split<S: Clone + Eq + Hash>(root: &Node<S>, prefix: &mut Code, codes: &mut HashMap<S, Code>) {
    enum Step<'a, S> {
        Visit(&'a Node<S>, Option<bool>),
        Leave,
    }

    let mut stack = vec![Step::Visit(root, None)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Leave => {
                prefix.pop();
            }
            Step::Visit(node, edge) => {
                if let Some(bit) = edge {
                    prefix.push(bit);
                    stack.push(Step::Leave);
                }
                match node {
                    Node::Leaf { symbol, .. } => {
                        codes.insert(symbol.clone(), prefix.clone());
                    }
                    Node::Internal { left, right, .. } => {
                        stack.push(Step::Visit(right.as_ref(), Some(ONE)));
                        stack.push(Step::Visit(left.as_ref(), Some(ZERO)));
                    }
                }
            }
        }
    }
}
