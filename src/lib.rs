//! # Huffman codes
//!
//! `huffman-codes` is a crate to derive minimum-redundancy codes for an
//! alphabet of weighted symbols using the
//! [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding) algorithm.
//!
//! It builds the mapping only: turning data into a bit stream with the codes
//! is left to the caller.
//!
//! ```
//! use bitvec::prelude::*;
//!
//! let codes = huffman_codes::huffman_codes(vec![('A', 5), ('B', 1), ('C', 6), ('D', 3)]).unwrap();
//! assert_eq!(codes.get(&'C'), Some(&bitvec![0]));
//! assert_eq!(codes.get(&'A'), Some(&bitvec![1, 1]));
//! assert_eq!(codes.get(&'B'), Some(&bitvec![1, 0, 0]));
//! assert_eq!(codes.get(&'D'), Some(&bitvec![1, 0, 1]));
//! ```
//!
//! ## Ties
//!
//! Symbols of equal weight can be coded in more than one optimal way. By
//! default the queue compares weights only and makes no promise about which
//! optimal code comes out; [`TieBreak::InsertionOrder`] pins it down.
//!
//! ## References
//!
//! * _Cormen, T.H., Leiserson, C.E., Rivest, R.L. and Stein, C., 2009. Introduction to algorithms. MIT press._
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._

use std::hash::Hash;

use unicode_segmentation::UnicodeSegmentation;

mod code;
mod config;
mod error;
mod queue;
mod tree;

pub use code::{Code, CodeTable};
pub use config::{Config, TieBreak};
pub use error::ErrorKind;
pub use tree::{HuffmanTree, Node};

/// Creates and returns an ordered list of pairs of the characters found in the
/// input with their count, ordered in decreasing frequency.
///
/// Characters are [Unicode grapheme clusters](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries).
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// let freqs = huffman_codes::frequencies("huffman");
/// let mut iter = freqs.iter();
///
/// assert_eq!(iter.next(), Some(&("f", 2)));
/// assert_eq!(iter.next(), Some(&("a", 1)));
/// assert_eq!(iter.next(), Some(&("h", 1)));
/// assert_eq!(iter.next(), Some(&("m", 1)));
/// assert_eq!(iter.next(), Some(&("n", 1)));
/// assert_eq!(iter.next(), Some(&("u", 1)));
/// assert_eq!(iter.next(), None);
/// ```
pub fn frequencies(s: &str) -> Vec<(&str, usize)> {
    let mut freq = std::collections::HashMap::new();

    for g in UnicodeSegmentation::graphemes(s, true) {
        *(freq.entry(g).or_insert(0)) += 1;
    }
    let mut symbols = freq.into_iter().collect::<Vec<(&str, usize)>>();
    // Equal counts fall back to the characters themselves so that the order
    // does not depend on where they appear in the input.
    symbols.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    symbols
}

/// Derives a Huffman code for `items`, a sequence of `(symbol, weight)`
/// pairs, with the default [`Config`].
///
/// A lone symbol is given the code `0`.
///
/// # Errors
///
/// See [`HuffmanTree::build`].
///
/// ```
/// use huffman_codes::*;
///
/// assert_eq!(
///     huffman_codes(Vec::<(char, usize)>::new()).unwrap_err(),
///     ErrorKind::EmptyAlphabet
/// );
/// ```
pub fn huffman_codes<S, I>(items: I) -> Result<CodeTable<S>, ErrorKind>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, usize)>,
{
    huffman_codes_with(items, &Config::default())
}

/// Like [`huffman_codes`], with explicit options.
///
/// ```
/// use huffman_codes::*;
///
/// let config = Config::default().with_tie_break(TieBreak::InsertionOrder);
/// let codes = huffman_codes_with(frequencies("abracadabra"), &config).unwrap();
/// assert_eq!(codes.len(), 5);
/// assert_eq!(codes.get(&"a").map(|code| code.len()), Some(1));
/// ```
pub fn huffman_codes_with<S, I>(items: I, config: &Config) -> Result<CodeTable<S>, ErrorKind>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, usize)>,
{
    Ok(HuffmanTree::build(items, config)?.codes())
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bitvec::prelude::*;

    #[test]
    fn frequencies() {
        assert_eq!(crate::frequencies(""), vec![]);
        assert_eq!(crate::frequencies("a"), vec![("a", 1)]);
        assert_eq!(
            crate::frequencies("aaabc"),
            vec![("a", 3), ("b", 1), ("c", 1)]
        );
        assert_eq!(
            crate::frequencies("baaac"),
            vec![("a", 3), ("b", 1), ("c", 1)]
        );
        assert_eq!(
            crate::frequencies("caaab"),
            vec![("a", 3), ("b", 1), ("c", 1)]
        );
        assert_eq!(crate::frequencies("ضَ"), vec![("ضَ", 1)]);
    }

    #[test]
    fn huffman_codes() {
        assert_eq!(
            crate::huffman_codes(vec![("a", 1)]).unwrap().get(&"a"),
            Some(&bitvec![0])
        );
        {
            let codes = crate::huffman_codes(crate::frequencies("aaaabbcc")).unwrap();
            assert_eq!(codes.get(&"a").map(|c| c.len()), Some(1));
            assert_eq!(codes.get(&"b").map(|c| c.len()), Some(2));
            assert_eq!(codes.get(&"c").map(|c| c.len()), Some(2));
            assert!(codes.is_prefix_free());
        }
        assert_eq!(
            crate::huffman_codes(vec![('x', 1), ('x', 2)]).unwrap_err(),
            ErrorKind::DuplicateSymbol { position: 1 }
        );
    }

    #[test]
    fn huffman_codes_with() {
        let config = Config::default().with_tie_break(TieBreak::InsertionOrder);
        // All ties: leaves leave the queue in input order.
        let codes = crate::huffman_codes_with(vec![('a', 1), ('b', 1), ('c', 1), ('d', 1)], &config)
            .unwrap();
        let expected = vec![
            ('a', bitvec![0, 0]),
            ('b', bitvec![0, 1]),
            ('c', bitvec![1, 0]),
            ('d', bitvec![1, 1]),
        ]
        .into_iter()
        .collect::<CodeTable<char>>();
        assert_eq!(codes, expected);
    }
}
