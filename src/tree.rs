use std::collections::HashSet;
use std::hash::Hash;

use crate::config::Config;
use crate::error::ErrorKind;
use crate::queue::PriorityQueue;

/// A node of a Huffman tree.
///
/// Leaves carry the input symbols. Internal nodes own exactly two subtrees
/// and weigh as much as both of them together, so every tree built from
/// these is a full binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Joins two subtrees under a new internal node, `left` on the `0` edge.
    pub fn merge(left: Node<S>, right: Node<S>) -> Result<Node<S>, ErrorKind> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(ErrorKind::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// A finished Huffman tree: the result of repeatedly merging the two
/// lightest nodes until one is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S> HuffmanTree<S> {
    /// Builds the tree for `items`, a sequence of `(symbol, weight)` pairs.
    ///
    /// With a single item the returned tree is just that leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_codes::{Config, HuffmanTree};
    ///
    /// let tree = HuffmanTree::build(vec![('A', 5), ('B', 1), ('C', 6), ('D', 3)], &Config::default())
    ///     .unwrap();
    /// assert_eq!(tree.weight(), 15);
    /// assert_eq!(tree.leaf_count(), 4);
    /// assert_eq!(tree.internal_count(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyAlphabet`] without items,
    /// [`ErrorKind::DuplicateSymbol`] if duplicates are rejected and a symbol
    /// repeats, [`ErrorKind::WeightOverflow`] if the weights sum past
    /// `usize::MAX`.
    pub fn build<I>(items: I, config: &Config) -> Result<Self, ErrorKind>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Eq + Hash,
    {
        let items = items.into_iter().collect::<Vec<_>>();
        if config.reject_duplicates {
            let mut seen = HashSet::with_capacity(items.len());
            if let Some(position) = items.iter().position(|(s, _)| !seen.insert(s)) {
                return Err(ErrorKind::DuplicateSymbol { position });
            }
        }

        let mut queue = PriorityQueue::build(items, config.tie_break)?;
        log::debug!(
            "building huffman tree over {} symbols ({:?} tie-break)",
            queue.capacity(),
            config.tie_break
        );
        while !queue.is_size_one() {
            let (left, right) = match (queue.extract_min(), queue.extract_min()) {
                (Some(left), Some(right)) => (left, right),
                _ => unreachable!("a queue larger than one yields two nodes"),
            };
            let merged = Node::merge(left, right)?;
            log::trace!(
                "merged two nodes into weight {}, {} left in queue",
                merged.weight(),
                queue.len() + 1
            );
            queue.insert(merged)?;
        }
        let root = match queue.extract_min() {
            Some(root) => root,
            None => unreachable!("the merge loop leaves exactly one node"),
        };

        let tree = HuffmanTree { root };
        log::debug!(
            "huffman tree built: weight {}, depth {}",
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// The root's weight, which is the sum of all input weights.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes().filter(|n| !n.is_leaf()).count()
    }

    /// Number of edges on the longest root-to-leaf path; `0` for a lone leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    // Pre-order walk over every node.
    fn nodes(&self) -> impl Iterator<Item = &Node<S>> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Node::Internal { left, right, .. } = node {
                stack.push(right.as_ref());
                stack.push(left.as_ref());
            }
            Some(node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;

    fn leaf(symbol: char, weight: usize) -> Node<char> {
        Node::Leaf { symbol, weight }
    }

    fn internal(left: Node<char>, right: Node<char>) -> Node<char> {
        Node::merge(left, right).unwrap()
    }

    #[test]
    fn weight() {
        assert_eq!(leaf('s', 3).weight(), 3);
        assert_eq!(
            internal(leaf('a', 2), internal(leaf('b', 1), leaf('c', 1))).weight(),
            4
        );
    }

    #[test]
    fn merge() {
        assert_eq!(
            Node::merge(leaf('a', usize::MAX), leaf('b', 1)),
            Err(ErrorKind::WeightOverflow)
        );
        assert_eq!(
            Node::merge(leaf('a', 1), leaf('b', 2)).unwrap(),
            Node::Internal {
                weight: 3,
                left: Box::new(leaf('a', 1)),
                right: Box::new(leaf('b', 2)),
            }
        );
    }

    #[test]
    fn build() {
        // 1 + 3 = 4, 4 + 5 = 9, 6 + 9 = 15.
        let tree = HuffmanTree::build(
            vec![('A', 5), ('B', 1), ('C', 6), ('D', 3)],
            &Config::default(),
        )
        .unwrap();
        assert_eq!(
            tree.root(),
            &internal(
                leaf('C', 6),
                internal(internal(leaf('B', 1), leaf('D', 3)), leaf('A', 5))
            )
        );
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn single_symbol() {
        let tree = HuffmanTree::build(vec![('A', 5)], &Config::default()).unwrap();
        assert_eq!(tree.into_root(), leaf('A', 5));
    }

    #[test]
    fn empty_alphabet() {
        assert_eq!(
            HuffmanTree::<char>::build(vec![], &Config::default()),
            Err(ErrorKind::EmptyAlphabet)
        );
    }

    #[test]
    fn duplicate_symbol() {
        let items = vec![('a', 1), ('b', 2), ('a', 3)];
        assert_eq!(
            HuffmanTree::build(items.clone(), &Config::default()),
            Err(ErrorKind::DuplicateSymbol { position: 2 })
        );
        let tree =
            HuffmanTree::build(items, &Config::default().with_duplicate_check(false)).unwrap();
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn weight_overflow() {
        assert_eq!(
            HuffmanTree::build(vec![('a', usize::MAX), ('b', 1)], &Config::default()),
            Err(ErrorKind::WeightOverflow)
        );
    }

    #[test]
    fn node_counts() {
        let tree = HuffmanTree::build(
            "abcdefgh".chars().zip(1..),
            &Config::default().with_tie_break(TieBreak::InsertionOrder),
        )
        .unwrap();
        assert_eq!(tree.leaf_count(), 8);
        assert_eq!(tree.internal_count(), 7);
        assert_eq!(tree.weight(), 36);
    }

    #[test]
    fn skewed() {
        // Fibonacci weights force one leaf off at every level.
        let weights = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        let tree = HuffmanTree::build(
            (0u8..).zip(weights.iter().copied()),
            &Config::default().with_tie_break(TieBreak::InsertionOrder),
        )
        .unwrap();
        assert_eq!(tree.depth(), weights.len() - 1);
    }
}
