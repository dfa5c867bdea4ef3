// A bounded binary min-heap of tree nodes, kept in a flat array where the
// children of slot `i` live at `2i + 1` and `2i + 2`.
use crate::config::TieBreak;
use crate::error::ErrorKind;
use crate::tree::Node;

#[derive(Debug, Clone)]
struct Entry<S> {
    // Creation order; only consulted by `TieBreak::InsertionOrder`.
    seq: usize,
    node: Node<S>,
}

#[derive(Debug, Clone)]
pub(crate) struct PriorityQueue<S> {
    entries: Vec<Entry<S>>,
    capacity: usize,
    tie_break: TieBreak,
    next_seq: usize,
}

impl<S> PriorityQueue<S> {
    /// Seeds the queue with one leaf per item and heapifies bottom-up.
    ///
    /// The capacity is fixed to the number of items: the Huffman loop only
    /// ever shrinks the queue.
    pub(crate) fn build<I>(items: I, tie_break: TieBreak) -> Result<Self, ErrorKind>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| Entry {
                seq,
                node: Node::Leaf { symbol, weight },
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            return Err(ErrorKind::EmptyAlphabet);
        }
        let n = entries.len();
        let mut queue = PriorityQueue {
            entries,
            capacity: n,
            tie_break,
            next_seq: n,
        };
        for i in (0..n / 2).rev() {
            queue.sift_down(i);
        }
        Ok(queue)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn is_size_one(&self) -> bool {
        self.entries.len() == 1
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn insert(&mut self, node: Node<S>) -> Result<(), ErrorKind> {
        if self.entries.len() >= self.capacity {
            return Err(ErrorKind::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { seq, node });

        let mut i = self.entries.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
        Ok(())
    }

    pub(crate) fn extract_min(&mut self) -> Option<Node<S>> {
        if self.is_empty() {
            return None;
        }
        // The last element takes the root's slot, then sinks into place.
        let min = self.entries.swap_remove(0);
        if !self.is_empty() {
            self.sift_down(0);
        }
        Some(min.node)
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.entries[a], &self.entries[b]);
        match self.tie_break {
            TieBreak::Unspecified => a.node.weight() < b.node.weight(),
            TieBreak::InsertionOrder => (a.node.weight(), a.seq) < (b.node.weight(), b.seq),
        }
    }

    #[cfg(test)]
    fn is_valid_min_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}
