/// How the priority queue orders nodes of equal weight.
///
/// Every rule yields a code of the same, minimal, weighted length. They only
/// differ in *which* of the equally good codes comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Compare weights only. Equal weights end up wherever the heap's array
    /// comparisons leave them, so the assignment among ties is not part of
    /// the contract.
    #[default]
    Unspecified,
    /// Compare weights, then creation order: leaves by their position in the
    /// input, merged nodes after all leaves in the order they were built.
    /// The same input sequence always produces the same code table.
    InsertionOrder,
}

/// Options for building a code.
///
/// ```
/// use huffman_codes::{Config, TieBreak};
///
/// let config = Config::default()
///     .with_tie_break(TieBreak::InsertionOrder)
///     .with_duplicate_check(false);
/// assert_eq!(config.tie_break, TieBreak::InsertionOrder);
/// assert!(!config.reject_duplicates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    pub tie_break: TieBreak,
    /// Fail with [`ErrorKind::DuplicateSymbol`](crate::ErrorKind::DuplicateSymbol)
    /// when a symbol is given twice. When disabled, duplicates are the
    /// caller's problem: only the last code derived for a symbol survives in
    /// the table.
    pub reject_duplicates: bool,
}

impl Config {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_duplicate_check(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tie_break: TieBreak::Unspecified,
            reject_duplicates: true,
        }
    }
}
