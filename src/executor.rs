//! The boundary between the parser and a matching engine.
//!
//! Engines that evaluate an [`AstRoot`](crate::AstRoot) against a text
//! index implement [`Executor`]. None is provided here.

use std::collections::BTreeSet;

/// A single match, as a span of the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegExMatch {
    /// Offset of the first matched character.
    pub offset: usize,
    /// Number of matched characters.
    pub length: usize,
}

impl RegExMatch {
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        RegExMatch { offset, length }
    }

    /// The offset one past the last matched character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    #[must_use]
    pub const fn contains(&self, other: &RegExMatch) -> bool {
        self.offset <= other.offset && other.end() <= self.end()
    }
}

/// A matching engine, run in two phases: [`execute`](Executor::execute)
/// does the work, [`final_results`](Executor::final_results) reads it.
///
/// Implementors take the tree, the index and whether to match greedily at
/// construction. Results are ordered by offset, then length.
pub trait Executor {
    type Error;

    fn execute(&mut self) -> Result<(), Self::Error>;

    /// The matches found by the last call to `execute`.
    fn final_results(&self) -> &BTreeSet<RegExMatch>;
}
