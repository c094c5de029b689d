//! Fixed lexical configuration of the expression dialect.

/// Operator characters that never appear unescaped inside a literal.
const OPERATORS: [char; 9] = ['(', ')', '{', '}', '[', ']', '|', '+', '*'];

/// The characters with special meaning in an expression.
///
/// A `Grammar` is a plain value; the parser closes over one for its whole
/// lifetime, so the dialect cannot change mid-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// The two-character "any gap" shorthand in raw input.
    pub gap: [char; 2],
    /// The single character that stands for a gap after normalization.
    pub sentinel: char,
    /// Makes the following character a literal.
    pub escape: char,
}

impl Grammar {
    pub const DEFAULT: Grammar = Grammar {
        gap: ['.', '*'],
        sentinel: '@',
        escape: '\\',
    };

    /// Returns a copy of this grammar that uses `sentinel` for gaps.
    #[must_use]
    pub const fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Returns `true` if `c` terminates a literal run.
    #[inline]
    #[must_use]
    pub fn is_reserved(&self, c: char) -> bool {
        c == self.sentinel || OPERATORS.contains(&c)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::DEFAULT
    }
}
