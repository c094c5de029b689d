use super::{Error, Grammar, Result};

/// A one-character lookahead over a normalized expression.
///
/// Positions are character offsets, not byte offsets.
pub struct Cursor {
    input: Vec<char>,
    pos: usize,
    grammar: Grammar,
}

impl Cursor {
    #[must_use]
    pub fn new(input: &str, grammar: Grammar) -> Self {
        Cursor {
            input: input.chars().collect(),
            pos: 0,
            grammar,
        }
    }

    #[inline]
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The offset of the next unconsumed character.
    #[inline]
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Returns `true` if there is unconsumed input.
    #[inline]
    #[must_use]
    pub fn more(&self) -> bool {
        self.pos < self.input.len()
    }

    /// Returns the next character without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Returns `true` if the next character is `c`.
    #[inline]
    #[must_use]
    pub fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// # Errors
    ///
    /// If the next character is anything else, or there is no more input,
    /// [`Error::ExpectedChar`] is returned and nothing is consumed.
    pub fn eat(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            actual => Err(Error::ExpectedChar {
                pos: self.pos,
                expected,
                actual,
            }),
        }
    }

    /// Consumes `expected` if it is the next character and reports whether
    /// it did.
    pub fn consume(&mut self, expected: char) -> bool {
        let found = self.at(expected);
        if found {
            self.pos += 1;
        }
        found
    }

    /// Consumes and returns the next character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEndOfInput`] if there is no more input.
    pub fn next(&mut self) -> Result<char> {
        let c = self
            .peek()
            .ok_or(Error::UnexpectedEndOfInput { pos: self.pos })?;
        self.pos += 1;
        Ok(c)
    }

    /// Consumes the next literal character, resolving an escape.
    ///
    /// Returns the character and whether it was escaped.
    pub fn next_literal(&mut self) -> Result<(char, bool)> {
        if self.consume(self.grammar.escape) {
            Ok((self.next()?, true))
        } else {
            Ok((self.next()?, false))
        }
    }

    /// Consumes a run of ASCII digits as a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpectedChar`] if the run is empty and
    /// [`Error::RepeatBound`] if the value overflows.
    pub fn next_int(&mut self) -> Result<usize> {
        let start = self.pos;
        let mut num: usize = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            num = num
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or(Error::RepeatBound { pos: start })?;
            self.pos += 1;
        }

        if self.pos == start {
            return Err(Error::ExpectedChar {
                pos: start,
                expected: '0',
                actual: self.peek(),
            });
        }

        Ok(num)
    }
}
