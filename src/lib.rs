//! A parser for the regular expression dialect evaluated over succinct
//! (compressed, self-indexed) text stores.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod ast;
pub mod charset;
pub mod cursor;
pub mod executor;
pub mod grammar;
pub mod parser;
pub mod preprocess;

pub use self::{
    ast::{AstNode, AstRoot, NodeKind, RepeatKind},
    charset::CharSet,
    cursor::Cursor,
    executor::{Executor, RegExMatch},
    grammar::Grammar,
    parser::{Parser, parse_regex},
    preprocess::normalize,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// `eat` was asked for a character that is not next in the input.
    #[error("expected '{expected}', got {} at {pos}", describe(*actual))]
    ExpectedChar {
        pos: usize,
        expected: char,
        actual: Option<char>,
    },

    /// A character that cannot start or continue the current production.
    #[error("unexpected '{lit}' at {pos}")]
    UnexpectedChar { pos: usize, lit: char },

    /// A repetition suffix followed an empty base.
    #[error("nothing to repeat before '{lit}' at {pos}")]
    NothingToRepeat { pos: usize, lit: char },

    /// A repetition bound does not fit in a `usize`.
    #[error("repetition bound too large at {pos}")]
    RepeatBound { pos: usize },

    /// A bounded repetition whose minimum exceeds its maximum.
    #[error("invalid repetition range {{{min},{max}}} at {pos}")]
    RepeatRange { pos: usize, min: usize, max: usize },

    /// A gap sentinel with an empty expression on either side.
    #[error("invalid blank children of wildcard operator at {pos}")]
    BlankWildcard { pos: usize },

    /// An alternation with an empty branch.
    #[error("empty alternative at {pos}")]
    EmptyAlternative { pos: usize },

    /// The input ended in the middle of a production.
    #[error("unexpected end of expression at {pos}")]
    UnexpectedEndOfInput { pos: usize },

    /// Nothing is left to parse once gap sentinels are trimmed.
    #[error("empty expression")]
    EmptyExpression,
}

/// The broad class an [`Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed syntax.
    Grammar,
    /// Well-formed syntax that builds an invalid tree.
    Semantic,
    /// Reading past the end of the input.
    Bounds,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::ExpectedChar { .. }
            | Error::UnexpectedChar { .. }
            | Error::NothingToRepeat { .. }
            | Error::RepeatBound { .. } => ErrorKind::Grammar,
            Error::RepeatRange { .. }
            | Error::BlankWildcard { .. }
            | Error::EmptyAlternative { .. } => ErrorKind::Semantic,
            Error::UnexpectedEndOfInput { .. } | Error::EmptyExpression => ErrorKind::Bounds,
        }
    }

    /// The character offset into the normalized expression, if any.
    #[must_use]
    pub const fn pos(&self) -> Option<usize> {
        match self {
            Error::ExpectedChar { pos, .. }
            | Error::UnexpectedChar { pos, .. }
            | Error::NothingToRepeat { pos, .. }
            | Error::RepeatBound { pos }
            | Error::RepeatRange { pos, .. }
            | Error::BlankWildcard { pos }
            | Error::EmptyAlternative { pos }
            | Error::UnexpectedEndOfInput { pos } => Some(*pos),
            Error::EmptyExpression => None,
        }
    }
}

fn describe(c: Option<char>) -> String {
    c.map_or_else(|| "end of expression".to_string(), |c| format!("'{c}'"))
}

pub type Result<T> = std::result::Result<T, Error>;
