//! Character class types.

use std::collections::BTreeSet;

/// A fully expanded character class.
///
/// Members are kept in code point order without duplicates, so two classes
/// that accept the same characters compare equal however they were written.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Creates a new empty character set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet {
            chars: BTreeSet::new(),
        }
    }

    /// Adds the given character to the character set.
    #[inline]
    pub fn add_char(&mut self, c: char) {
        self.chars.insert(c);
    }

    /// Adds `start`, `end` and every character strictly between them.
    ///
    /// A reversed range has nothing between its endpoints, so only the two
    /// endpoints are added. Code points in between that are not valid
    /// characters (surrogates) are skipped. The set holds every member
    /// explicitly: the full range `\0-\u{10FFFF}` is over a million entries.
    pub fn add_range(&mut self, start: char, end: char) {
        self.chars.insert(start);
        self.chars.insert(end);
        if start < end {
            self.chars
                .extend((u32::from(start) + 1..u32::from(end)).filter_map(char::from_u32));
        }
    }

    /// Returns `true` if the character set contains the given character.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterates the members in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet {
            chars: iter.into_iter().collect(),
        }
    }
}

/// Expands the body of a bracketed class into a [`CharSet`].
///
/// `items` holds the class body as `(char, escaped)` pairs. An unescaped
/// `-` between two unescaped characters stands for every character between
/// them; anywhere else, and for escaped endpoints, it is a literal `-`. An
/// empty body gives an empty set.
#[must_use]
pub fn expand_class(items: &[(char, bool)]) -> CharSet {
    let mut set = CharSet::new();
    let mut i = 0;

    while i < items.len() {
        let (c, escaped) = items[i];
        if c == '-'
            && !escaped
            && i > 0
            && let (Some(&(start, false)), Some(&(end, false))) =
                (items.get(i - 1), items.get(i + 1))
        {
            set.add_range(start, end);
            i += 2;
            continue;
        }
        set.add_char(c);
        i += 1;
    }

    set
}
