#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    ZeroOrMore,                           // *
    OneOrMore,                            // +
    MinToMax { min: usize, max: usize },  // {min,max}
}

impl RepeatKind {
    /// The smallest number of repetitions accepted.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            RepeatKind::ZeroOrMore => 0,
            RepeatKind::OneOrMore => 1,
            RepeatKind::MinToMax { min, .. } => min,
        }
    }

    /// The largest number of repetitions accepted, or `None` if unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            RepeatKind::ZeroOrMore | RepeatKind::OneOrMore => None,
            RepeatKind::MinToMax { max, .. } => Some(max),
        }
    }
}

impl std::fmt::Display for RepeatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepeatKind::ZeroOrMore => f.write_str("*"),
            RepeatKind::OneOrMore => f.write_str("+"),
            RepeatKind::MinToMax { min, max } => write!(f, "{{{min},{max}}}"),
        }
    }
}
