use super::{super::CharSet, super::Grammar, RepeatKind};
use std::fmt::{self, Write as _};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AstNode {
    /// Matches the empty string. Only ever seen on its own or as a side of
    /// a [`AstNode::CharRange`].
    Blank,

    /// A literal run (mgram) matched verbatim.
    Primitive(String),

    Concat {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    Union {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    Repeat {
        inner: Box<AstNode>,
        kind: RepeatKind,
    },

    /// `before`, then any amount of arbitrary text, then `after`. Neither
    /// side is ever [`AstNode::Blank`].
    Wildcard {
        before: Box<AstNode>,
        after: Box<AstNode>,
    },

    /// One character from `charset` (or a run of them, if `repeated`)
    /// between `before` and `after`.
    CharRange {
        before: Box<AstNode>,
        after: Box<AstNode>,
        charset: CharSet,
        repeated: bool,
    },
}

/// The variant of an [`AstNode`], without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Blank,
    Primitive,
    Concat,
    Union,
    Repeat,
    Wildcard,
    CharRange,
}

impl AstNode {
    /// Concatenates two nodes, folding away blanks and merging adjacent
    /// literal runs.
    #[must_use]
    pub fn concat(left: AstNode, right: AstNode) -> AstNode {
        match (left, right) {
            (AstNode::Blank, node) | (node, AstNode::Blank) => node,
            (AstNode::Primitive(mut a), AstNode::Primitive(b)) => {
                a.push_str(&b);
                AstNode::Primitive(a)
            }
            (left, right) => AstNode::Concat {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    #[must_use]
    pub fn union(left: AstNode, right: AstNode) -> AstNode {
        AstNode::Union {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn repeat(inner: AstNode, kind: RepeatKind) -> AstNode {
        AstNode::Repeat {
            inner: Box::new(inner),
            kind,
        }
    }

    /// Joins two nodes with a gap, or returns `None` if either is blank.
    #[must_use]
    pub fn wildcard(before: AstNode, after: AstNode) -> Option<AstNode> {
        if before.is_blank() || after.is_blank() {
            return None;
        }
        Some(AstNode::Wildcard {
            before: Box::new(before),
            after: Box::new(after),
        })
    }

    #[must_use]
    pub fn char_range(
        before: AstNode,
        after: AstNode,
        charset: CharSet,
        repeated: bool,
    ) -> AstNode {
        AstNode::CharRange {
            before: Box::new(before),
            after: Box::new(after),
            charset,
            repeated,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            AstNode::Blank => NodeKind::Blank,
            AstNode::Primitive(_) => NodeKind::Primitive,
            AstNode::Concat { .. } => NodeKind::Concat,
            AstNode::Union { .. } => NodeKind::Union,
            AstNode::Repeat { .. } => NodeKind::Repeat,
            AstNode::Wildcard { .. } => NodeKind::Wildcard,
            AstNode::CharRange { .. } => NodeKind::CharRange,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, AstNode::Blank)
    }

    /// Returns the literal of a [`AstNode::Primitive`].
    #[must_use]
    pub fn as_primitive(&self) -> Option<&str> {
        match self {
            AstNode::Primitive(mgram) => Some(mgram),
            _ => None,
        }
    }

    /// Returns the direct children of this node, left to right.
    #[must_use]
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::Blank | AstNode::Primitive(_) => Vec::new(),
            AstNode::Repeat { inner, .. } => vec![&**inner],
            AstNode::Concat { left, right } | AstNode::Union { left, right } => {
                vec![&**left, &**right]
            }
            AstNode::Wildcard { before, after } | AstNode::CharRange { before, after, .. } => {
                vec![&**before, &**after]
            }
        }
    }

    /// The number of nodes in this tree, including `self`.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(AstNode::size).sum::<usize>()
    }

    /// The length of the longest path from `self` to a leaf, counting nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(AstNode::depth)
            .max()
            .unwrap_or(0)
    }

    fn fmt_term(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let AstNode::Union { .. } = self {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn fmt_factor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Blank | AstNode::Primitive(_) | AstNode::Repeat { .. } => write!(f, "{self}"),
            _ => write!(f, "({self})"),
        }
    }
}

/// Renders the node back into expression syntax, with gaps written as `.*`.
///
/// Parsing the output gives back an equal tree. Class members are written
/// out one by one and `[..]*` is written as `[..]+`, so the text itself may
/// differ from what was originally parsed.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grammar = Grammar::DEFAULT;
        match self {
            AstNode::Blank => Ok(()),
            AstNode::Primitive(mgram) => {
                for c in mgram.chars() {
                    if grammar.is_reserved(c) || c == grammar.escape || c == grammar.gap[0] {
                        f.write_char(grammar.escape)?;
                    }
                    f.write_char(c)?;
                }
                Ok(())
            }
            AstNode::Concat { left, right } => {
                left.fmt_term(f)?;
                match (&**left, &**right) {
                    (AstNode::CharRange { after, .. }, _) if after.is_blank() => {
                        f.write_str("()")?;
                        right.fmt_factor(f)
                    }
                    // A bare literal would merge into whatever literal ends `left`.
                    (_, AstNode::Primitive(_)) => write!(f, "({right})"),
                    _ => right.fmt_factor(f),
                }
            }
            AstNode::Union { left, right } => {
                left.fmt_term(f)?;
                write!(f, "|{right}")
            }
            AstNode::Repeat { inner, kind } => write!(f, "({inner}){kind}"),
            AstNode::Wildcard { before, after } => {
                before.fmt_term(f)?;
                f.write_char(grammar.gap[0])?;
                f.write_char(grammar.gap[1])?;
                after.fmt_factor(f)
            }
            AstNode::CharRange {
                before,
                after,
                charset,
                repeated,
            } => {
                before.fmt_term(f)?;
                f.write_char('[')?;
                for c in charset.iter() {
                    if matches!(c, '[' | ']' | '-') || c == grammar.escape {
                        f.write_char(grammar.escape)?;
                    }
                    f.write_char(c)?;
                }
                f.write_char(']')?;
                if *repeated {
                    f.write_char('+')?;
                }
                after.fmt_factor(f)
            }
        }
    }
}
