use super::{
    Error, Result,
    ast::{AstNode, AstRoot, RepeatKind},
    charset::expand_class,
    cursor::Cursor,
    grammar::Grammar,
    preprocess::normalize,
};

/// Parses a raw expression into an AST using the default [`Grammar`].
///
/// # Errors
///
/// If the expression cannot be parsed, an [`Error`] is returned.
pub fn parse_regex(expression: &str) -> Result<AstRoot> {
    Parser::new(expression)?.parse()
}

/// Converts an expression into an AST by recursive descent.
///
/// The grammar, with `@` standing for the gap sentinel:
///
/// ```text
/// regex  := term ('|' regex)?
/// term   := ('@' factor | '[' class ']' ('+' | '*')? factor | factor)*
/// factor := base ('*' | '+' | '{' int ',' int '}')?
/// base   := '(' regex ')' | mgram
/// mgram  := literal+
/// ```
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Normalizes `expression` and prepares to parse it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyExpression`] if nothing is left to parse once
    /// gap shorthands are collapsed and trimmed.
    pub fn new(expression: &str) -> Result<Self> {
        Self::with_grammar(expression, Grammar::DEFAULT)
    }

    /// Like [`Parser::new`], with a custom [`Grammar`].
    pub fn with_grammar(expression: &str, grammar: Grammar) -> Result<Self> {
        let normalized = normalize(expression, &grammar)?;
        log::debug!("normalized {expression:?} to {normalized:?}");
        Ok(Parser {
            cursor: Cursor::new(&normalized, grammar),
        })
    }

    /// Converts the expression into an [`AstRoot`], consuming the parser.
    ///
    /// # Errors
    ///
    /// If the expression is invalid, an [`Error`] is returned. No partial
    /// tree is ever produced.
    pub fn parse(mut self) -> Result<AstRoot> {
        let ast = self.parse_regex()?;

        if let Some(lit) = self.cursor.peek() {
            return Err(Error::UnexpectedChar {
                pos: self.cursor.tell(),
                lit,
            });
        }

        if ast.is_blank() {
            return Err(Error::EmptyExpression);
        }

        log::trace!("parsed {} nodes: {ast:?}", ast.size());
        Ok(AstRoot::new(ast))
    }

    fn parse_regex(&mut self) -> Result<AstNode> {
        let pos = self.cursor.tell();
        let term = self.parse_term()?;

        if self.cursor.consume('|') {
            if term.is_blank() {
                return Err(Error::EmptyAlternative { pos });
            }
            let pos = self.cursor.tell();
            let rest = self.parse_regex()?;
            if rest.is_blank() {
                return Err(Error::EmptyAlternative { pos });
            }
            return Ok(AstNode::union(term, rest));
        }

        Ok(term)
    }

    fn parse_term(&mut self) -> Result<AstNode> {
        let sentinel = self.cursor.grammar().sentinel;
        let mut term = AstNode::Blank;

        while let Some(c) = self.cursor.peek()
            && c != ')'
            && c != '|'
        {
            let pos = self.cursor.tell();

            if c == sentinel {
                self.cursor.eat(sentinel)?;
                let after = self.parse_factor()?;
                term = AstNode::wildcard(term, after).ok_or(Error::BlankWildcard { pos })?;
            } else if c == '[' {
                self.cursor.eat('[')?;
                let items = self.parse_class()?;
                self.cursor.eat(']')?;
                let charset = expand_class(&items);
                let repeated = self.cursor.consume('+') || self.cursor.consume('*');
                let after = self.parse_factor()?;
                term = AstNode::char_range(term, after, charset, repeated);
            } else {
                let factor = self.parse_factor()?;
                if self.cursor.tell() == pos {
                    // Nothing here can start a factor.
                    return Err(Error::UnexpectedChar { pos, lit: c });
                }
                term = AstNode::concat(term, factor);
            }
        }

        Ok(term)
    }

    /// Collects the raw body of a bracketed class, up to but excluding the
    /// first unescaped `]`.
    fn parse_class(&mut self) -> Result<Vec<(char, bool)>> {
        let mut items = Vec::new();
        while !self.cursor.at(']') {
            if !self.cursor.more() {
                return Err(Error::ExpectedChar {
                    pos: self.cursor.tell(),
                    expected: ']',
                    actual: None,
                });
            }
            items.push(self.cursor.next_literal()?);
        }
        Ok(items)
    }

    fn parse_factor(&mut self) -> Result<AstNode> {
        let base = self.parse_base()?;

        let pos = self.cursor.tell();
        let Some(lit @ ('*' | '+' | '{')) = self.cursor.peek() else {
            return Ok(base);
        };
        if base.is_blank() {
            return Err(Error::NothingToRepeat { pos, lit });
        }

        let kind = match lit {
            '*' => {
                self.cursor.eat('*')?;
                RepeatKind::ZeroOrMore
            }
            '+' => {
                self.cursor.eat('+')?;
                RepeatKind::OneOrMore
            }
            _ => {
                self.cursor.eat('{')?;
                let min = self.cursor.next_int()?;
                self.cursor.eat(',')?;
                let max = self.cursor.next_int()?;
                self.cursor.eat('}')?;
                if min > max {
                    return Err(Error::RepeatRange { pos, min, max });
                }
                RepeatKind::MinToMax { min, max }
            }
        };

        Ok(AstNode::repeat(base, kind))
    }

    fn parse_base(&mut self) -> Result<AstNode> {
        if self.cursor.consume('(') {
            let inner = self.parse_regex()?;
            self.cursor.eat(')')?;
            return Ok(inner);
        }
        self.parse_mgram()
    }

    fn parse_mgram(&mut self) -> Result<AstNode> {
        let mut mgram = String::new();
        while let Some(c) = self.cursor.peek()
            && !self.cursor.grammar().is_reserved(c)
        {
            let (c, _) = self.cursor.next_literal()?;
            mgram.push(c);
        }

        if mgram.is_empty() {
            Ok(AstNode::Blank)
        } else {
            Ok(AstNode::Primitive(mgram))
        }
    }
}
