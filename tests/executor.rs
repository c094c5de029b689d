//! Exercises the executor boundary with a naive engine over plain text that
//! understands literals, alternation and gaps.

use std::collections::BTreeSet;
use succinct_regex::{AstNode, AstRoot, Executor, RegExMatch, parse_regex};

#[derive(Debug, PartialEq)]
struct Unsupported(&'static str);

struct NaiveExecutor<'a> {
    text: &'a str,
    root: AstRoot,
    greedy: bool,
    results: BTreeSet<RegExMatch>,
}

impl<'a> NaiveExecutor<'a> {
    fn new(text: &'a str, root: AstRoot, greedy: bool) -> Self {
        NaiveExecutor {
            text,
            root,
            greedy,
            results: BTreeSet::new(),
        }
    }

    fn spans(&self, node: &AstNode) -> Result<BTreeSet<RegExMatch>, Unsupported> {
        match node {
            AstNode::Primitive(mgram) => Ok(self
                .text
                .match_indices(mgram.as_str())
                .map(|(offset, m)| RegExMatch::new(offset, m.len()))
                .collect()),
            AstNode::Union { left, right } => {
                let mut spans = self.spans(left)?;
                spans.extend(self.spans(right)?);
                Ok(spans)
            }
            AstNode::Wildcard { before, after } => {
                let afters = self.spans(after)?;
                let mut spans = BTreeSet::new();
                for head in self.spans(before)? {
                    let tails = afters.iter().filter(|tail| tail.offset >= head.end());
                    let tail = if self.greedy {
                        tails.max_by_key(|tail| tail.end())
                    } else {
                        tails.min_by_key(|tail| tail.end())
                    };
                    if let Some(tail) = tail {
                        spans.insert(RegExMatch::new(head.offset, tail.end() - head.offset));
                    }
                }
                Ok(spans)
            }
            AstNode::Blank => Err(Unsupported("blank")),
            AstNode::Concat { .. } => Err(Unsupported("concat")),
            AstNode::Repeat { .. } => Err(Unsupported("repeat")),
            AstNode::CharRange { .. } => Err(Unsupported("char range")),
        }
    }
}

impl Executor for NaiveExecutor<'_> {
    type Error = Unsupported;

    fn execute(&mut self) -> Result<(), Self::Error> {
        self.results = self.spans(&self.root)?;
        Ok(())
    }

    fn final_results(&self) -> &BTreeSet<RegExMatch> {
        &self.results
    }
}

fn run(expression: &str, text: &str, greedy: bool) -> Vec<RegExMatch> {
    let mut executor = NaiveExecutor::new(text, parse_regex(expression).unwrap(), greedy);
    assert!(executor.final_results().is_empty());
    executor.execute().unwrap();
    executor.final_results().iter().copied().collect()
}

#[test]
fn test_literal_matches() {
    assert_eq!(
        run("ab", "abcab", true),
        [RegExMatch::new(0, 2), RegExMatch::new(3, 2)]
    );
}

#[test]
fn test_union_matches_are_ordered() {
    assert_eq!(
        run("ab|ca", "abcab", true),
        [
            RegExMatch::new(0, 2),
            RegExMatch::new(2, 2),
            RegExMatch::new(3, 2)
        ]
    );
}

#[test]
fn test_greedy_flag_is_honoured() {
    assert_eq!(
        run("a.*b", "abcab", true),
        [RegExMatch::new(0, 5), RegExMatch::new(3, 2)]
    );
    assert_eq!(
        run("a.*b", "abcab", false),
        [RegExMatch::new(0, 2), RegExMatch::new(3, 2)]
    );
}

#[test]
fn test_unsupported_nodes_fail_execution() {
    let mut executor = NaiveExecutor::new("aaa", parse_regex("a+").unwrap(), true);
    assert_eq!(executor.execute(), Err(Unsupported("repeat")));
}

#[test]
fn test_match_spans() {
    let outer = RegExMatch::new(2, 6);
    assert_eq!(outer.end(), 8);
    assert!(outer.contains(&RegExMatch::new(3, 2)));
    assert!(outer.contains(&outer));
    assert!(!outer.contains(&RegExMatch::new(7, 2)));
    assert!(RegExMatch::new(1, 9) < RegExMatch::new(2, 0));
    assert!(RegExMatch::new(2, 1) < RegExMatch::new(2, 3));
}
