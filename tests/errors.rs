use succinct_regex::{Error, ErrorKind, parse_regex};

fn parse_err(expression: &str) -> Error {
    match parse_regex(expression) {
        Ok(ast) => panic!("Parser accepted {expression:?} as {ast:?}"),
        Err(err) => err,
    }
}

#[test]
fn test_unbalanced_group() {
    let err = parse_err("(a");
    assert_eq!(
        err,
        Error::ExpectedChar {
            pos: 2,
            expected: ')',
            actual: None
        }
    );
    assert_eq!(err.kind(), ErrorKind::Grammar);
    assert_eq!(err.to_string(), "expected ')', got end of expression at 2");

    assert_eq!(
        parse_err("((a)b"),
        Error::ExpectedChar {
            pos: 5,
            expected: ')',
            actual: None
        }
    );
}

#[test]
fn test_trailing_input() {
    assert_eq!(parse_err("a)b"), Error::UnexpectedChar { pos: 1, lit: ')' });
    assert_eq!(parse_err("a]"), Error::UnexpectedChar { pos: 1, lit: ']' });
    assert_eq!(parse_err("ab}"), Error::UnexpectedChar { pos: 2, lit: '}' });
}

#[test]
fn test_nothing_to_repeat() {
    assert_eq!(parse_err("*a"), Error::NothingToRepeat { pos: 0, lit: '*' });
    assert_eq!(parse_err("a|+"), Error::NothingToRepeat { pos: 2, lit: '+' });
    assert_eq!(parse_err("()*"), Error::NothingToRepeat { pos: 2, lit: '*' });
    assert_eq!(parse_err("a**"), Error::NothingToRepeat { pos: 2, lit: '*' });
    assert_eq!(parse_err("{1,2}"), Error::NothingToRepeat { pos: 0, lit: '{' });
}

#[test]
fn test_bad_repetition_bounds() {
    assert_eq!(
        parse_err("a{5,2}"),
        Error::RepeatRange {
            pos: 1,
            min: 5,
            max: 2
        }
    );
    assert_eq!(parse_err("a{5,2}").kind(), ErrorKind::Semantic);
    assert_eq!(
        parse_err("a{2}"),
        Error::ExpectedChar {
            pos: 3,
            expected: ',',
            actual: Some('}')
        }
    );
    assert_eq!(
        parse_err("a{,2}"),
        Error::ExpectedChar {
            pos: 2,
            expected: '0',
            actual: Some(',')
        }
    );
    assert_eq!(
        parse_err("a{1,2"),
        Error::ExpectedChar {
            pos: 5,
            expected: '}',
            actual: None
        }
    );
    assert_eq!(
        parse_err("a{1,99999999999999999999999}"),
        Error::RepeatBound { pos: 4 }
    );
}

#[test]
fn test_blank_wildcard() {
    let err = parse_err("(.*a)b");
    assert_eq!(err, Error::BlankWildcard { pos: 1 });
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(
        err.to_string(),
        "invalid blank children of wildcard operator at 1"
    );

    assert_eq!(parse_err("(a.*)b"), Error::BlankWildcard { pos: 2 });
    assert_eq!(parse_err("a|.*b"), Error::BlankWildcard { pos: 2 });
    assert_eq!(parse_err("a.*()"), Error::BlankWildcard { pos: 1 });
}

#[test]
fn test_empty_alternative() {
    assert_eq!(parse_err("a|"), Error::EmptyAlternative { pos: 2 });
    assert_eq!(parse_err("|a"), Error::EmptyAlternative { pos: 0 });
    assert_eq!(parse_err("(a||b)"), Error::EmptyAlternative { pos: 3 });
    assert_eq!(parse_err("a|").kind(), ErrorKind::Semantic);
}

#[test]
fn test_unterminated_class() {
    assert_eq!(
        parse_err("[ab"),
        Error::ExpectedChar {
            pos: 3,
            expected: ']',
            actual: None
        }
    );
    assert_eq!(
        parse_err(r"x[a\]"),
        Error::ExpectedChar {
            pos: 5,
            expected: ']',
            actual: None
        }
    );
}

#[test]
fn test_end_of_input() {
    let err = parse_err("ab\\");
    assert_eq!(err, Error::UnexpectedEndOfInput { pos: 3 });
    assert_eq!(err.kind(), ErrorKind::Bounds);
    assert_eq!(err.pos(), Some(3));
    assert_eq!(
        parse_err("[a\\"),
        Error::UnexpectedEndOfInput { pos: 3 }
    );
}

#[test]
fn test_empty_expression() {
    for expression in ["", ".*", ".*.*", "@@", "()", "(())"] {
        let err = parse_err(expression);
        assert_eq!(err, Error::EmptyExpression, "for {expression:?}");
        assert_eq!(err.kind(), ErrorKind::Bounds);
        assert_eq!(err.pos(), None);
    }
}
