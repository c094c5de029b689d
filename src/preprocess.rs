use super::{Error, Grammar, Result};

/// Collapses every gap shorthand in `raw` into the grammar's sentinel and
/// trims sentinels from both ends of the result.
///
/// A gap at either end of the whole expression constrains nothing, so it is
/// dropped. Escaped characters are copied through untouched: `\.*` stays a
/// literal dot followed by a star, and an escaped trailing sentinel is kept.
///
/// # Errors
///
/// Returns [`Error::EmptyExpression`] if nothing remains after trimming.
pub fn normalize(raw: &str, grammar: &Grammar) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    // Whether the last character pushed to `out` is escaped.
    let mut last_escaped = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == grammar.escape {
            out.push(c);
            if let Some(next) = chars.next() {
                out.push(next);
                last_escaped = true;
            } else {
                last_escaped = false;
            }
            continue;
        }

        last_escaped = false;
        if c == grammar.gap[0] && chars.next_if_eq(&grammar.gap[1]).is_some() {
            out.push(grammar.sentinel);
        } else {
            out.push(c);
        }
    }

    while out.ends_with(grammar.sentinel) && !last_escaped {
        out.pop();
        last_escaped = is_escaped(&out, grammar.escape);
    }

    let trimmed = out.trim_start_matches(grammar.sentinel);
    if trimmed.is_empty() {
        log::debug!("expression {raw:?} is empty after normalization");
        return Err(Error::EmptyExpression);
    }

    Ok(trimmed.to_string())
}

/// Returns `true` if the final character of `s` is the target of an escape.
fn is_escaped(s: &str, escape: char) -> bool {
    let mut chars = s.chars().rev();
    if chars.next().is_none() {
        return false;
    }
    chars.take_while(|&c| c == escape).count() % 2 == 1
}
