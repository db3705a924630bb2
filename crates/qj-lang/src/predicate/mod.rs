use crate::ast::{CmpOp, Condition, Connective, PredicateChain};
use crate::error::PredicateError;

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse bracket filter text such as `age>=18&&age<65` into a chain.
///
/// The text is scanned once from left to right; at each step the earliest of
/// `&&` / `||` decides the next split, so every term between connectives is
/// kept no matter how many there are or how they are mixed.
pub fn parse_predicate(text: &str) -> Result<PredicateChain, PredicateError> {
    let (head, mut connective, mut rest) = split_next(text);
    let mut chain = PredicateChain::new(parse_condition(head)?);
    while let Some(conn) = connective {
        let (term, next, remaining) = split_next(rest);
        chain.push(conn, parse_condition(term)?);
        connective = next;
        rest = remaining;
    }
    Ok(chain)
}

/// Parse a single `key op value` term (or the `*` wildcard).
///
/// Operators are tried in [`CmpOp::PRIORITY`] order; the first one whose
/// token occurs anywhere in the text wins and the text is split at its first
/// occurrence. A value that itself contains an operator token is mis-split.
pub fn parse_condition(text: &str) -> Result<Condition, PredicateError> {
    for op in CmpOp::PRIORITY {
        let token = op.token();
        let Some(at) = text.find(token) else {
            continue;
        };
        if op == CmpOp::Any {
            return Ok(Condition::wildcard());
        }
        return Ok(Condition {
            key: text[..at].trim().to_string(),
            op,
            value: text[at + token.len()..].trim().to_string(),
        });
    }
    Err(PredicateError::InvalidCondition {
        condition: text.trim().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split off the term before the earliest connective, returning the term, the
/// connective (if any) and the remaining text after it.
fn split_next(text: &str) -> (&str, Option<Connective>, &str) {
    match next_connective(text) {
        Some((at, conn)) => (&text[..at], Some(conn), &text[at + 2..]),
        None => (text, None, ""),
    }
}

/// Byte offset and kind of the earliest `&&` or `||` in `text`.
fn next_connective(text: &str) -> Option<(usize, Connective)> {
    let and = text.find("&&").map(|at| (at, Connective::And));
    let or = text.find("||").map(|at| (at, Connective::Or));
    match (and, or) {
        (Some(a), Some(o)) => Some(if a.0 <= o.0 { a } else { o }),
        (a, o) => a.or(o),
    }
}
