use winnow::ascii::space0;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, take_while};

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

/// Everything up to (not including) the end of the current line.
pub fn rest_of_line<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., |c: char| c != '\n' && c != '\r').parse_next(input)
}

/// A `key:` label followed by optional inline whitespace; returns the rest of
/// the line, trimmed.
pub fn labelled_value<'a>(
    label: &'static str,
) -> impl FnMut(&mut &'a str) -> ModalResult<&'a str> {
    move |input: &mut &'a str| {
        literal(label).parse_next(input)?;
        literal(":").parse_next(input)?;
        space0.parse_next(input)?;
        rest_of_line.map(|s: &'a str| s.trim()).parse_next(input)
    }
}

// ---------------------------------------------------------------------------
// Keyword matching with word boundary
// ---------------------------------------------------------------------------

/// Match an exact keyword, ensuring it's not a prefix of a longer word
/// (the next character is not alphanumeric, `_` or `-`).
pub fn kw<'a>(keyword: &'static str) -> impl FnMut(&mut &'a str) -> ModalResult<()> {
    move |input: &mut &'a str| {
        let saved = *input;
        literal(keyword).parse_next(input)?;
        if input.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            *input = saved;
            return Err(ErrMode::Backtrack(ContextError::new()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

/// Parse a non-negative integer made of ASCII digits only.
pub fn nonneg_integer(input: &mut &str) -> ModalResult<u64> {
    let saved = *input;
    let digits = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    digits.parse::<u64>().map_err(|_| {
        *input = saved;
        ErrMode::Backtrack(ContextError::new())
    })
}
