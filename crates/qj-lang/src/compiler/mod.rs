use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{CompiledQuery, Predicate, Segment};
use crate::error::CompileError;


/// `name[condition]` anywhere in the segment: the name is the word run right
/// before the first `[`, the condition runs to the last `]`.
static FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]*)\[(.*)\]").expect("filter pattern is valid")
});

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Compile a dotted query such as `users[age>=18].{name,email}`.
///
/// Segment classification is total (anything unrecognised becomes a field
/// access), so the only failure is a field-less filter after the first
/// segment.
pub fn compile(query: &str) -> Result<CompiledQuery, CompileError> {
    let segments: Vec<Segment> = split_segments(query)
        .into_iter()
        .map(classify_segment)
        .collect();

    for (position, seg) in segments.iter().enumerate().skip(1) {
        if let Segment::Filter { field: None, .. } = seg {
            return Err(CompileError::FilterWithoutField {
                query: query.to_string(),
                position,
            });
        }
    }

    Ok(CompiledQuery::new(query.to_string(), segments))
}

// ---------------------------------------------------------------------------
// Splitting
// ---------------------------------------------------------------------------

/// Split on `.`, except inside `[...]` so filter values like `1.5` survive.
/// A query with an unclosed `[` splits on every dot.
///
/// Always yields at least one (possibly empty) piece.
pub(crate) fn split_segments(query: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in query.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                pieces.push(&query[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth > 0 {
        return query.split('.').collect();
    }
    pieces.push(&query[start..]);
    pieces
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify one raw segment; first match wins: multi-field, filter, index,
/// field.
pub(crate) fn classify_segment(raw: &str) -> Segment {
    if let Some(fields) = multi_field(raw) {
        return Segment::MultiField(fields);
    }

    if let Some(caps) = FILTER_RE.captures(raw) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let condition = caps.get(2).map_or("", |m| m.as_str());
        return Segment::Filter {
            field: (!name.is_empty()).then(|| name.to_string()),
            predicate: Predicate::new(condition),
        };
    }

    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        // Too large for usize: can never be in range anyway.
        let index = raw.parse::<usize>().unwrap_or(usize::MAX);
        return Segment::Index(index);
    }

    Segment::Field(raw.to_string())
}

/// `{a,b,...}` spanning the whole segment with at least one comma.
///
/// A single name in braces (`{a}`) is deliberately not a projection and falls
/// through to the other forms.
fn multi_field(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains('}') || !inner.contains(',') {
        return None;
    }
    let mut fields: Vec<String> = Vec::new();
    for piece in inner.split(',') {
        let name = piece.trim();
        if !fields.iter().any(|f| f == name) {
            fields.push(name.to_string());
        }
    }
    Some(fields)
}
