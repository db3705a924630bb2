use qj_lang::{CompiledQuery, Predicate, Segment, compile};
use serde_json::{Map, Value};

use crate::error::{ExecError, ExecResult, QueryError};
use crate::eval::{eval_chain, lookup};


// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run a compiled query against a document.
///
/// The document is folded through the segments in order; `Ok(None)` means a
/// lookup found nothing. An absent value passes through the remaining
/// segments untouched. The input is never modified.
pub fn execute(document: &Value, compiled: &CompiledQuery) -> ExecResult<Option<Value>> {
    compiled
        .segments()
        .iter()
        .enumerate()
        .try_fold(Some(document.clone()), |current, (position, segment)| {
            let Some(current) = current else {
                return Ok(None);
            };
            qj_trace!(
                pipe,
                position,
                kind = segment.kind(),
                input = value_kind(&current),
                "apply segment"
            );
            apply_segment(current, segment, position)
        })
}

/// Compile `query` and run it once against `document`.
pub fn query(document: &Value, query: &str) -> Result<Option<Value>, QueryError> {
    let compiled = compile(query)?;
    Ok(execute(document, &compiled)?)
}

/// JSON type name used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Segment transforms
// ---------------------------------------------------------------------------

/// Apply one segment to the current value, producing the next one.
pub(crate) fn apply_segment(
    current: Value,
    segment: &Segment,
    position: usize,
) -> ExecResult<Option<Value>> {
    match segment {
        Segment::Field(name) => Ok(apply_field(current, name)),
        Segment::Index(index) => apply_index(current, *index, position),
        Segment::MultiField(fields) => Ok(Some(apply_multi_field(current, fields))),
        Segment::Filter { field, predicate } => {
            apply_filter(current, field.as_deref(), predicate, position).map(Some)
        }
    }
}

fn apply_field(current: Value, name: &str) -> Option<Value> {
    match current {
        Value::Array(items) => Some(Value::Array(
            items
                .into_iter()
                .filter_map(|item| take_field(item, name))
                .collect(),
        )),
        Value::Object(_) => take_field(current, name),
        // Field access on a scalar is a no-op.
        scalar => Some(scalar),
    }
}

fn apply_index(current: Value, index: usize, position: usize) -> ExecResult<Option<Value>> {
    match current {
        Value::Array(items) => Ok(items.into_iter().nth(index)),
        other => Err(ExecError::IndexNonArray {
            position,
            index,
            found: value_kind(&other),
        }),
    }
}

fn apply_multi_field(current: Value, fields: &[String]) -> Value {
    match current {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| Value::Object(project(item, fields)))
                .collect(),
        ),
        obj @ Value::Object(_) => Value::Object(project(obj, fields)),
        scalar => scalar,
    }
}

fn apply_filter(
    current: Value,
    field: Option<&str>,
    predicate: &Predicate,
    position: usize,
) -> ExecResult<Value> {
    let first_use = !predicate.is_parsed();
    let chain = predicate
        .chain()
        .map_err(|source| ExecError::Predicate { position, source })?;
    if first_use {
        qj_debug!(
            pipe,
            position,
            predicate = predicate.source(),
            terms = chain.len(),
            "filter predicate parsed"
        );
    }

    let target = match field {
        Some(name) => lookup(&current, name),
        None => Some(&current),
    };
    let kept: Option<Vec<Value>> = match target {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter(|item| eval_chain(item, chain))
                .cloned()
                .collect(),
        ),
        _ => None,
    };
    // A non-array target leaves the value unchanged.
    Ok(kept.map(Value::Array).unwrap_or(current))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn take_field(value: Value, name: &str) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove(name),
        _ => None,
    }
}

/// Fresh object holding only the listed fields the value actually has.
fn project(value: Value, fields: &[String]) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(mut map) = value {
        for field in fields {
            if let Some(v) = map.remove(field) {
                out.insert(field.clone(), v);
            }
        }
    }
    out
}
