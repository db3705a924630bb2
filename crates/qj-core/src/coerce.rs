//! Loose conversions used by filter comparisons.
//!
//! Numeric comparisons convert both sides to `f64`, with NaN standing for
//! "not a number". Equality compares a JSON value against the raw text of a
//! condition, converting across string/number/boolean.

use serde_json::Value;

/// Numeric form of a looked-up value. Absent and objects are NaN, `null` is 0.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => bool_number(*b),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => str_to_number(s),
        Some(v @ Value::Array(_)) => str_to_number(&loose_string(v)),
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// Numeric form of text: trimmed, empty is 0, accepts decimal with optional
/// sign and exponent, `0x`/`0o`/`0b` integers and `Infinity`.
pub fn str_to_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return radix_number(digits, radix);
        }
    }
    // f64::from_str also accepts `inf`/`nan` spellings; only plain decimal
    // notation is a number here.
    if !t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Loose equality between a looked-up value and condition text.
///
/// Absent and `null` never equal anything. Booleans equal `"true"`/`"false"`
/// as well as their numeric forms 1/0.
pub fn loose_eq(value: Option<&Value>, text: &str) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => s == text,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n == str_to_number(text)),
        Some(Value::Bool(b)) => match text.trim() {
            "true" => *b,
            "false" => !*b,
            _ => bool_number(*b) == str_to_number(text),
        },
        Some(v @ Value::Array(_)) => loose_string(v) == text,
        Some(Value::Object(_)) => text == OBJECT_STRING,
    }
}

/// String form of a value as used by loose comparison: arrays join their
/// elements with `,`, `null` is empty, objects are `[object Object]`.
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => number_string(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(loose_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => OBJECT_STRING.to_string(),
    }
}

const OBJECT_STRING: &str = "[object Object]";

fn bool_number(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn number_string(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

fn radix_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}
