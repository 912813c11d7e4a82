//! Field sanitizers for raw catalog rows. Each function is total: malformed
//! input degrades to the field default and never fails the caller.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::data::record::{DatasetRecord, CANONICAL_FIELDS};

fn year_re() -> &'static Regex {
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();
    YEAR_RE.get_or_init(|| Regex::new(r"\d{4}").expect("valid year regex"))
}

/// Truthiness as the catalog authors rely on it: null, false, zero, empty
/// string, empty array and empty object all count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// String form of a value: strings verbatim, everything else in its JSON
/// text rendering.
fn string_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce any value into an ordered list of non-empty trimmed strings.
/// Scalars become a single-element list; null/absent becomes an empty one.
pub fn to_string_array(value: Option<&Value>) -> Vec<String> {
    let value = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(v) => v,
    };
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| string_form(item).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        scalar => {
            let s = string_form(scalar).trim().to_string();
            if s.is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
    }
}

/// Coerce dirty numeric input ("1,234", " 12 345 ", "3.5 TB") into an
/// integer, truncating toward zero. Anything unparseable yields 0.
pub fn sanitize_number(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().unwrap_or(0.0) as i64,
        },
        Some(other) => parse_dirty_number(&string_form(other)),
    }
}

fn parse_dirty_number(raw: &str) -> i64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match cleaned.as_str() {
        "" | "-" | "." | "-." | ".-" => 0,
        _ => match cleaned.parse::<f64>() {
            Ok(f) if f.is_finite() => f as i64,
            _ => 0,
        },
    }
}

/// First window of 4 consecutive digits anywhere in the string form, e.g.
/// "2021-05-01" -> "2021". This is a literal substring scan, not calendar
/// extraction: "20215" also yields "2021". Falsy input yields None.
pub fn sanitize_year(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| !is_falsy(v))?;
    let s = string_form(value);
    year_re().find(&s).map(|m| m.as_str().to_string())
}

/// Keep only http(s) URLs; anything else (other scheme, no scheme, garbage)
/// becomes an empty string. The accepted value is returned trimmed but
/// otherwise unchanged.
pub fn sanitize_url(value: Option<&Value>) -> String {
    let value = match value {
        Some(v) if !is_falsy(v) => v,
        _ => return String::new(),
    };
    let s = string_form(value).trim().to_string();
    match url_scheme(&s) {
        Some(scheme)
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            s
        }
        _ => String::new(),
    }
}

/// Scheme component of a URL-shaped string: a leading ASCII letter followed
/// by letters, digits, `+`, `-` or `.`, up to the first `:`.
fn url_scheme(s: &str) -> Option<&str> {
    let (scheme, _) = s.split_once(':')?;
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

/// The raw field itself, or its fallback when the field is absent or falsy.
/// Fallbacks resolve before sanitization: a present-but-invalid primary wins
/// over a valid fallback.
fn field_or_fallback<'a>(
    raw: &'a Map<String, Value>,
    primary: &str,
    fallback: &str,
) -> Option<&'a Value> {
    match raw.get(primary) {
        Some(v) if !is_falsy(v) => Some(v),
        _ => raw.get(fallback),
    }
}

/// Truthy values in their string form, everything else an empty string.
fn string_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(v) if !is_falsy(v) => string_form(v),
        _ => String::new(),
    }
}

/// Normalize one raw row into the canonical record shape. Canonical fields
/// are derived per the schema; all other fields pass through unchanged.
pub fn normalize_record(raw: &Map<String, Value>) -> DatasetRecord {
    let mut extra = raw.clone();
    for field in CANONICAL_FIELDS {
        extra.remove(field);
    }

    DatasetRecord {
        name: string_or_empty(raw.get("name")),
        organization: string_or_empty(raw.get("organization")),
        organ: string_or_empty(raw.get("organ")),
        license: string_or_empty(raw.get("license")),
        link: sanitize_url(field_or_fallback(raw, "link", "homepage_url")),
        dimension: to_string_array(raw.get("dimension")),
        modality: to_string_array(raw.get("modality")),
        task: to_string_array(raw.get("task")),
        data_volume_total: sanitize_number(raw.get("data_volume_total")),
        year: sanitize_year(field_or_fallback(raw, "year", "release_date")).unwrap_or_default(),
        extra,
    }
}
