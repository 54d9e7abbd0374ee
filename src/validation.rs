//! Input validation and log windowing.
//!
//! Numeric fields follow leading-integer parsing: leading whitespace and a
//! sign are accepted, then digits up to the first non-digit. `"5.7"` and
//! `"5abc"` both read as 5.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{CreateExercise, DurationInput, LogEntry, NewExercise};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MISSING_FIELDS: &str = "Description and duration are required";
pub const INVALID_DURATION: &str = "Duration must be a positive number";
pub const INVALID_DATE: &str = "Invalid date format, expected YYYY-MM-DD";

/// Parse the leading base-10 integer of `s`, ignoring anything after it.
/// Returns `None` when no digit follows the optional sign or the value
/// does not fit in an `i64`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Whether a JSON value counts as provided: `null`, `false`, zero and the
/// empty string do not.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer part of a number as its decimal text would read. Magnitudes
/// written in exponent notation (at least 1e21, or below 1e-6) read only
/// the mantissa's leading digits; other values truncate toward zero and
/// must fit in an `i64`.
fn number_to_int(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6) {
        return parse_leading_int(&format!("{:e}", n));
    }

    let truncated = n.trunc();
    (truncated >= i64::MIN as f64 && truncated < i64::MAX as f64).then(|| truncated as i64)
}

impl DurationInput {
    /// Whether the value counts as "not provided": zero, NaN, an empty
    /// string, `false` or `null`.
    pub fn is_blank(&self) -> bool {
        match self {
            DurationInput::Number(n) => *n == 0.0 || n.is_nan(),
            DurationInput::Text(s) => s.is_empty(),
            DurationInput::Other(v) => !is_present(v),
        }
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            DurationInput::Number(n) => number_to_int(*n),
            DurationInput::Text(s) => parse_leading_int(s),
            DurationInput::Other(_) => None,
        }
    }
}

pub fn validate_duration(input: &DurationInput) -> Result<i64> {
    match input.as_integer() {
        Some(duration) if duration > 0 => Ok(duration),
        _ => Err(AppError::Validation(INVALID_DURATION.to_string())),
    }
}

/// Accept `date` only when it is a real calendar day written exactly as
/// `YYYY-MM-DD`. A missing or empty date falls back to `today`.
pub fn validate_date(date: Option<&str>, today: NaiveDate) -> Result<String> {
    let date = match date {
        Some(d) if !d.is_empty() => d,
        _ => return Ok(today.format(DATE_FORMAT).to_string()),
    };

    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) if parsed.format(DATE_FORMAT).to_string() == date => Ok(date.to_string()),
        _ => Err(AppError::Validation(INVALID_DATE.to_string())),
    }
}

/// A present `date` must be a string; anything else is a bad format.
fn validate_date_value(date: Option<Value>, today: NaiveDate) -> Result<String> {
    match date {
        Some(Value::String(s)) => validate_date(Some(&s), today),
        Some(other) if is_present(&other) => Err(AppError::Validation(INVALID_DATE.to_string())),
        _ => validate_date(None, today),
    }
}

/// Run the body checks in order; the first failure wins.
pub fn validate_new_exercise(body: CreateExercise, today: NaiveDate) -> Result<NewExercise> {
    let (description, duration) = match (body.description, body.duration) {
        (Some(description), Some(duration))
            if is_present(&description) && !duration.is_blank() =>
        {
            (description, duration)
        }
        _ => return Err(AppError::Validation(MISSING_FIELDS.to_string())),
    };

    let duration = validate_duration(&duration)?;
    let date = validate_date_value(body.date, today)?;

    // Non-string descriptions are stored as their JSON text
    let description = match description {
        Value::String(s) => s,
        other => other.to_string(),
    };

    Ok(NewExercise {
        description,
        duration,
        date,
    })
}

/// Keep entries inside the inclusive `[from, to]` window. Dates are fixed
/// width, so string order is calendar order.
pub fn apply_window(entries: Vec<LogEntry>, from: Option<&str>, to: Option<&str>) -> Vec<LogEntry> {
    entries
        .into_iter()
        .filter(|e| from.map_or(true, |from| e.date.as_str() >= from))
        .filter(|e| to.map_or(true, |to| e.date.as_str() <= to))
        .collect()
}

/// Truncate to the first `limit` entries. A limit with no leading integer
/// yields nothing; a negative limit drops that many entries from the end.
pub fn apply_limit(mut entries: Vec<LogEntry>, limit: Option<&str>) -> Vec<LogEntry> {
    let Some(limit) = limit else {
        return entries;
    };

    let keep = match parse_leading_int(limit) {
        None => 0,
        Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
        Some(n) => entries
            .len()
            .saturating_sub(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX)),
    };

    entries.truncate(keep);
    entries
}
