//! Lenient field readers shared by the record parsers.
//!
//! The backend serializes Mongo documents, so ids may arrive as plain
//! strings, numbers or `{"$oid": "..."}` wrappers, and dates as plain ISO
//! dates, RFC-3339 timestamps, naive timestamps or `{"$date": ...}`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::RecordError;

pub(crate) type Object = Map<String, Value>;

pub(crate) fn as_object<'a>(value: &'a Value, kind: &'static str) -> Result<&'a Object, RecordError> {
    value.as_object().ok_or(RecordError::NotAnObject { kind })
}

/// First present, non-null value among `keys`.
pub(crate) fn first<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Identifier-like value rendered as a non-blank string.
pub(crate) fn id_like(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(obj) => return obj.get("$oid").and_then(id_like),
        _ => return None,
    };
    (!raw.is_empty()).then_some(raw)
}

/// The record id from `id` or `_id`.
pub(crate) fn record_id(obj: &Object, kind: &'static str) -> Result<String, RecordError> {
    match first(obj, &["id", "_id"]) {
        None => Err(RecordError::MissingField { kind, field: "id" }),
        Some(value) => id_like(value).ok_or_else(|| RecordError::InvalidValue {
            kind,
            field: "id",
            value: value.to_string(),
        }),
    }
}

/// First non-blank string among `keys`. Numbers are stringified.
pub(crate) fn opt_string(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Calendar date from any of the accepted encodings.
pub(crate) fn date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Object(obj) => obj.get("$date").and_then(date),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date())
}

/// UTC timestamp; naive timestamps and bare dates are taken as UTC.
pub(crate) fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let raw = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(dt) = raw.parse::<NaiveDateTime>() {
                return Some(dt.and_utc());
            }
            raw.parse::<NaiveDate>()
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        }
        Value::Object(obj) => obj.get("$date").and_then(timestamp),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

/// Every element of an array, non-strings rendered as JSON text.
///
/// Each element counts as one flag whatever its type, so the list length
/// always matches the array length. A non-array reads as empty.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Whether the document carries the soft-delete marker `is_deleted: true`.
pub(crate) fn is_soft_deleted(value: &Value) -> bool {
    value.get("is_deleted").and_then(Value::as_bool) == Some(true)
}
