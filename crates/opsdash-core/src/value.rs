//! Lossy field extraction with non-null fallbacks.
//!
//! Backend records are heterogeneous and frequently omit fields. Rows shown
//! in the dashboard must never carry a null, so every accessor here takes a
//! fallback and returns an owned value. `"N/A"` is the conventional text
//! fallback for display columns; `""` and `0` for machine-facing ones.

use serde_json::Value;

/// Conventional display fallback for absent text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// String field, or `fallback` when absent/not a string.
pub fn str_or(record: &Value, key: &str, fallback: &str) -> String {
	match record.get(key).and_then(Value::as_str) {
		Some(s) if !s.is_empty() => s.to_string(),
		_ => fallback.to_string(),
	}
}

/// String field looked up under any of several backend spellings.
///
/// Resources disagree on field names (`accountNo` vs `vnuban`,
/// `merchantName` vs `merchant`); the first present non-empty spelling wins.
pub fn str_any_or(record: &Value, keys: &[&str], fallback: &str) -> String {
	for key in keys {
		if let Some(s) = record.get(*key).and_then(Value::as_str) {
			if !s.is_empty() {
				return s.to_string();
			}
		}
	}
	fallback.to_string()
}

/// Float field, or `fallback` when absent. Accepts numeric strings, which
/// some endpoints emit for amounts.
pub fn f64_or(record: &Value, key: &str, fallback: f64) -> f64 {
	match record.get(key) {
		Some(Value::Number(n)) => n.as_f64().unwrap_or(fallback),
		Some(Value::String(s)) => s.trim().parse().unwrap_or(fallback),
		_ => fallback,
	}
}

/// Unsigned integer field, or `fallback` when absent.
pub fn u64_or(record: &Value, key: &str, fallback: u64) -> u64 {
	match record.get(key) {
		Some(Value::Number(n)) => n.as_u64().unwrap_or(fallback),
		Some(Value::String(s)) => s.trim().parse().unwrap_or(fallback),
		_ => fallback,
	}
}
