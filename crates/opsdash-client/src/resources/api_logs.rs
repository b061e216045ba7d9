//! API request log table.

use opsdash_core::value::{NOT_AVAILABLE, str_any_or, str_or, u64_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One logged API call made by a merchant integration.
#[derive(Debug, Clone, Serialize)]
pub struct ApiLogRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// HTTP method.
	pub method: String,
	/// Request path.
	pub path: String,
	/// Response status code; `0` when the call never completed.
	pub response_code: u64,
	/// Round-trip duration in milliseconds.
	pub duration_ms: u64,
	/// Calling merchant.
	pub merchant_name: String,
	/// Request timestamp.
	pub created_at: String,
}

/// The `api-logs` list resource.
pub struct ApiLogs;

impl Resource for ApiLogs {
	type Row = ApiLogRow;

	fn path(&self) -> &'static str {
		"api-logs"
	}

	fn page_size(&self) -> u32 {
		5
	}

	fn map_row(&self, record: &Value, serial: u64) -> ApiLogRow {
		ApiLogRow {
			serial_number: serial,
			method: str_or(record, "method", NOT_AVAILABLE),
			path: str_any_or(record, &["requestPath", "path"], NOT_AVAILABLE),
			response_code: u64_or(record, "responseCode", 0),
			duration_ms: u64_or(record, "durationMs", 0),
			merchant_name: str_any_or(record, &["merchantName", "merchant"], NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "timestamp"], ""),
		}
	}
}
