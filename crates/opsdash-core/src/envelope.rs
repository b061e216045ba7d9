//! The backend's `{ status, message, data }` response envelope.
//!
//! Every endpoint — list and metric alike — wraps its payload in the same
//! envelope. `status: false` is a domain failure even on a 2xx transport;
//! a missing or misshapen envelope is a normalization failure, reported
//! with the backend's own message when one is present.

use serde_json::Value;

use crate::error::{OpsError, OpsResult};

/// Extracts the backend's `message` field, if any.
pub fn backend_message(body: &Value) -> Option<&str> {
	body.get("message").and_then(Value::as_str)
}

/// Checks the envelope's `status` flag.
///
/// `Err(Backend)` when the backend reports failure, `Err(Normalization)`
/// when the flag is absent or not a boolean.
pub fn check_status(body: &Value) -> OpsResult<()> {
	match body.get("status").and_then(Value::as_bool) {
		Some(true) => Ok(()),
		Some(false) => Err(OpsError::Backend {
			message: backend_message(body)
				.unwrap_or("backend reported failure without a message")
				.to_string(),
		}),
		None => Err(normalization_error(body, "missing boolean `status` field")),
	}
}

fn normalization_error(body: &Value, detail: &str) -> OpsError {
	match backend_message(body) {
		Some(msg) => OpsError::Normalization(format!("{} ({})", detail, msg)),
		None => OpsError::Normalization(detail.to_string()),
	}
}

/// The paged-list payload under `data` on list endpoints.
#[derive(Debug, Clone)]
pub struct ListEnvelope {
	/// Raw, resource-shaped records; normalized by the caller.
	pub content: Vec<Value>,
	/// Total matching records across all pages.
	pub total_elements: u64,
	/// Total page count.
	pub total_pages: u32,
	/// Zero-based index of the returned page.
	pub number: u32,
}

impl ListEnvelope {
	/// Parses a list response body.
	///
	/// Fails with [`OpsError::Backend`] when `status` is `false` and with
	/// [`OpsError::Normalization`] when the `data.content` shape is absent.
	pub fn from_value(body: &Value) -> OpsResult<Self> {
		check_status(body)?;

		let data = body
			.get("data")
			.ok_or_else(|| normalization_error(body, "missing `data` object"))?;
		let content = data
			.get("content")
			.and_then(Value::as_array)
			.ok_or_else(|| normalization_error(body, "missing `data.content` array"))?
			.clone();

		Ok(Self {
			content,
			total_elements: data.get("totalElements").and_then(Value::as_u64).unwrap_or(0),
			total_pages: data.get("totalPages").and_then(Value::as_u64).unwrap_or(0) as u32,
			number: data.get("number").and_then(Value::as_u64).unwrap_or(0) as u32,
		})
	}
}

/// Extracts the scalar `data` payload of a metric response.
///
/// Metric endpoints return a bare number or string under `data`.
pub fn scalar_data(body: &Value) -> OpsResult<Value> {
	check_status(body)?;
	body.get("data")
		.cloned()
		.ok_or_else(|| normalization_error(body, "missing `data` value"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn status_false_surfaces_backend_message() {
		let body = json!({ "status": false, "message": "Invalid merchant code" });
		let err = check_status(&body).unwrap_err();
		match err {
			OpsError::Backend { message } => assert_eq!(message, "Invalid merchant code"),
			other => panic!("expected Backend error, got {other:?}"),
		}
	}

	#[rstest]
	fn missing_status_is_a_normalization_error() {
		let body = json!({ "data": { "content": [] } });
		assert!(matches!(
			check_status(&body),
			Err(OpsError::Normalization(_))
		));
	}

	#[rstest]
	fn list_envelope_parses_totals() {
		let body = json!({
			"status": true,
			"data": {
				"content": [{ "id": 1 }, { "id": 2 }],
				"totalElements": 42,
				"totalPages": 21,
				"number": 3
			}
		});
		let envelope = ListEnvelope::from_value(&body).unwrap();
		assert_eq!(envelope.content.len(), 2);
		assert_eq!(envelope.total_elements, 42);
		assert_eq!(envelope.total_pages, 21);
		assert_eq!(envelope.number, 3);
	}

	#[rstest]
	fn missing_content_reports_backend_message_when_present() {
		let body = json!({ "status": true, "message": "partial outage", "data": {} });
		let err = ListEnvelope::from_value(&body).unwrap_err();
		match err {
			OpsError::Normalization(detail) => {
				assert!(detail.contains("data.content"));
				assert!(detail.contains("partial outage"));
			}
			other => panic!("expected Normalization error, got {other:?}"),
		}
	}

	#[rstest]
	fn scalar_data_returns_number_or_string() {
		let body = json!({ "status": true, "data": 1250.5 });
		assert_eq!(scalar_data(&body).unwrap(), json!(1250.5));

		let body = json!({ "status": true, "data": "₦1,250.50" });
		assert_eq!(scalar_data(&body).unwrap(), json!("₦1,250.50"));
	}
}
