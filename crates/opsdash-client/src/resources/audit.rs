//! Audit log table. Smaller page size than the data tables.

use opsdash_core::value::{NOT_AVAILABLE, str_any_or, str_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One audit trail entry.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// Staff member or system actor.
	pub actor: String,
	/// Action performed.
	pub action: String,
	/// Entity acted upon.
	pub entity: String,
	/// Source IP address.
	pub ip_address: String,
	/// Event timestamp.
	pub created_at: String,
}

/// The `audit-logs` list resource.
pub struct AuditLogs;

impl Resource for AuditLogs {
	type Row = AuditRow;

	fn path(&self) -> &'static str {
		"audit-logs"
	}

	fn page_size(&self) -> u32 {
		5
	}

	fn map_row(&self, record: &Value, serial: u64) -> AuditRow {
		AuditRow {
			serial_number: serial,
			actor: str_any_or(record, &["performedBy", "actor"], NOT_AVAILABLE),
			action: str_or(record, "action", NOT_AVAILABLE),
			entity: str_any_or(record, &["entityName", "entity"], NOT_AVAILABLE),
			ip_address: str_any_or(record, &["ipAddress", "ip"], NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "timestamp"], ""),
		}
	}
}
