//! Merchants table.

use opsdash_core::value::{NOT_AVAILABLE, str_any_or, str_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One onboarded merchant.
#[derive(Debug, Clone, Serialize)]
pub struct MerchantRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// Registered business name.
	pub name: String,
	/// Platform-assigned merchant code.
	pub code: String,
	/// Primary contact email.
	pub contact_email: String,
	/// Settlement account number.
	pub settlement_account: String,
	/// Backend status (`ACTIVE`, `SUSPENDED`, ...).
	pub status: String,
	/// Onboarding timestamp.
	pub created_at: String,
}

/// The `merchants` list resource.
pub struct Merchants;

impl Resource for Merchants {
	type Row = MerchantRow;

	fn path(&self) -> &'static str {
		"merchants"
	}

	fn map_row(&self, record: &Value, serial: u64) -> MerchantRow {
		MerchantRow {
			serial_number: serial,
			name: str_any_or(record, &["merchantName", "name"], NOT_AVAILABLE),
			code: str_any_or(record, &["merchantCode", "code"], NOT_AVAILABLE),
			contact_email: str_any_or(record, &["contactEmail", "email"], NOT_AVAILABLE),
			settlement_account: str_or(record, "settlementAccount", NOT_AVAILABLE),
			status: str_or(record, "status", NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "createdDate"], ""),
		}
	}
}
