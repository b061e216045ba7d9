//! Virtual account numbers (vNUBANs) table.

use opsdash_core::value::{NOT_AVAILABLE, str_any_or, str_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One issued virtual account number.
#[derive(Debug, Clone, Serialize)]
pub struct VnubanRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// The virtual account number. The backend reports this as `accountNo`.
	pub vnuban: String,
	/// Display name on the account.
	pub account_name: String,
	/// Issuing bank.
	pub bank: String,
	/// Owning merchant.
	pub merchant_name: String,
	/// Backend status (`ACTIVE`, `DORMANT`, ...).
	pub status: String,
	/// Issuance timestamp.
	pub created_at: String,
}

/// The `vnubans` list resource.
pub struct Vnubans;

impl Resource for Vnubans {
	type Row = VnubanRow;

	fn path(&self) -> &'static str {
		"vnubans"
	}

	fn map_row(&self, record: &Value, serial: u64) -> VnubanRow {
		VnubanRow {
			serial_number: serial,
			vnuban: str_any_or(record, &["accountNo", "vnuban"], NOT_AVAILABLE),
			account_name: str_any_or(record, &["accountName", "name"], NOT_AVAILABLE),
			bank: str_any_or(record, &["bankName", "bank"], NOT_AVAILABLE),
			merchant_name: str_any_or(record, &["merchantName", "merchant"], NOT_AVAILABLE),
			status: str_or(record, "status", NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "createdDate"], ""),
		}
	}
}
