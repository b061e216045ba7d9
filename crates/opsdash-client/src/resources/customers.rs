//! Customers table.

use opsdash_core::value::{NOT_AVAILABLE, str_any_or, str_or, u64_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One customer of a merchant.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// Customer display name.
	pub name: String,
	/// Contact email.
	pub email: String,
	/// Contact phone number.
	pub phone: String,
	/// Number of vNUBANs issued to this customer.
	pub vnuban_count: u64,
	/// Backend status.
	pub status: String,
	/// Registration timestamp.
	pub created_at: String,
}

/// The `customers` list resource.
pub struct Customers;

impl Resource for Customers {
	type Row = CustomerRow;

	fn path(&self) -> &'static str {
		"customers"
	}

	fn map_row(&self, record: &Value, serial: u64) -> CustomerRow {
		CustomerRow {
			serial_number: serial,
			name: str_any_or(record, &["customerName", "name"], NOT_AVAILABLE),
			email: str_or(record, "email", NOT_AVAILABLE),
			phone: str_any_or(record, &["phoneNumber", "phone"], NOT_AVAILABLE),
			vnuban_count: u64_or(record, "vnubanCount", 0),
			status: str_or(record, "status", NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "createdDate"], ""),
		}
	}
}
