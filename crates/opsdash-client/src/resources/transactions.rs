//! Transactions table.

use opsdash_core::value::{NOT_AVAILABLE, f64_or, str_any_or, str_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One normalized transaction row.
///
/// Every field is non-null: absent text renders as `"N/A"`, absent
/// amounts as `0`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// Backend transaction reference.
	pub reference: String,
	/// Transaction amount in the transaction currency.
	pub amount: f64,
	/// Processing fee charged.
	pub fee: f64,
	/// ISO currency code, `NGN` when unreported.
	pub currency: String,
	/// Receiving virtual account number.
	pub vnuban: String,
	/// Merchant the transaction belongs to.
	pub merchant_name: String,
	/// Backend status string (`SUCCESS`, `PENDING`, `FAILED`, ...).
	pub status: String,
	/// Creation timestamp as reported by the backend.
	pub created_at: String,
}

/// The `transactions` list resource.
pub struct Transactions;

impl Resource for Transactions {
	type Row = TransactionRow;

	fn path(&self) -> &'static str {
		"transactions"
	}

	fn map_row(&self, record: &Value, serial: u64) -> TransactionRow {
		TransactionRow {
			serial_number: serial,
			reference: str_any_or(record, &["transactionRef", "reference"], NOT_AVAILABLE),
			amount: f64_or(record, "amount", 0.0),
			fee: f64_or(record, "fee", 0.0),
			currency: str_or(record, "currency", "NGN"),
			vnuban: str_or(record, "vnuban", NOT_AVAILABLE),
			merchant_name: str_any_or(record, &["merchantName", "merchant"], NOT_AVAILABLE),
			status: str_or(record, "status", NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "createdDate"], ""),
		}
	}
}
