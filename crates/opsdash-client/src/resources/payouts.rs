//! Payouts table.

use opsdash_core::value::{NOT_AVAILABLE, f64_or, str_any_or, str_or};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// One settlement payout.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutRow {
	/// Page-stable ordinal, computed locally.
	pub serial_number: u64,
	/// Payout reference.
	pub reference: String,
	/// Amount paid out.
	pub amount: f64,
	/// ISO currency code, `NGN` when unreported.
	pub currency: String,
	/// Destination account number.
	pub destination_account: String,
	/// Destination bank.
	pub bank: String,
	/// Backend status.
	pub status: String,
	/// Initiation timestamp.
	pub created_at: String,
}

/// The `payouts` list resource.
pub struct Payouts;

impl Resource for Payouts {
	type Row = PayoutRow;

	fn path(&self) -> &'static str {
		"payouts"
	}

	fn map_row(&self, record: &Value, serial: u64) -> PayoutRow {
		PayoutRow {
			serial_number: serial,
			reference: str_any_or(record, &["payoutRef", "reference"], NOT_AVAILABLE),
			amount: f64_or(record, "amount", 0.0),
			currency: str_or(record, "currency", "NGN"),
			destination_account: str_any_or(
				record,
				&["destinationAccount", "accountNumber"],
				NOT_AVAILABLE,
			),
			bank: str_any_or(record, &["bankName", "bank"], NOT_AVAILABLE),
			status: str_or(record, "status", NOT_AVAILABLE),
			created_at: str_any_or(record, &["createdAt", "createdDate"], ""),
		}
	}
}
