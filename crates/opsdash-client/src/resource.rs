//! Per-resource configuration.
//!
//! Each dashboard table is described by one [`Resource`] implementation:
//! the backend path, the default sort, the fixed page size, and the
//! field-mapping that turns a raw backend record into the table's typed
//! row. The client is generic over this trait, so the fetch protocol
//! exists once rather than once per table.

use opsdash_core::SortOrder;
use serde_json::Value;

/// Configuration object for one paged backend resource.
pub trait Resource: Send + Sync {
	/// The normalized row type shown in this resource's table.
	type Row: Send;

	/// Resource path relative to the backend base URL, without a leading
	/// slash (e.g. `"transactions"`).
	fn path(&self) -> &'static str;

	/// Default sort field applied when the UI has not chosen one.
	fn default_sort_field(&self) -> &'static str {
		"createdAt"
	}

	/// Default sort direction. Newest-first unless a resource overrides.
	fn default_sort_order(&self) -> SortOrder {
		SortOrder::Desc
	}

	/// Fixed page size for this resource's table.
	fn page_size(&self) -> u32 {
		10
	}

	/// Maps one raw backend record onto the typed row.
	///
	/// Implementations must leave no field null: absent values fall back
	/// to `""`, `0` or `"N/A"` as appropriate for the column. `serial` is
	/// the locally computed, page-stable ordinal for the row.
	fn map_row(&self, record: &Value, serial: u64) -> Self::Row;
}
