//! Query-side state owned by a table view.
//!
//! A table holds exactly one [`FilterSet`], one [`SortSpec`] and one
//! [`PageRequest`]; all three are plain values that are rebuilt into a wire
//! query on every fetch. None of them survive the view they belong to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel values that mean "no constraint" and must never reach the wire.
const ELIDED_SENTINELS: &[&str] = &["All", "default"];

/// A single filter value as entered in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
	/// Free text (search boxes, reference lookups).
	Str(String),
	/// Numeric filters such as minimum amount.
	Int(i64),
	/// Date filters, serialized as `YYYY-MM-DD`.
	Date(NaiveDate),
	/// Dropdown selection; the `"All"`/`"default"` sentinels are elided.
	Choice(String),
}

impl FilterValue {
	/// Renders the value as a query-string parameter, or `None` if the
	/// value carries no constraint and must be elided entirely.
	///
	/// Empty and whitespace-only strings are elided rather than sent as
	/// empty parameters, so the backend's own defaulting applies.
	pub fn as_param(&self) -> Option<String> {
		match self {
			FilterValue::Str(s) | FilterValue::Choice(s) => {
				let trimmed = s.trim();
				if trimmed.is_empty() || ELIDED_SENTINELS.contains(&trimmed) {
					None
				} else {
					Some(trimmed.to_string())
				}
			}
			FilterValue::Int(n) => Some(n.to_string()),
			FilterValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
		}
	}
}

impl From<&str> for FilterValue {
	fn from(s: &str) -> Self {
		FilterValue::Str(s.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(s: String) -> Self {
		FilterValue::Str(s)
	}
}

impl From<i64> for FilterValue {
	fn from(n: i64) -> Self {
		FilterValue::Int(n)
	}
}

impl From<NaiveDate> for FilterValue {
	fn from(d: NaiveDate) -> Self {
		FilterValue::Date(d)
	}
}

/// The complete set of user-chosen constraints for one table.
///
/// Insertion order is preserved so the emitted query string is stable for a
/// given sequence of UI edits. Setting a key that already exists replaces
/// its value in place.
///
/// # Examples
///
/// ```
/// use opsdash_core::{FilterSet, FilterValue};
///
/// let mut filters = FilterSet::new();
/// filters.set("status", FilterValue::Choice("SUCCESS".into()));
/// filters.set("vnuban", "1234567890");
/// assert_eq!(filters.len(), 2);
///
/// filters.set("status", FilterValue::Choice("All".into()));
/// // "All" stays in the set but is elided from the wire query.
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
	entries: Vec<(String, FilterValue)>,
}

impl FilterSet {
	/// Creates an empty filter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a filter, replacing any existing value under the same key.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
		let key = key.into();
		let value = value.into();
		if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
			entry.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Removes a filter by key.
	pub fn remove(&mut self, key: &str) {
		self.entries.retain(|(k, _)| k != key);
	}

	/// Drops every filter ("Reset All" in the UI).
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Number of entries, including ones that would be elided.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the set holds no entries at all.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}

/// Sort direction for the single active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
	/// Ascending.
	Asc,
	/// Descending (the default for `createdAt`-sorted tables).
	#[default]
	Desc,
}

impl SortOrder {
	/// Wire representation (`asc` / `desc`).
	pub fn as_str(self) -> &'static str {
		match self {
			SortOrder::Asc => "asc",
			SortOrder::Desc => "desc",
		}
	}
}

/// The single active sort for a table. No multi-column sort exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortSpec {
	/// Field to sort by; `None` falls back to the resource default.
	pub field: Option<String>,
	/// Direction; defaults to descending.
	pub order: SortOrder,
}

impl SortSpec {
	/// Sort by a specific field.
	pub fn by(field: impl Into<String>, order: SortOrder) -> Self {
		Self {
			field: Some(field.into()),
			order,
		}
	}
}

/// A page request, zero-based.
///
/// The wire protocol is zero-based; some screens display one-based page
/// numbers. The conversion happens here, once, rather than in each table.
///
/// # Examples
///
/// ```
/// use opsdash_core::PageRequest;
///
/// let page = PageRequest::from_one_based(3, 10);
/// assert_eq!(page.index, 2);
/// assert_eq!(page.one_based(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
	/// Zero-based page index.
	pub index: u32,
	/// Fixed page size for the owning table.
	pub size: u32,
}

impl PageRequest {
	/// Creates a zero-based page request.
	pub fn new(index: u32, size: u32) -> Self {
		Self { index, size }
	}

	/// Converts from the one-based numbering used by pager widgets.
	/// A page number of 0 is treated as page 1.
	pub fn from_one_based(page: u32, size: u32) -> Self {
		Self {
			index: page.saturating_sub(1),
			size,
		}
	}

	/// One-based page number for display.
	pub fn one_based(self) -> u32 {
		self.index + 1
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", None)]
	#[case("   ", None)]
	#[case("All", None)]
	#[case("default", None)]
	#[case("SUCCESS", Some("SUCCESS"))]
	#[case("  FAILED  ", Some("FAILED"))]
	fn choice_params_elide_sentinels(#[case] raw: &str, #[case] expected: Option<&str>) {
		let value = FilterValue::Choice(raw.to_string());
		assert_eq!(value.as_param().as_deref(), expected);
	}

	#[rstest]
	fn date_param_is_iso_formatted() {
		let value = FilterValue::Date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
		assert_eq!(value.as_param().as_deref(), Some("2025-03-09"));
	}

	#[rstest]
	fn set_replaces_in_place_and_keeps_order() {
		let mut filters = FilterSet::new();
		filters.set("status", "PENDING");
		filters.set("vnuban", "0011223344");
		filters.set("status", "SUCCESS");

		let keys: Vec<&str> = filters.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["status", "vnuban"]);
		let (_, status) = filters.iter().next().unwrap();
		assert_eq!(status.as_param().as_deref(), Some("SUCCESS"));
	}

	#[rstest]
	fn reset_all_clears_every_filter() {
		let mut filters = FilterSet::new();
		filters.set("status", "SUCCESS");
		filters.set("startDate", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
		filters.clear();
		assert!(filters.is_empty());
	}

	#[rstest]
	fn one_based_conversion_round_trips() {
		let page = PageRequest::from_one_based(1, 10);
		assert_eq!(page.index, 0);
		assert_eq!(page.one_based(), 1);
		// Page 0 from a buggy pager is clamped rather than underflowing.
		assert_eq!(PageRequest::from_one_based(0, 10).index, 0);
	}
}
