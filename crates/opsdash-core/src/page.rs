//! A single page of normalized rows.

use serde::Serialize;

/// The human-facing ordinal shown in the first column of every table.
///
/// Computed locally so that it stays stable across backends and is
/// independent of any backend-assigned record ID. Strictly increasing
/// within a page and across ascending pages.
///
/// # Examples
///
/// ```
/// use opsdash_core::serial_number;
///
/// // Third row on the second page (zero-based index 1) of a 10-row table.
/// assert_eq!(serial_number(1, 10, 2), 13);
/// ```
pub fn serial_number(page_index: u32, page_size: u32, position: usize) -> u64 {
	u64::from(page_index) * u64::from(page_size) + position as u64 + 1
}

/// One page of rows plus the totals reported by the backend.
///
/// Rows are immutable snapshots; a new fetch replaces the whole page,
/// there is no merging with previous results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
	/// Normalized rows for this page; `rows.len() <= page size`.
	pub rows: Vec<T>,
	/// Total matching records across all pages, as reported by the backend.
	pub total_elements: u64,
	/// Total page count, as reported by the backend.
	pub total_pages: u32,
	/// Zero-based index of this page.
	pub index: u32,
}

impl<T> Page<T> {
	/// An empty result (`total_pages == 0`).
	pub fn empty(index: u32) -> Self {
		Self {
			rows: Vec::new(),
			total_elements: 0,
			total_pages: 0,
			index,
		}
	}

	/// Re-derives the page count from `total_elements` and the page size.
	///
	/// Used as a cross-check against the backend-reported `total_pages`;
	/// the backend value remains the source of truth for display.
	pub fn expected_pages(&self, page_size: u32) -> u32 {
		if page_size == 0 {
			return 0;
		}
		self.total_elements.div_ceil(u64::from(page_size)) as u32
	}

	/// Whether this is the empty-result case.
	pub fn is_empty(&self) -> bool {
		self.total_pages == 0 && self.rows.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn serial_numbers_increase_within_and_across_pages() {
		let page0: Vec<u64> = (0..5).map(|i| serial_number(0, 5, i)).collect();
		let page1: Vec<u64> = (0..5).map(|i| serial_number(1, 5, i)).collect();
		assert_eq!(page0, vec![1, 2, 3, 4, 5]);
		assert_eq!(page1, vec![6, 7, 8, 9, 10]);
		assert!(page0.last().unwrap() < page1.first().unwrap());
	}

	#[rstest]
	#[case(0, 10, 0)]
	#[case(1, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(95, 10, 10)]
	fn expected_pages_matches_backend_convention(
		#[case] total: u64,
		#[case] size: u32,
		#[case] pages: u32,
	) {
		let page = Page::<()> {
			rows: Vec::new(),
			total_elements: total,
			total_pages: pages,
			index: 0,
		};
		assert_eq!(page.expected_pages(size), pages);
	}

	#[rstest]
	fn empty_page_has_zero_total_pages() {
		let page = Page::<String>::empty(0);
		assert!(page.is_empty());
		assert_eq!(page.total_pages, 0);
	}
}
