//! Absolute date windows and prior-period derivation.
//!
//! Windows are inclusive on both ends and anchored to UTC midnight; all
//! arithmetic is calendar-day arithmetic on `NaiveDate`. Every resolved
//! window is clamped into `[PLATFORM_EPOCH, now]`.

use chrono::{Datelike, Days, NaiveDate};

use crate::period::Period;

/// The platform's epoch: no data exists before this date, so no window may
/// start earlier.
pub const PLATFORM_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 1, 1) {
	Some(date) => date,
	None => panic!("invalid platform epoch"),
};

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
	/// First day of the window, inclusive.
	pub start: NaiveDate,
	/// Last day of the window, inclusive.
	pub end: NaiveDate,
}

impl DateWindow {
	/// Number of calendar days spanned, counting both endpoints.
	pub fn duration_days(&self) -> i64 {
		(self.end - self.start).num_days() + 1
	}

	/// Query parameters for the metric endpoint (`startDate`, `endDate`).
	pub fn as_query(&self) -> Vec<(String, String)> {
		vec![
			("startDate".into(), self.start.format("%Y-%m-%d").to_string()),
			("endDate".into(), self.end.format("%Y-%m-%d").to_string()),
		]
	}
}

/// Maps a period onto an absolute window relative to `now`.
///
/// - Last N days: `start = now - (N-1)`, `end = now` — exactly N days
///   including today.
/// - This month: 1st of `now`'s month through `now`.
/// - Last month: the whole previous calendar month; `end` is the last day
///   of that month, not `now`.
///
/// The start is clamped up to [`PLATFORM_EPOCH`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use opsdash_metrics::{Period, resolve_window};
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// let window = resolve_window(Period::Last7Days, now);
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
/// assert_eq!(window.end, now);
/// assert_eq!(window.duration_days(), 7);
/// ```
pub fn resolve_window(period: Period, now: NaiveDate) -> DateWindow {
	resolve_window_from(period, now, PLATFORM_EPOCH)
}

/// [`resolve_window`] with an explicit minimum date.
pub fn resolve_window_from(period: Period, now: NaiveDate, min_date: NaiveDate) -> DateWindow {
	let (start, end) = match period {
		Period::Last7Days => (now - Days::new(6), now),
		Period::Last30Days => (now - Days::new(29), now),
		Period::Last90Days => (now - Days::new(89), now),
		Period::ThisMonth => (first_of_month(now), now),
		Period::LastMonth => {
			let end = first_of_month(now) - Days::new(1);
			(first_of_month(end), end)
		}
	};

	let start = start.max(min_date);
	// A window entirely before the epoch collapses to its clamped start.
	let end = end.max(start);
	DateWindow { start, end }
}

/// Derives the immediately preceding window of equal length.
///
/// `previous.end` is the day before `current.start`, so the two windows
/// are adjacent with no gap and no overlap. The result is clamped into
/// `[PLATFORM_EPOCH, now]` and never has `start > end`.
pub fn previous_window(current: DateWindow, now: NaiveDate) -> DateWindow {
	previous_window_from(current, now, PLATFORM_EPOCH)
}

/// [`previous_window`] with an explicit minimum date.
pub fn previous_window_from(
	current: DateWindow,
	now: NaiveDate,
	min_date: NaiveDate,
) -> DateWindow {
	// A hand-built inverted window reports a non-positive duration; treat
	// it as a single day so the subtraction below cannot underflow.
	let duration = current.duration_days().max(1);
	let end = current.start - Days::new(1);
	let start = end - Days::new(duration as u64 - 1);

	let start = start.max(min_date);
	// Guards a malformed current window whose start lies in the future.
	let mut end = end.min(now);
	if start > end {
		end = start;
	}
	DateWindow { start, end }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
	date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[rstest]
	#[case(Period::Last7Days, 7)]
	#[case(Period::Last30Days, 30)]
	#[case(Period::Last90Days, 90)]
	fn last_n_days_spans_exactly_n_days_including_today(
		#[case] period: Period,
		#[case] days: i64,
	) {
		let now = date(2025, 6, 15);
		let window = resolve_window(period, now);
		assert_eq!(window.end, now);
		assert_eq!(window.duration_days(), days);
	}

	#[rstest]
	fn this_month_runs_from_the_first_to_now() {
		let now = date(2025, 6, 15);
		let window = resolve_window(Period::ThisMonth, now);
		assert_eq!(window.start, date(2025, 6, 1));
		assert_eq!(window.end, now);
	}

	#[rstest]
	fn last_month_is_the_whole_previous_calendar_month() {
		let window = resolve_window(Period::LastMonth, date(2025, 3, 9));
		assert_eq!(window.start, date(2025, 2, 1));
		assert_eq!(window.end, date(2025, 2, 28));
	}

	#[rstest]
	fn last_month_crosses_the_year_boundary() {
		let window = resolve_window(Period::LastMonth, date(2025, 1, 15));
		assert_eq!(window.start, date(2024, 12, 1));
		assert_eq!(window.end, date(2024, 12, 31));
	}

	#[rstest]
	fn window_start_is_clamped_to_the_epoch() {
		let window = resolve_window(Period::Last90Days, date(2021, 1, 10));
		assert_eq!(window.start, PLATFORM_EPOCH);
		assert_eq!(window.end, date(2021, 1, 10));
	}

	#[rstest]
	#[case(Period::Last7Days)]
	#[case(Period::Last30Days)]
	#[case(Period::Last90Days)]
	#[case(Period::ThisMonth)]
	#[case(Period::LastMonth)]
	fn previous_window_is_adjacent_and_equal_length(#[case] period: Period) {
		let now = date(2025, 6, 15);
		let current = resolve_window(period, now);
		let previous = previous_window(current, now);

		assert_eq!(previous.end, current.start - Days::new(1));
		assert_eq!(previous.duration_days(), current.duration_days());
		assert!(previous.start <= previous.end);
	}

	#[rstest]
	fn previous_window_clamps_into_the_epoch() {
		let now = date(2021, 1, 20);
		let current = resolve_window(Period::Last7Days, now);
		let previous = previous_window(current, now);
		assert_eq!(previous.start, date(2021, 1, 7));
		assert_eq!(previous.end, date(2021, 1, 13));

		// Deep enough that the previous window would predate the epoch.
		let current = resolve_window(Period::Last30Days, date(2021, 1, 15));
		let previous = previous_window(current, date(2021, 1, 15));
		assert_eq!(previous.start, PLATFORM_EPOCH);
		assert!(previous.start <= previous.end);
	}

	#[rstest]
	fn previous_window_never_inverts_even_for_malformed_input() {
		// A hand-built current window starting in the future.
		let now = date(2025, 6, 15);
		let malformed = DateWindow {
			start: date(2025, 7, 1),
			end: date(2025, 7, 31),
		};
		let previous = previous_window(malformed, now);
		assert!(previous.start <= previous.end);
		assert!(previous.end <= now.max(previous.start));
	}

	#[rstest]
	fn previous_window_tolerates_an_inverted_current_window() {
		// The fields are public, so an inverted window can be built by
		// hand; it must not panic and must still satisfy start <= end.
		let now = date(2025, 6, 15);
		let inverted = DateWindow {
			start: date(2025, 6, 10),
			end: date(2025, 6, 1),
		};
		let previous = previous_window(inverted, now);
		assert!(previous.start <= previous.end);
		assert_eq!(previous.end, date(2025, 6, 9));
		assert_eq!(previous.duration_days(), 1);
	}

	#[rstest]
	fn query_parameters_are_iso_dates() {
		let window = DateWindow {
			start: date(2025, 2, 1),
			end: date(2025, 2, 28),
		};
		assert_eq!(
			window.as_query(),
			vec![
				("startDate".to_string(), "2025-02-01".to_string()),
				("endDate".to_string(), "2025-02-28".to_string()),
			]
		);
	}
}
