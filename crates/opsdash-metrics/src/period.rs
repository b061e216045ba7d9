//! Human-facing period labels.

use std::fmt;

/// A relative period selector as shown in the dashboard's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
	/// The last 7 calendar days including today.
	Last7Days,
	/// The last 30 calendar days including today. Also the fallback for
	/// unrecognized labels.
	#[default]
	Last30Days,
	/// The last 90 calendar days including today.
	Last90Days,
	/// From the 1st of the current month through today.
	ThisMonth,
	/// The whole previous calendar month.
	LastMonth,
}

impl Period {
	/// Parses a UI label. Unrecognized labels fall back to
	/// [`Period::Last30Days`] rather than failing, matching the
	/// dashboard's permissive dropdown handling.
	///
	/// # Examples
	///
	/// ```
	/// use opsdash_metrics::Period;
	///
	/// assert_eq!(Period::parse("Last 7 days"), Period::Last7Days);
	/// assert_eq!(Period::parse("whatever"), Period::Last30Days);
	/// ```
	pub fn parse(label: &str) -> Self {
		match label.trim() {
			"Last 7 days" => Period::Last7Days,
			"Last 30 days" => Period::Last30Days,
			"Last 90 days" => Period::Last90Days,
			"This month" => Period::ThisMonth,
			"Last month" => Period::LastMonth,
			_ => Period::Last30Days,
		}
	}

	/// The label shown in the UI.
	pub fn label(self) -> &'static str {
		match self {
			Period::Last7Days => "Last 7 days",
			Period::Last30Days => "Last 30 days",
			Period::Last90Days => "Last 90 days",
			Period::ThisMonth => "This month",
			Period::LastMonth => "Last month",
		}
	}
}

impl fmt::Display for Period {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
