//! Display formatting for metric cards and table cells.

/// Groups an integer with comma thousands separators.
///
/// # Examples
///
/// ```
/// use opsdash_core::intcomma;
///
/// assert_eq!(intcomma(100), "100");
/// assert_eq!(intcomma(1234567), "1,234,567");
/// assert_eq!(intcomma(-1000), "-1,000");
/// ```
pub fn intcomma(value: i64) -> String {
	let digits = value.unsigned_abs().to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	if value < 0 {
		format!("-{}", grouped)
	} else {
		grouped
	}
}

/// Formats a naira amount: `₦` prefix, grouped, two decimal places.
///
/// # Examples
///
/// ```
/// use opsdash_core::format_naira;
///
/// assert_eq!(format_naira(0.0), "₦0.00");
/// assert_eq!(format_naira(1250500.5), "₦1,250,500.50");
/// assert_eq!(format_naira(-300.0), "-₦300.00");
/// ```
pub fn format_naira(amount: f64) -> String {
	let negative = amount < 0.0;
	let cents = (amount.abs() * 100.0).round() as i64;
	let formatted = format!("₦{}.{:02}", intcomma(cents / 100), cents % 100);
	if negative {
		format!("-{}", formatted)
	} else {
		formatted
	}
}

/// Formats a count metric as a grouped integer.
pub fn format_count(value: u64) -> String {
	intcomma(value as i64)
}
