//! Metric evaluation: fetch two windows, compare, format.

use chrono::NaiveDate;
use opsdash_client::PagedClient;
use opsdash_core::envelope::scalar_data;
use opsdash_core::{OpsError, OpsResult, format_count, format_naira};
use serde_json::Value;
use tracing::warn;

use crate::period::Period;
use crate::window::{DateWindow, PLATFORM_EPOCH, previous_window_from, resolve_window_from};

/// How a metric's backend value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
	/// Naira amount: `₦` prefix, grouped, two decimals.
	Currency,
	/// Count: locale-grouped integer.
	Count,
	/// Backend-formatted string, passed through verbatim.
	Text,
}

/// Configuration for one metric card.
#[derive(Debug, Clone)]
pub struct MetricSpec {
	/// Stable identifier for the card.
	pub id: String,
	/// Card title shown in the UI.
	pub title: String,
	/// Backend endpoint path relative to the base URL.
	pub path: String,
	/// Display formatting.
	pub kind: MetricKind,
}

impl MetricSpec {
	/// Creates a metric spec.
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		path: impl Into<String>,
		kind: MetricKind,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			path: path.into(),
			kind,
		}
	}
}

/// Sign of the period-over-period change.
///
/// Zero change reports as `Positive`; whether "no change" deserves its own
/// neutral state is an open product question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
	/// Current >= previous.
	Positive,
	/// Current < previous.
	Negative,
}

/// Whether a reading is a real result or a degraded fallback.
///
/// A failed evaluation still renders as a zero value, but it must never be
/// mistaken for a legitimate zero — the status keeps the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricStatus {
	/// Both fetches succeeded.
	Ok,
	/// At least one fetch failed; the reading shows the zero fallback.
	Failed(String),
}

/// One evaluated metric card.
#[derive(Debug, Clone)]
pub struct MetricReading {
	/// Identifier from the spec.
	pub id: String,
	/// Title from the spec.
	pub title: String,
	/// The period this reading covers.
	pub period: Period,
	/// Formatted display value.
	pub value: String,
	/// Current-window value (0 for text metrics and failures).
	pub current: f64,
	/// Previous-window value (0 for text metrics and failures).
	pub previous: f64,
	/// Non-negative change magnitude, one decimal place.
	pub change_percent: f64,
	/// Sign of the change, paired with `change_percent`.
	pub direction: ChangeDirection,
	/// Real result or degraded fallback.
	pub status: MetricStatus,
}

/// Computes the change magnitude and direction between two window values.
///
/// The magnitude is always non-negative and rounded to one decimal; the
/// sign travels separately as [`ChangeDirection`]. A zero previous value
/// yields `0.0` / `Positive` — the documented degenerate case.
pub fn compute_change(current: f64, previous: f64) -> (f64, ChangeDirection) {
	let direction = if current - previous >= 0.0 {
		ChangeDirection::Positive
	} else {
		ChangeDirection::Negative
	};
	let percent = if previous != 0.0 {
		let raw = (current - previous).abs() / previous.abs() * 100.0;
		(raw * 10.0).round() / 10.0
	} else {
		0.0
	};
	(percent, direction)
}

/// A scalar metric value as returned by the backend.
#[derive(Debug, Clone)]
enum MetricValue {
	Number(f64),
	Text(String),
}

impl MetricValue {
	fn from_data(data: Value, kind: MetricKind) -> OpsResult<Self> {
		match data {
			Value::Number(n) => Ok(MetricValue::Number(n.as_f64().unwrap_or(0.0))),
			// Text metrics keep backend strings verbatim; numeric kinds
			// accept the numeric strings some endpoints emit for amounts.
			Value::String(s) => match kind {
				MetricKind::Text => Ok(MetricValue::Text(s)),
				MetricKind::Currency | MetricKind::Count => match s.trim().parse::<f64>() {
					Ok(n) => Ok(MetricValue::Number(n)),
					Err(_) => Ok(MetricValue::Text(s)),
				},
			},
			other => Err(OpsError::Normalization(format!(
				"metric data was neither number nor string: {}",
				other
			))),
		}
	}

	fn as_number(&self) -> f64 {
		match self {
			MetricValue::Number(n) => *n,
			MetricValue::Text(_) => 0.0,
		}
	}
}

/// Evaluates metric cards against the backend.
///
/// The reference date is always passed in by the caller; two evaluations
/// with the same `now` are guaranteed to resolve the same windows.
pub struct MetricEvaluator {
	client: PagedClient,
	min_date: NaiveDate,
}

impl MetricEvaluator {
	/// Creates an evaluator over an existing client.
	pub fn new(client: PagedClient) -> Self {
		Self {
			client,
			min_date: PLATFORM_EPOCH,
		}
	}

	/// Overrides the platform epoch, mainly for tests.
	pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
		self.min_date = min_date;
		self
	}

	/// Evaluates one metric for the given period and reference date.
	///
	/// Never fails: on any fetch error the reading degrades to the zero
	/// display with [`MetricStatus::Failed`] carrying the error, so a
	/// broken card cannot block the rest of the page.
	pub async fn evaluate(
		&self,
		spec: &MetricSpec,
		period: Period,
		now: NaiveDate,
	) -> MetricReading {
		let current_window = resolve_window_from(period, now, self.min_date);
		let prev_window = previous_window_from(current_window, now, self.min_date);

		let outcome = self
			.fetch_pair(&spec.path, spec.kind, current_window, prev_window)
			.await;
		match outcome {
			Ok((current, previous)) => Self::reading_ok(spec, period, current, previous),
			Err(err) => {
				warn!(metric = %spec.id, error = %err, "metric evaluation degraded to zero display");
				Self::reading_failed(spec, period, err)
			}
		}
	}

	async fn fetch_pair(
		&self,
		path: &str,
		kind: MetricKind,
		current: DateWindow,
		previous: DateWindow,
	) -> OpsResult<(MetricValue, MetricValue)> {
		// Two independent calls; either failure degrades the whole card.
		let current_body = self.client.execute(path, &current.as_query()).await?;
		let previous_body = self.client.execute(path, &previous.as_query()).await?;
		Ok((
			MetricValue::from_data(scalar_data(&current_body)?, kind)?,
			MetricValue::from_data(scalar_data(&previous_body)?, kind)?,
		))
	}

	fn reading_ok(
		spec: &MetricSpec,
		period: Period,
		current: MetricValue,
		previous: MetricValue,
	) -> MetricReading {
		let (value, cur, prev) = match (&spec.kind, &current) {
			(MetricKind::Text, MetricValue::Text(text)) => (text.clone(), 0.0, 0.0),
			(MetricKind::Text, MetricValue::Number(n)) => {
				(n.to_string(), 0.0, 0.0)
			}
			(MetricKind::Currency, _) => {
				let cur = current.as_number();
				(format_naira(cur), cur, previous.as_number())
			}
			(MetricKind::Count, _) => {
				let cur = current.as_number();
				(format_count(cur.round().max(0.0) as u64), cur, previous.as_number())
			}
		};

		let (change_percent, direction) = compute_change(cur, prev);
		MetricReading {
			id: spec.id.clone(),
			title: spec.title.clone(),
			period,
			value,
			current: cur,
			previous: prev,
			change_percent,
			direction,
			status: MetricStatus::Ok,
		}
	}

	fn reading_failed(spec: &MetricSpec, period: Period, err: OpsError) -> MetricReading {
		let value = match spec.kind {
			MetricKind::Currency => format_naira(0.0),
			MetricKind::Count | MetricKind::Text => "0".to_string(),
		};
		MetricReading {
			id: spec.id.clone(),
			title: spec.title.clone(),
			period,
			value,
			current: 0.0,
			previous: 0.0,
			change_percent: 0.0,
			direction: ChangeDirection::Positive,
			status: MetricStatus::Failed(err.to_string()),
		}
	}
}
