//! Period metric evaluator for the opsdash headline cards
//!
//! A metric card shows a value for a chosen period ("Last 7 days", "This
//! month", ...) compared against the immediately preceding period of equal
//! length. This crate maps period labels onto absolute, inclusive date
//! windows, derives the adjacent previous window, fetches both values, and
//! produces a formatted reading with a non-negative change percentage and
//! an explicit direction.
//!
//! All window math takes an injected reference date — never a hidden
//! wall-clock read — so evaluations are deterministic and testable.

pub mod evaluator;
pub mod period;
pub mod window;

pub use evaluator::{
	ChangeDirection, MetricEvaluator, MetricKind, MetricReading, MetricSpec, MetricStatus,
	compute_change,
};
pub use period::Period;
pub use window::{DateWindow, PLATFORM_EPOCH, previous_window, resolve_window};
