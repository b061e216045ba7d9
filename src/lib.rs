//! # opsdash
//!
//! Core of an operations dashboard for a virtual-account (vNUBAN) banking
//! platform. Two cooperating pieces, both stateless with respect to the UI:
//!
//! - **Paginated-resource client** ([`client`]): translates filter, sort
//!   and page state into a wire query, executes exactly one GET per fetch,
//!   and normalizes heterogeneous backend records into uniform rows with
//!   page-stable serial numbers. One generic implementation parameterized
//!   per resource, instead of one copy per table.
//! - **Period metric evaluator** ([`metrics`]): maps period labels to
//!   inclusive date windows, derives the adjacent equal-length previous
//!   window, fetches both, and produces a formatted value with a signed
//!   direction and a non-negative change percentage.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use opsdash::prelude::*;
//! use chrono::NaiveDate;
//!
//! # async fn run() -> opsdash::core::OpsResult<()> {
//! let client = PagedClient::new(ClientConfig::builder("https://api.example.com").build());
//!
//! // One page of the transactions table, newest first.
//! let page = client
//!     .fetch_page(
//!         &Transactions,
//!         &FilterSet::new(),
//!         &SortSpec::default(),
//!         PageRequest::new(0, 10),
//!     )
//!     .await?;
//! println!("{} of {} transactions", page.rows.len(), page.total_elements);
//!
//! // A headline card for the last 30 days vs the 30 days before.
//! let evaluator = MetricEvaluator::new(
//!     PagedClient::new(ClientConfig::builder("https://api.example.com").build()),
//! );
//! let spec = MetricSpec::new("inflow", "Total Inflow", "metrics/inflow", MetricKind::Currency);
//! let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let reading = evaluator.evaluate(&spec, Period::Last30Days, now).await;
//! println!("{} ({}% {:?})", reading.value, reading.change_percent, reading.direction);
//! # Ok(())
//! # }
//! ```

pub mod client {
	//! Paginated-resource client: query building, execution, normalization.
	pub use opsdash_client::*;
}

pub mod core {
	//! Shared data model, errors and formatting.
	pub use opsdash_core::*;
}

pub mod metrics {
	//! Period windows and metric evaluation.
	pub use opsdash_metrics::*;
}

/// Commonly used types, importable in one line.
pub mod prelude {
	pub use opsdash_client::resources::{
		ApiLogs, AuditLogs, Customers, Merchants, Payouts, Transactions, Vnubans,
	};
	pub use opsdash_client::{ClientConfig, Debouncer, PagedClient, RequestSeq, build_query};
	pub use opsdash_core::{
		FilterSet, FilterValue, OpsError, OpsResult, Page, PageRequest, SortOrder, SortSpec,
	};
	pub use opsdash_metrics::{
		ChangeDirection, MetricEvaluator, MetricKind, MetricReading, MetricSpec, MetricStatus,
		Period, previous_window, resolve_window,
	};
}
