//! Generic paginated-resource client for the opsdash backend
//!
//! Every dashboard table talks to its backend resource the same way:
//! translate the current filter/sort/page state into a flat query string,
//! issue exactly one GET, and normalize the heterogeneous response into a
//! uniform page of rows with locally computed serial numbers. This crate
//! implements that protocol once, parameterized by a [`Resource`]
//! configuration, instead of once per table.
//!
//! # Example
//!
//! ```no_run
//! use opsdash_client::{PagedClient, ClientConfig, resources::Transactions};
//! use opsdash_core::{FilterSet, FilterValue, PageRequest, SortSpec};
//!
//! # async fn run() -> opsdash_core::OpsResult<()> {
//! let client = PagedClient::new(ClientConfig::builder("https://api.example.com").build());
//!
//! let mut filters = FilterSet::new();
//! filters.set("status", FilterValue::Choice("SUCCESS".into()));
//!
//! let page = client
//!     .fetch_page(
//!         &Transactions,
//!         &filters,
//!         &SortSpec::default(),
//!         PageRequest::new(0, 10),
//!     )
//!     .await?;
//! assert!(page.rows.len() <= 10);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod debounce;
pub mod resource;
pub mod resources;
pub mod staleness;

pub use builder::build_query;
pub use client::PagedClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use debounce::Debouncer;
pub use resource::Resource;
pub use staleness::{RequestSeq, RequestToken};
