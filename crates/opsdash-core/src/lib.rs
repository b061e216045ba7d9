//! Shared building blocks for the opsdash workspace
//!
//! This crate holds everything the paginated-resource client and the metric
//! evaluator have in common:
//!
//! - **Query state**: [`FilterSet`], [`SortSpec`], [`PageRequest`]
//! - **Results**: [`Page`] and the [`serial_number`] convention
//! - **Wire envelope**: [`ListEnvelope`] and scalar-data extraction for the
//!   backend's `{ status, message, data }` response shape
//! - **Errors**: the [`OpsError`] taxonomy shared by every fetch path
//! - **Formatting**: naira/count display helpers used by metric cards
//!
//! Pagination is zero-based everywhere inside the workspace; conversion to
//! the one-based numbering some screens display happens only at the
//! presentation boundary via [`PageRequest::from_one_based`].

pub mod envelope;
pub mod error;
pub mod humanize;
pub mod page;
pub mod query;
pub mod value;

pub use envelope::ListEnvelope;
pub use error::{OpsError, OpsResult};
pub use humanize::{format_count, format_naira, intcomma};
pub use page::{Page, serial_number};
pub use query::{FilterSet, FilterValue, PageRequest, SortOrder, SortSpec};
