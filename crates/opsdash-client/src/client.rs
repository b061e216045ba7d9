//! The paged-resource client: one GET per fetch, no retries.

use opsdash_core::envelope::{self, ListEnvelope};
use opsdash_core::{FilterSet, OpsError, OpsResult, Page, PageRequest, SortSpec, serial_number};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::builder::build_query;
use crate::config::ClientConfig;
use crate::resource::Resource;

/// HTTP client shared by every dashboard table.
///
/// Stateless between calls: each fetch is an independent request and each
/// result replaces the previous page wholesale. In-flight requests are not
/// cancelled when a newer one is issued; callers discard stale results via
/// [`RequestSeq`](crate::RequestSeq).
pub struct PagedClient {
	http: reqwest::Client,
	config: ClientConfig,
}

impl PagedClient {
	/// Creates a client from the given configuration.
	pub fn new(config: ClientConfig) -> Self {
		let http = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.expect("failed to construct HTTP client");
		Self { http, config }
	}

	/// Creates a client around an existing `reqwest::Client`.
	///
	/// The caller's client is used as-is; the configured timeout is not
	/// re-applied.
	pub fn with_client(config: ClientConfig, http: reqwest::Client) -> Self {
		Self { http, config }
	}

	/// Fetches and normalizes one page of a resource.
	///
	/// Composition of [`build_query`], [`execute`](Self::execute) and
	/// [`normalize`](Self::normalize); the entry point table views use.
	pub async fn fetch_page<R: Resource>(
		&self,
		resource: &R,
		filters: &FilterSet,
		sort: &SortSpec,
		page: PageRequest,
	) -> OpsResult<Page<R::Row>> {
		let query = build_query(filters, sort, page, resource);
		let body = self.execute(resource.path(), &query).await?;
		Self::normalize(resource, &body, page)
	}

	/// Performs exactly one GET against `path` with the given query.
	///
	/// No retry and no backoff: timeouts and connection failures surface
	/// as [`OpsError::Network`], `status: false` bodies as
	/// [`OpsError::Backend`] carrying the backend's own message.
	pub async fn execute(&self, path: &str, query: &[(String, String)]) -> OpsResult<Value> {
		let url = format!("{}/{}", self.config.base_url, path);
		debug!(%url, params = query.len(), "issuing dashboard query");

		let response = self.http.get(&url).query(query).send().await?;
		let status = response.status();
		let text = response.text().await?;

		interpret_response(status, &text).inspect_err(|err| match err {
			OpsError::Network(detail) => warn!(%url, %detail, "network failure"),
			OpsError::Backend { message } => warn!(%url, %message, "backend failure"),
			_ => {}
		})
	}

	/// Normalizes a raw list response into a typed page.
	///
	/// Fails with [`OpsError::Normalization`] when the body lacks the
	/// `status`/`data.content` envelope. Serial numbers are assigned from
	/// the requested page index so they stay stable across backends.
	pub fn normalize<R: Resource>(
		resource: &R,
		body: &Value,
		page: PageRequest,
	) -> OpsResult<Page<R::Row>> {
		let envelope = ListEnvelope::from_value(body)?;

		let rows: Vec<R::Row> = envelope
			.content
			.iter()
			.enumerate()
			.map(|(position, record)| {
				resource.map_row(record, serial_number(page.index, page.size, position))
			})
			.collect();

		if rows.len() as u32 > page.size {
			warn!(
				resource = resource.path(),
				returned = rows.len(),
				size = page.size,
				"backend returned more rows than the requested page size"
			);
		}

		let result = Page {
			rows,
			total_elements: envelope.total_elements,
			total_pages: envelope.total_pages,
			index: page.index,
		};

		// Cross-check only; the backend-reported count stays authoritative.
		let expected = result.expected_pages(page.size);
		if expected != result.total_pages {
			warn!(
				resource = resource.path(),
				reported = result.total_pages,
				expected,
				"backend totalPages disagrees with totalElements/size"
			);
		}

		Ok(result)
	}
}

/// Maps an HTTP status and body onto the error taxonomy.
///
/// Pure so that the status-code handling is testable without a server:
/// - non-2xx with a parseable `message` → [`OpsError::Backend`]
/// - non-2xx otherwise → [`OpsError::Network`]
/// - 2xx with `status: false` → [`OpsError::Backend`]
/// - 2xx with an unparseable body → [`OpsError::Normalization`]
pub(crate) fn interpret_response(status: StatusCode, body: &str) -> OpsResult<Value> {
	let parsed: Result<Value, _> = serde_json::from_str(body);

	if !status.is_success() {
		return Err(match parsed.ok().as_ref().and_then(envelope::backend_message) {
			Some(message) => OpsError::Backend {
				message: message.to_string(),
			},
			None => OpsError::Network(format!("HTTP {}", status.as_u16())),
		});
	}

	let value = parsed
		.map_err(|e| OpsError::Normalization(format!("malformed JSON body: {}", e)))?;
	envelope::check_status(&value)?;
	Ok(value)
}
