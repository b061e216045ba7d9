//! Error taxonomy shared by every fetch path.
//!
//! Four failure classes, kept deliberately distinct so the UI layer can
//! decide what is retryable and what is a local bug:
//!
//! - [`OpsError::Validation`] — bad filter or date input, rejected before
//!   any network call is made.
//! - [`OpsError::Network`] — timeout, connection failure, or a non-2xx
//!   response with an unparseable body.
//! - [`OpsError::Backend`] — the transport succeeded but the backend
//!   reported failure (`status: false` or a domain error message). The
//!   backend's own message is preserved verbatim.
//! - [`OpsError::Normalization`] — the response arrived but did not carry
//!   the expected `status`/`data.content` envelope.

use thiserror::Error;

/// Errors that can occur while querying the dashboard backend.
#[derive(Debug, Error)]
pub enum OpsError {
	/// Malformed filter or date input, rejected before the network call.
	#[error("Validation error: {0}")]
	Validation(String),

	/// Timeout, connection failure, or an unparseable non-2xx response.
	#[error("Network error: {0}")]
	Network(String),

	/// Transport-level success but a domain-level failure from the backend.
	#[error("Backend error: {message}")]
	Backend {
		/// The backend's own failure message, passed through verbatim.
		message: String,
	},

	/// Response body did not match the expected envelope shape.
	#[error("Normalization error: {0}")]
	Normalization(String),
}

impl OpsError {
	/// Whether the UI may offer an explicit retry for this error.
	///
	/// Network and backend failures are transient from the dashboard's
	/// point of view; validation and normalization failures are not — a
	/// retry with the same input would fail identically.
	pub fn is_retryable(&self) -> bool {
		matches!(self, OpsError::Network(_) | OpsError::Backend { .. })
	}
}

impl From<reqwest::Error> for OpsError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			OpsError::Network(format!("request timed out: {}", err))
		} else if err.is_connect() {
			OpsError::Network(format!("connection failed: {}", err))
		} else if err.is_decode() {
			OpsError::Normalization(format!("response body was not valid JSON: {}", err))
		} else {
			OpsError::Network(err.to_string())
		}
	}
}

/// Result type alias used across the opsdash workspace.
pub type OpsResult<T> = Result<T, OpsError>;
