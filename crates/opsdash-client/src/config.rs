//! Client configuration.

use std::time::Duration;

/// Default absolute timeout per request. On expiry the call is treated as
/// a network failure; there is no retry.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`PagedClient`](crate::PagedClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub(crate) base_url: String,
	pub(crate) timeout: Duration,
}

impl ClientConfig {
	/// Starts a builder targeting the given backend base URL.
	///
	/// # Examples
	///
	/// ```
	/// use opsdash_client::ClientConfig;
	/// use std::time::Duration;
	///
	/// let config = ClientConfig::builder("https://api.example.com")
	///     .timeout(Duration::from_secs(5))
	///     .build();
	/// ```
	pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
		ClientConfigBuilder {
			base_url: base_url.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// The backend base URL this client targets.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
	base_url: String,
	timeout: Duration,
}

impl ClientConfigBuilder {
	/// Overrides the per-request timeout (default 10s).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Finalizes the configuration.
	pub fn build(self) -> ClientConfig {
		let base_url = self.base_url.trim_end_matches('/').to_string();
		ClientConfig {
			base_url,
			timeout: self.timeout,
		}
	}
}
