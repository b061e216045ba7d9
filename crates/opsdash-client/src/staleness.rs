//! Last-fetch-wins guard for overlapping requests.
//!
//! Requests in flight are not cancelled when a newer one is issued for the
//! same table; instead each fetch takes a token and only the most recently
//! issued token may apply its result. Everything older is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic request sequence for one table or metric card.
///
/// # Examples
///
/// ```
/// use opsdash_client::RequestSeq;
///
/// let seq = RequestSeq::new();
/// let first = seq.begin();
/// let second = seq.begin();
///
/// // The older response arrives late and is discarded.
/// assert!(!seq.is_current(first));
/// assert!(seq.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct RequestSeq {
	issued: AtomicU64,
}

impl RequestSeq {
	/// Creates a fresh sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a new fetch and returns its token. Any previously issued
	/// token becomes stale immediately.
	pub fn begin(&self) -> RequestToken {
		RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
	}

	/// Whether `token` is still the most recently issued fetch. A `false`
	/// result means the response must be dropped, not applied.
	pub fn is_current(&self, token: RequestToken) -> bool {
		self.issued.load(Ordering::SeqCst) == token.0
	}
}
