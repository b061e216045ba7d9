//! Trailing-edge debounce for search-text-driven fetches.
//!
//! Typing in a search box fires a state change per keystroke; fetching on
//! each one is redundant. Each keystroke calls [`Debouncer::fire`]; only
//! the call that is still the latest after the quiet period resolves to
//! `true` and proceeds to fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default quiet period before a search fetch is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debouncer, cheap to clone per input field.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	/// Creates a debouncer with the given quiet period.
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			generation: Arc::new(AtomicU64::new(0)),
		}
	}

	/// Waits out the quiet period; returns `true` only if no newer call
	/// arrived in the meantime. A `false` return means the caller's input
	/// was superseded and no fetch should be issued.
	pub async fn fire(&self) -> bool {
		let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
		tokio::time::sleep(self.delay).await;
		self.generation.load(Ordering::SeqCst) == my_generation
	}
}
