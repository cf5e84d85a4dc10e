/* src/notify.rs */

//!
//! Hooks fired when no alias of an entry is set.
//!
//! A notifier only observes. It runs exactly once per miss, before the
//! default or optional fallback is considered, and cannot change the outcome.

use crate::Entry;

#[cfg(feature = "logging")]
use log::warn;

/// Side-effecting hook invoked on a lookup miss.
pub trait Notifier: Send + Sync {
	fn notify(&self, entry: &Entry);
}

impl<F> Notifier for F
where
	F: Fn() + Send + Sync,
{
	fn notify(&self, _entry: &Entry) {
		(self)()
	}
}

/// Adapts a closure that wants to see the entry that missed.
pub struct FnNotifier<F>(pub F);

impl<F> Notifier for FnNotifier<F>
where
	F: Fn(&Entry) + Send + Sync,
{
	fn notify(&self, entry: &Entry) {
		(self.0)(entry)
	}
}

impl<F> std::fmt::Debug for FnNotifier<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnNotifier").finish_non_exhaustive()
	}
}

/// Logs a warning through the `log` facade.
#[cfg(feature = "logging")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[cfg(feature = "logging")]
impl Notifier for LogNotifier {
	fn notify(&self, entry: &Entry) {
		warn!(
			"No value set for entry '{}', tried aliases: {:?}",
			entry.name(),
			entry.aliases()
		);
	}
}

/// Emits a `tracing` warning event.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[cfg(feature = "tracing")]
impl Notifier for TracingNotifier {
	fn notify(&self, entry: &Entry) {
		tracing::warn!(
			entry = entry.name(),
			aliases = ?entry.aliases(),
			"no value set for entry"
		);
	}
}
