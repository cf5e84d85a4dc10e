/* src/source/mod.rs */

use std::sync::Arc;

mod env;
mod memory;

pub use env::ProcessEnv;
pub use memory::MemorySource;

/// Read-only key/value store probed by the resolver.
///
/// `Some` means the key is set, even when the value is empty.
/// `None` means the key is unset.
pub trait Source: Send + Sync {
	/// Looks up a single key by exact name.
	fn lookup(&self, key: &str) -> Option<String>;

	/// Returns true if the key is set.
	fn contains(&self, key: &str) -> bool {
		self.lookup(key).is_some()
	}
}

impl<S: Source + ?Sized> Source for &S {
	fn lookup(&self, key: &str) -> Option<String> {
		(**self).lookup(key)
	}
}

impl<S: Source + ?Sized> Source for Arc<S> {
	fn lookup(&self, key: &str) -> Option<String> {
		(**self).lookup(key)
	}
}

impl<S: Source + ?Sized> Source for Box<S> {
	fn lookup(&self, key: &str) -> Option<String> {
		(**self).lookup(key)
	}
}
