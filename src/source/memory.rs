/* src/source/memory.rs */

use std::collections::BTreeMap;

use super::Source;

/// A simple in-memory source useful for testing and embedded environments.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	data: BTreeMap<String, String>,
}

impl MemorySource {
	/// Creates a new empty MemorySource.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a key, replacing any previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.data.insert(key.into(), value.into());
	}

	/// Unsets a key, returning its previous value.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.data.remove(key)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl Source for MemorySource {
	fn lookup(&self, key: &str) -> Option<String> {
		self.data.get(key).cloned()
	}

	fn contains(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}
}

impl<K, V> FromIterator<(K, V)> for MemorySource
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			data: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
