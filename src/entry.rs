/* src/entry.rs */

//!
//! The lookup request descriptor.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::notify::Notifier;
use crate::resolver;
use crate::source::{ProcessEnv, Source};
use crate::ResolveError;

/// Describes one configuration lookup.
///
/// `aliases` are probed in order and the first one that is set wins.
/// An empty `default` means no default is configured.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Entry {
	/// Identifier used in error messages only.
	pub name: String,
	/// Keys to probe, highest priority first.
	pub aliases: Vec<String>,
	/// Fired once whenever no alias is set, before any fallback applies.
	#[cfg_attr(feature = "serde", serde(skip))]
	pub on_not_found: Option<Arc<dyn Notifier>>,
	/// Fallback value. Empty means "no default".
	pub default: String,
	/// Resolve to an empty string instead of failing.
	pub optional: bool,
}

impl Entry {
	/// Creates an entry with no aliases, no default and no hook.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn builder(name: impl Into<String>) -> EntryBuilder {
		EntryBuilder::new(name)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn aliases(&self) -> &[String] {
		&self.aliases
	}

	pub fn default_value(&self) -> &str {
		&self.default
	}

	/// True only for a non-empty default.
	///
	/// An explicitly configured empty default cannot be told apart from no default.
	pub fn has_default(&self) -> bool {
		!self.default.is_empty()
	}

	pub fn is_optional(&self) -> bool {
		self.optional
	}

	pub fn notifier(&self) -> Option<&dyn Notifier> {
		self.on_not_found.as_deref()
	}

	/// Resolves against the process environment.
	pub fn resolve(&self) -> Result<String, ResolveError> {
		resolver::resolve_from(self, &ProcessEnv)
	}

	/// Resolves against the given source.
	pub fn resolve_from<S: Source + ?Sized>(&self, source: &S) -> Result<String, ResolveError> {
		resolver::resolve_from(self, source)
	}
}

impl std::fmt::Debug for Entry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Entry")
			.field("name", &self.name)
			.field("aliases", &self.aliases)
			.field("on_not_found", &self.on_not_found.is_some())
			.field("default", &self.default)
			.field("optional", &self.optional)
			.finish()
	}
}

/// Builder for [`Entry`].
#[derive(Debug, Clone)]
pub struct EntryBuilder {
	entry: Entry,
}

impl EntryBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			entry: Entry::new(name),
		}
	}

	/// Appends one alias after the ones already added.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.entry.aliases.push(alias.into());
		self
	}

	pub fn aliases<I, A>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = A>,
		A: Into<String>,
	{
		self.entry.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}

	pub fn default(mut self, value: impl Into<String>) -> Self {
		self.entry.default = value.into();
		self
	}

	pub fn optional(mut self, optional: bool) -> Self {
		self.entry.optional = optional;
		self
	}

	/// Sets the not-found hook. Any `Fn()` closure works.
	pub fn on_not_found<N: Notifier + 'static>(mut self, notifier: N) -> Self {
		self.entry.on_not_found = Some(Arc::new(notifier));
		self
	}

	pub fn build(self) -> Entry {
		self.entry
	}
}
