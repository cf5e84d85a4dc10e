/* src/resolver.rs */

//!
//! Alias lookup with default and optional fallbacks.
//!
//! The first set alias wins. On a miss the entry's hook fires, then the
//! non-empty default applies, then the optional empty value, and finally
//! [`ResolveError::NotFound`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use log::debug;

use crate::source::{ProcessEnv, Source};
use crate::{Entry, ResolveError};

/// Which branch produced a resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Origin {
	/// The named alias was set.
	Alias(String),
	/// No alias was set; the default was used.
	Default,
	/// No alias was set and no default exists; the entry is optional.
	Optional,
}

/// A resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
	pub value: String,
	pub origin: Origin,
}

impl Resolved {
	pub fn into_value(self) -> String {
		self.value
	}

	/// True when the value came from an alias rather than a fallback.
	pub fn is_set(&self) -> bool {
		matches!(self.origin, Origin::Alias(_))
	}
}

/// Resolves an entry against the process environment.
pub fn resolve(entry: &Entry) -> Result<String, ResolveError> {
	resolve_from(entry, &ProcessEnv)
}

/// Resolves an entry against the given source.
pub fn resolve_from<S: Source + ?Sized>(entry: &Entry, source: &S) -> Result<String, ResolveError> {
	resolve_detailed(entry, source).map(Resolved::into_value)
}

/// Resolves an entry and reports which branch produced the value.
pub fn resolve_detailed<S: Source + ?Sized>(
	entry: &Entry,
	source: &S,
) -> Result<Resolved, ResolveError> {
	for alias in entry.aliases() {
		if let Some(value) = source.lookup(alias) {
			#[cfg(feature = "logging")]
			debug!("Entry '{}' resolved from alias '{}'", entry.name(), alias);

			return Ok(Resolved {
				value,
				origin: Origin::Alias(alias.clone()),
			});
		}
	}

	if let Some(notifier) = entry.notifier() {
		notifier.notify(entry);
	}

	if entry.has_default() {
		#[cfg(feature = "logging")]
		debug!("Entry '{}' fell back to its default", entry.name());

		return Ok(Resolved {
			value: entry.default_value().to_string(),
			origin: Origin::Default,
		});
	}

	if entry.is_optional() {
		#[cfg(feature = "logging")]
		debug!("Optional entry '{}' resolved to empty", entry.name());

		return Ok(Resolved {
			value: String::new(),
			origin: Origin::Optional,
		});
	}

	#[cfg(feature = "logging")]
	debug!("Entry '{}' has no value", entry.name());

	Err(ResolveError::not_found(entry))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MemorySource;

	#[test]
	fn first_set_alias_wins() {
		let source: MemorySource = [("B", "second"), ("C", "third")].into_iter().collect();
		let entry = Entry::builder("x").aliases(["A", "B", "C"]).build();

		let resolved = resolve_detailed(&entry, &source).unwrap();
		assert_eq!(resolved.value, "second");
		assert_eq!(resolved.origin, Origin::Alias("B".to_string()));
	}

	#[test]
	fn optional_without_default() {
		let entry = Entry::builder("x").alias("A").optional(true).build();
		let resolved = resolve_detailed(&entry, &MemorySource::new()).unwrap();
		assert_eq!(resolved.origin, Origin::Optional);
		assert!(resolved.value.is_empty());
		assert!(!resolved.is_set());
	}
}
