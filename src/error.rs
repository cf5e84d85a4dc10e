/* src/error.rs */

use crate::Entry;

/// Result type alias.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors produced while resolving an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// No alias was set, no default was configured and the entry is not optional.
	///
	/// The aliases are rendered as a bracketed, space separated list.
	#[error("could not find a value for entry \"{name}\", tried aliases: [{}]", .aliases.join(" "))]
	NotFound { name: String, aliases: Vec<String> },
}

impl ResolveError {
	pub(crate) fn not_found(entry: &Entry) -> Self {
		ResolveError::NotFound {
			name: entry.name().to_string(),
			aliases: entry.aliases().to_vec(),
		}
	}

	/// Name of the entry that failed to resolve.
	pub fn name(&self) -> &str {
		match self {
			ResolveError::NotFound { name, .. } => name,
		}
	}

	/// Aliases that were tried, in lookup order.
	pub fn aliases(&self) -> &[String] {
		match self {
			ResolveError::NotFound { aliases, .. } => aliases,
		}
	}
}
