/* src/source/env.rs */

use super::Source;

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
	/// Creates a handle to the process environment.
	pub fn new() -> Self {
		Self
	}
}

impl Source for ProcessEnv {
	fn lookup(&self, key: &str) -> Option<String> {
		// Such keys can never be set; std may panic on them.
		if key.is_empty() || key.contains(['=', '\0']) {
			return None;
		}
		std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
	}
}
