/* tests/env_tests.rs */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use envalias::{Entry, Notifier, ProcessEnv, Source, resolve};
use serial_test::serial;

/// Sets or unsets a variable and restores the previous state on drop.
struct EnvGuard {
	key: &'static str,
	previous: Option<std::ffi::OsString>,
}

impl EnvGuard {
	fn set(key: &'static str, value: &str) -> Self {
		let previous = std::env::var_os(key);
		unsafe { std::env::set_var(key, value) };
		Self { key, previous }
	}

	fn unset(key: &'static str) -> Self {
		let previous = std::env::var_os(key);
		unsafe { std::env::remove_var(key) };
		Self { key, previous }
	}
}

impl Drop for EnvGuard {
	fn drop(&mut self) {
		match &self.previous {
			Some(value) => unsafe { std::env::set_var(self.key, value) },
			None => unsafe { std::env::remove_var(self.key) },
		}
	}
}

fn test_entry() -> Entry {
	Entry::builder("TEST_ENTRY")
		.aliases(["ENVALIAS_TEST_ALIAS1", "ENVALIAS_TEST_ALIAS2"])
		.on_not_found(|| println!("Not found"))
		.default("default")
		.build()
}

#[test]
#[serial]
fn test_env_value_is_returned() {
	let _a = EnvGuard::set("ENVALIAS_TEST_ALIAS1", "test_value");
	let _b = EnvGuard::unset("ENVALIAS_TEST_ALIAS2");

	assert_eq!(resolve(&test_entry()).unwrap(), "test_value");
}

#[test]
#[serial]
fn test_env_second_alias() {
	let _a = EnvGuard::unset("ENVALIAS_TEST_ALIAS1");
	let _b = EnvGuard::set("ENVALIAS_TEST_ALIAS2", "second");

	assert_eq!(test_entry().resolve().unwrap(), "second");
}

#[test]
#[serial]
fn test_env_empty_value_is_set() {
	let _a = EnvGuard::set("ENVALIAS_TEST_ALIAS1", "");
	let _b = EnvGuard::unset("ENVALIAS_TEST_ALIAS2");

	assert!(ProcessEnv.contains("ENVALIAS_TEST_ALIAS1"));
	assert_eq!(resolve(&test_entry()).unwrap(), "");
}

#[test]
#[serial]
fn test_env_unset_falls_back() {
	let _a = EnvGuard::unset("ENVALIAS_TEST_ALIAS1");
	let _b = EnvGuard::unset("ENVALIAS_TEST_ALIAS2");

	let count = Arc::new(AtomicUsize::new(0));
	let hook = count.clone();
	let notifier: Arc<dyn Notifier> = Arc::new(move || {
		hook.fetch_add(1, Ordering::SeqCst);
	});
	let mut entry = test_entry();
	entry.on_not_found = Some(notifier);

	assert_eq!(resolve(&entry).unwrap(), "default");

	entry.default = String::new();
	entry.optional = true;
	assert_eq!(resolve(&entry).unwrap(), "");

	entry.optional = false;
	let err = resolve(&entry).unwrap_err();
	assert!(err.to_string().contains("could not find a value for entry"));

	assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_env_rejects_impossible_keys() {
	assert_eq!(ProcessEnv.lookup(""), None);
	assert_eq!(ProcessEnv.lookup("A=B"), None);
	assert_eq!(ProcessEnv.lookup("A\0B"), None);
}
