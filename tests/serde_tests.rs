/* tests/serde_tests.rs */

#![cfg(feature = "serde")]

use envalias::{Entry, MemorySource, Origin, resolve_detailed};

#[test]
fn test_entry_from_json() {
	let entry: Entry = serde_json::from_str(
		r#"{"name": "port", "aliases": ["APP_PORT", "PORT"], "default": "8080"}"#,
	)
	.unwrap();

	assert_eq!(entry.name(), "port");
	assert_eq!(entry.aliases(), ["APP_PORT", "PORT"]);
	assert!(!entry.is_optional());
	assert!(entry.notifier().is_none());

	let source: MemorySource = [("PORT", "9000")].into_iter().collect();
	assert_eq!(entry.resolve_from(&source).unwrap(), "9000");
}

#[test]
fn test_entry_serialize_skips_hook() {
	let entry = Entry::builder("port")
		.alias("PORT")
		.on_not_found(|| {})
		.build();

	let json = serde_json::to_value(&entry).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"name": "port",
			"aliases": ["PORT"],
			"default": "",
			"optional": false,
		})
	);
}

#[test]
fn test_origin_serialize() {
	let entry = Entry::builder("port").alias("PORT").default("80").build();
	let resolved = resolve_detailed(&entry, &MemorySource::new()).unwrap();
	assert_eq!(resolved.origin, Origin::Default);
	assert_eq!(serde_json::to_string(&resolved.origin).unwrap(), "\"Default\"");
}
