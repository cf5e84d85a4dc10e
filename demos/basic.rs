/* demos/basic.rs */

use envalias::{Entry, MemorySource, Origin, resolve_detailed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 1. Alias priority against the real environment
	let home = Entry::builder("home directory")
		.aliases(["ENVALIAS_DEMO_HOME", "HOME", "USERPROFILE"])
		.default("/tmp")
		.build();
	println!("home = {}", home.resolve()?);

	// 2. Fallbacks against an in-memory source
	let source: MemorySource = [("LOG_LEVEL", "debug")].into_iter().collect();

	let level = Entry::builder("log level")
		.aliases(["APP_LOG_LEVEL", "LOG_LEVEL"])
		.build();
	let port = Entry::builder("port")
		.alias("APP_PORT")
		.default("8080")
		.on_not_found(|| println!("APP_PORT not set, using default"))
		.build();
	let proxy = Entry::builder("proxy")
		.alias("APP_PROXY")
		.optional(true)
		.build();

	for entry in [&level, &port, &proxy] {
		let resolved = resolve_detailed(entry, &source)?;
		let origin = match &resolved.origin {
			Origin::Alias(alias) => format!("alias {alias}"),
			Origin::Default => "default".to_string(),
			Origin::Optional => "optional".to_string(),
		};
		println!("{} = {:?} ({})", entry.name(), resolved.value, origin);
	}

	// 3. Required entry with nothing set
	let token = Entry::builder("api token").aliases(["APP_TOKEN", "TOKEN"]).build();
	if let Err(e) = token.resolve_from(&source) {
		println!("{}", e);
	}

	Ok(())
}
