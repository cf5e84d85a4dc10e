/* src/lib.rs */

//!
//! Resolve a single configuration value from a prioritized list of
//! environment variable aliases.
//!
//! This crate is made of four small pieces:
//!
//! - **entry**: The [`Entry`] descriptor (name, aliases, default, optional flag, hook).
//! - **source**: Where values come from. [`ProcessEnv`] reads the real environment,
//!   [`MemorySource`] is an in-memory stand-in.
//! - **notify**: The [`Notifier`] hook fired when no alias is set.
//! - **resolver**: The lookup-and-fallback algorithm ([`resolve`], [`resolve_from`],
//!   [`resolve_detailed`]).
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `logging`: Debug logging through `log`, plus `notify::LogNotifier`.
//! - `tracing`: `notify::TracingNotifier` built on `tracing`.
//! - `serde`: `Serialize`/`Deserialize` for [`Entry`] and [`Origin`].
//!
//! ## Basic Usage
//!
//! ```no_run
//! use envalias::Entry;
//!
//! let entry = Entry::builder("database url")
//! 	.alias("APP_DATABASE_URL")
//! 	.alias("DATABASE_URL")
//! 	.default("postgres://localhost/app")
//! 	.build();
//!
//! let url = entry.resolve()?;
//! # let _ = url;
//! # Ok::<(), envalias::ResolveError>(())
//! ```
//!
//! See `demos/basic.rs` for a complete example.

pub mod entry;
pub mod error;
pub mod notify;
pub mod resolver;
pub mod source;

pub use entry::{Entry, EntryBuilder};
pub use error::{ResolveError, Result};
pub use notify::{FnNotifier, Notifier};
pub use resolver::{Origin, Resolved, resolve, resolve_detailed, resolve_from};
pub use source::{MemorySource, ProcessEnv, Source};
