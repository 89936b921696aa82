//! Variadic option handling with deprecation support.
//!
//! Splits a call made of positional values and an optional trailing options
//! mapping, renames deprecated option keys to their replacements with a
//! warning, and flags option keys the caller used but the API author never
//! declared as supported. Built for library authors who need to change option
//! names without silently breaking callers.
//!
//! # Features
//!
//! - **Option splitting**: a trailing mapping becomes the working options,
//!   everything before it stays positional; the raw call is kept verbatim
//! - **Key aliasing**: deprecated keys are moved onto their replacements
//!   in place, idempotently, without touching caller-owned data
//! - **Deprecation warnings**: exact, call-site-attributed messages with an
//!   optional removal date or version
//! - **Unrecognized-key detection**: set difference against the declared
//!   vocabulary, with a summary of what callers should be using
//!
//! # Example
//!
//! ```
//! use optioning::{Arg, Optioning, Removal};
//!
//! let mut options = Optioning::new(vec![
//!     Arg::value("path"),
//!     Arg::value("commit"),
//!     Arg::options([("to_hash", "upcase"), ("persist", "yes")]),
//! ]);
//!
//! options.deprecate_with("to_hash", "to", Removal::Version("v2.0.0".into()));
//! options.recognize(["persist"]);
//! options.process(&[])?;
//!
//! assert_eq!(options.values().len(), 2);
//! assert_eq!(options.on("to"), Some(&"upcase"));
//! assert_eq!(options.on("persist"), Some(&"yes"));
//! # Ok::<(), optioning::Error>(())
//! ```
//!
//! A caller still passing `to_hash` gets, on the diagnostic channel:
//!
//! ```text
//! NOTE: option `:to_hash` is deprecated; use `:to` instead. It will be removed on or after version v2.0.0.
//! ```

pub mod deprecation;
pub mod error;
pub mod invocation;
pub mod optioning;
pub mod recognized;

pub use deprecation::{Deprecation, Removal};
pub use error::Error;
pub use invocation::{Arg, Invocation};
pub use optioning::Optioning;
pub use recognized::RecognizedSet;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
