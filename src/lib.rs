//! A line-oriented TOML v0.4 parser producing an owned, strongly-typed value
//! tree, with a printer that emits the tree back as round-trip-stable TOML.
//!
//! The parser reads a document line by line from any [`BufRead`](std::io::BufRead)
//! source and enforces the structural rules (key uniqueness, table identity,
//! array homogeneity) while the tree is built. The first error aborts the
//! parse with a line and column.
//!
//! # Quick start
//!
//! Use [`parse_str`] (or [`parse`] for a reader) to get the root [`Table`].
//! ```
//! # fn main() -> Result<(), toml_tree::Error> {
//! let root = toml_tree::parse_str("name = \"demo\"\nport = 8080")?;
//! assert_eq!(root.get_as::<String>("name").as_deref(), Some("demo"));
//! assert_eq!(root.get_as::<i64>("port"), Some(8080));
//! # Ok(())
//! # }
//! ```
//!
//! Navigate nested tables with dotted paths, and match on [`Value`] when the
//! shape is not known up front:
//! ```
//! # fn main() -> Result<(), toml_tree::Error> {
//! let root = toml_tree::parse_str("[server.net]\nhost = \"localhost\"")?;
//! assert_eq!(
//!     root.get_qualified_as::<String>("server.net.host").as_deref(),
//!     Some("localhost"),
//! );
//! match root.get_qualified("server.net.host") {
//!     Some(toml_tree::Value::String(host)) => assert_eq!(host, "localhost"),
//!     other => panic!("unexpected value: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The root table's [`Display`](std::fmt::Display) form is TOML text that
//! parses back to a structurally equal tree:
//! ```
//! # fn main() -> Result<(), toml_tree::Error> {
//! let root = toml_tree::parse_str("[srv]\nhost = \"h\"\nport = 80")?;
//! let reparsed = toml_tree::parse_str(&root.to_string())?;
//! assert_eq!(root, reparsed);
//! # Ok(())
//! # }
//! ```
//!
//! [`parse_file`] loads a document from disk, and
//! [`parse_base_and_override`] layers an override file over a base
//! configuration.

mod array;
mod error;
mod file;
mod parser;
mod table;
mod time;
mod value;
mod write;

pub use array::{Array, TableArray};
pub use error::{Error, ErrorKind};
pub use file::{merge, parse_base_and_override, parse_file};
pub use parser::{parse, parse_str};
pub use table::Table;
pub use time::DateTime;
pub use value::{FromValue, Kind, Value};

#[cfg(feature = "serde")]
pub mod impl_serde;
