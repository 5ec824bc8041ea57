//! # flatpath
//!
//! Bidirectional conversion between nested data structures and flat,
//! path-keyed maps.
//!
//! ## What is path flattening?
//!
//! Flattening collapses a nested structure into a single-level map whose keys
//! are paths like `user.name` or `user.tags[0]`. Expansion reverses the
//! process, rebuilding the nested structure from the paths. Both directions
//! run under a configurable delimiter scheme, so the same data can speak
//! dotted notation, bracket notation, or whatever convention a config store,
//! form encoder, or key-value backend expects.
//!
//! ## Key Features
//!
//! - **Bidirectional**: flatten nested data into path-keyed maps and rebuild
//!   the original structure from them
//! - **Configurable Paths**: six delimiter settings cover dotted, bracketed,
//!   wrapped, and custom styles
//! - **Order-Preserving**: entry order survives both directions
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! flatpath = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Flattening and Expanding
//!
//! ```rust
//! use flatpath::{flat, flatten, unflatten, PathOptions};
//!
//! let value = flat!({
//!     "user": {
//!         "name": "Alice",
//!         "tags": ["admin", "ops"]
//!     }
//! });
//!
//! let options = PathOptions::default();
//! let flat = flatten(&value, &options);
//!
//! assert_eq!(flat.get("user.name"), Some(&flat!("Alice")));
//! assert_eq!(flat.get("user.tags[0]"), Some(&flat!("admin")));
//! assert_eq!(flat.get("user.tags[1]"), Some(&flat!("ops")));
//!
//! let back = unflatten(&flat, &options).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ### Custom Delimiters
//!
//! ```rust
//! use flatpath::{flat, flatten, PathOptions};
//!
//! let options = PathOptions::new()
//!     .with_prefix("{")
//!     .with_suffix("}")
//!     .with_suffix_end(true);
//!
//! let value = flat!({"server": {"host": "db1", "port": 5432}});
//! let flat = flatten(&value, &options);
//!
//! assert_eq!(flat.get("{server}{host}"), Some(&flat!("db1")));
//! ```
//!
//! ### Accumulating Multiple Sources
//!
//! The `_into` variants write into a shared map under a caller-chosen path
//! prefix, so several structures can merge into one flat view:
//!
//! ```rust
//! use flatpath::{flat, flatten_into, Map, PathOptions};
//!
//! let options = PathOptions::default();
//! let mut flat = Map::new();
//!
//! flatten_into(&flat!({"host": "db1"}), &mut flat, &options, "primary.");
//! flatten_into(&flat!({"host": "db2"}), &mut flat, &options, "replica.");
//!
//! assert_eq!(flat.get("primary.host"), Some(&flat!("db1")));
//! assert_eq!(flat.get("replica.host"), Some(&flat!("db2")));
//! ```
//!
//! ### Typed Data via Serde
//!
//! ```rust
//! use flatpath::{flatten, from_value, to_value, unflatten, PathOptions};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server { host: "db1".to_string(), port: 5432 };
//!
//! let options = PathOptions::default();
//! let flat = flatten(&to_value(&server).unwrap(), &options);
//! assert_eq!(flat.get("port").and_then(|v| v.as_i64()), Some(5432));
//!
//! let back: Server = from_value(unflatten(&flat, &options).unwrap()).unwrap();
//! assert_eq!(back, server);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Flattening**: single pass over the tree, one map entry per leaf
//! - **Expansion**: single pass over the entries, normalization linear in
//!   path length
//! - **Memory**: values are cloned once per transfer; paths are built
//!   per-branch with no intermediate tree
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in the public API (except for logic errors that indicate bugs)
//!
//! ## Path Scheme
//!
//! For the complete description of how paths are written and decoded, see
//! the [`encoding`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Flattening and expanding with the defaults
//! - **`custom_delimiters.rs`** - Alternate path styles
//! - **`serde_structs.rs`** - Typed data through the serde bridge
//! - **`accumulate.rs`** - Merging several sources into one flat map
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod encoding;
pub mod error;
pub mod flatten;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod unflatten;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten, flatten_into};
pub use key::Key;
pub use map::Map;
pub use options::PathOptions;
pub use ser::ValueSerializer;
pub use unflatten::{unflatten, unflatten_into};
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful as the entry point into [`flatten`] when the data starts life as
/// ordinary Rust types rather than dynamically built trees.
///
/// # Examples
///
/// ```rust
/// use flatpath::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted (e.g., unsupported
/// types or non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(crate::ser::ValueSerializer)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// Useful as the exit point out of [`unflatten`] when the rebuilt tree
/// should land in ordinary Rust types.
///
/// # Examples
///
/// ```rust
/// use flatpath::{flat, from_value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let value = flat!({"x": 1, "y": 2});
/// let point: Point = from_value(value).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}
