//! Error types for path flattening and expansion.
//!
//! The transforms themselves are deliberately permissive: [`flatten`] and
//! [`flatten_into`] cannot fail, and [`unflatten`]/[`unflatten_into`] fail
//! only when the path configuration is degenerate (every delimiter empty, so
//! no splitter exists to decode with). The remaining variants serve the serde
//! bridge ([`to_value`]/[`from_value`]).
//!
//! [`flatten`]: crate::flatten
//! [`flatten_into`]: crate::flatten_into
//! [`unflatten`]: crate::unflatten
//! [`unflatten_into`]: crate::unflatten_into
//! [`to_value`]: crate::to_value
//! [`from_value`]: crate::from_value
//!
//! ## Examples
//!
//! ```rust
//! use flatpath::{unflatten, Map, PathOptions, Error};
//!
//! let degenerate = PathOptions::new()
//!     .with_prefix("")
//!     .with_suffix("")
//!     .with_list_prefix("")
//!     .with_list_suffix("");
//!
//! let result = unflatten(&Map::new(), &degenerate);
//! assert!(matches!(result, Err(Error::EmptyDelimiters)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Every path delimiter is empty, leaving no splitter to decode with
    #[error("degenerate path configuration: prefix, suffix, list prefix, and list suffix are all empty")]
    EmptyDelimiters,

    /// Unsupported type for conversion into a value tree
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Generic message raised through the serde bridge
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for types that cannot be converted
    /// into a [`Value`](crate::Value).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatpath::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
