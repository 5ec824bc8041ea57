//! Configuration options for path encoding.
//!
//! This module provides [`PathOptions`], the six-knob description of how a
//! position in a nested structure is written as a flat key. Map segments and
//! list segments are decorated independently, which is what lets the default
//! configuration spell a path as `users[0].name`-style keys (well,
//! `users[0]name` exactly, since the default map prefix is empty; see the
//! [`encoding`](crate::encoding) module for the precise grammar).
//!
//! The same options drive both directions. Flattening reads all six fields;
//! expansion only needs the delimiter texts, deriving its splitter from them
//! and ignoring the `*_end` flags (redundant trailing delimiters normalize
//! away).
//!
//! ## Examples
//!
//! ```rust
//! use flatpath::{flat, flatten, PathOptions};
//!
//! let value = flat!({"user": {"name": "Alice", "tags": ["a", "b"]}});
//!
//! // Default encoding: dots after map keys, brackets around list indices
//! let flat = flatten(&value, &PathOptions::default());
//! let keys: Vec<_> = flat.keys().cloned().collect();
//! assert_eq!(keys, vec!["user.name", "user.tags[0]", "user.tags[1]"]);
//!
//! // Template-style encoding
//! let options = PathOptions::new()
//!     .with_prefix("{")
//!     .with_suffix("}")
//!     .with_suffix_end(true);
//! let flat = flatten(&value, &options);
//! assert!(flat.get("{user}{name}").is_some());
//! ```

use crate::error::{Error, Result};

/// Path encoding configuration.
///
/// Three delimiter fields describe map segments (`prefix`, `suffix`,
/// `suffix_end`) and three describe list segments (`list_prefix`,
/// `list_suffix`, `list_suffix_end`). A segment is written as
/// `prefix + key`, followed by `suffix` when the segment leads into deeper
/// nesting, or when the corresponding `*_end` flag asks for the suffix on
/// terminal segments too.
///
/// A flatten and the unflatten that decodes its output must use identical
/// options.
///
/// # Examples
///
/// ```rust
/// use flatpath::PathOptions;
///
/// // Default: `a.b` for maps, `a[0]` for lists
/// let options = PathOptions::new();
/// assert_eq!(options.suffix, ".");
/// assert_eq!(options.list_prefix, "[");
/// assert!(options.list_suffix_end);
///
/// // Custom configuration
/// let options = PathOptions::new()
///     .with_prefix("{")
///     .with_suffix("}")
///     .with_suffix_end(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathOptions {
    /// Written before every map key segment
    pub prefix: String,
    /// Written after a map key segment that leads into deeper nesting
    pub suffix: String,
    /// Also write `suffix` after terminal map segments
    pub suffix_end: bool,
    /// Written before every list index segment
    pub list_prefix: String,
    /// Written after a list index segment that leads into deeper nesting
    pub list_suffix: String,
    /// Also write `list_suffix` after terminal list segments
    pub list_suffix_end: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            prefix: String::new(),
            suffix: ".".to_string(),
            suffix_end: false,
            list_prefix: "[".to_string(),
            list_suffix: "]".to_string(),
            list_suffix_end: true,
        }
    }
}

impl PathOptions {
    /// Creates the default configuration (`.` map suffix, `[` `]` list
    /// markers, list suffix on terminal segments).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatpath::PathOptions;
    ///
    /// let options = PathOptions::new();
    /// assert_eq!(options.prefix, "");
    /// assert!(!options.suffix_end);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the map key prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the map key suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets whether terminal map segments also get the suffix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatpath::{flat, flatten, PathOptions};
    ///
    /// let value = flat!({"a": {"b": 1}});
    /// let options = PathOptions::new().with_suffix_end(true);
    /// let flat = flatten(&value, &options);
    /// assert!(flat.get("a.b.").is_some());
    /// ```
    #[must_use]
    pub fn with_suffix_end(mut self, suffix_end: bool) -> Self {
        self.suffix_end = suffix_end;
        self
    }

    /// Sets the list index prefix.
    #[must_use]
    pub fn with_list_prefix(mut self, list_prefix: impl Into<String>) -> Self {
        self.list_prefix = list_prefix.into();
        self
    }

    /// Sets the list index suffix.
    #[must_use]
    pub fn with_list_suffix(mut self, list_suffix: impl Into<String>) -> Self {
        self.list_suffix = list_suffix.into();
        self
    }

    /// Sets whether terminal list segments also get the suffix.
    ///
    /// Defaults to `true`, closing the bracket in keys like `tags[0]`.
    #[must_use]
    pub fn with_list_suffix_end(mut self, list_suffix_end: bool) -> Self {
        self.list_suffix_end = list_suffix_end;
        self
    }

    /// Returns the splitter used to decode flat keys: the first non-empty of
    /// `suffix`, `prefix`, `list_prefix`, `list_suffix`, in that priority
    /// order.
    ///
    /// Returns `None` only for the degenerate configuration where all four
    /// are empty, in which case flat keys carry no structure to decode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatpath::PathOptions;
    ///
    /// assert_eq!(PathOptions::new().splitter(), Some("."));
    ///
    /// let no_suffix = PathOptions::new().with_suffix("");
    /// assert_eq!(no_suffix.splitter(), Some("["));
    /// ```
    #[must_use]
    pub fn splitter(&self) -> Option<&str> {
        [
            &self.suffix,
            &self.prefix,
            &self.list_prefix,
            &self.list_suffix,
        ]
        .into_iter()
        .find(|delimiter| !delimiter.is_empty())
        .map(String::as_str)
    }

    /// Checks that this configuration can decode flat keys.
    ///
    /// [`unflatten`](crate::unflatten) performs the same check and fails
    /// fast; calling this up front lets configuration errors surface where
    /// the options are built rather than where they are first used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiters`] when all four delimiters are
    /// empty.
    pub fn validate(&self) -> Result<()> {
        match self.splitter() {
            Some(_) => Ok(()),
            None => Err(Error::EmptyDelimiters),
        }
    }

    /// List decoration is in play as soon as either list delimiter is
    /// non-empty.
    pub(crate) fn has_list_markers(&self) -> bool {
        !self.list_prefix.is_empty() || !self.list_suffix.is_empty()
    }
}
