//! Path segment classification.
//!
//! Every segment of an encoded path is either a list index or a map key.
//! [`Key`] makes that distinction explicit instead of leaving it to ad hoc
//! string inspection: a segment parses as [`Key::Index`] only when it is the
//! canonical decimal rendering of a `u64` (non-empty, ASCII digits, no
//! leading zero except `"0"` itself). Everything else is a [`Key::Name`].

use std::fmt;

/// A single path segment, classified as a list index or a map key.
///
/// # Examples
///
/// ```rust
/// use flatpath::Key;
///
/// assert_eq!(Key::parse("0"), Key::Index(0));
/// assert_eq!(Key::parse("42"), Key::Index(42));
/// assert_eq!(Key::parse("007"), Key::Name("007"));
/// assert_eq!(Key::parse("name"), Key::Name("name"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
    /// A non-negative list index
    Index(u64),
    /// A textual map key
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Classifies a segment.
    ///
    /// A segment is an index only in its canonical form: `"0"` is an index,
    /// while `""`, `"00"`, `"01"`, `"-1"`, and digit runs beyond `u64::MAX`
    /// are all names.
    pub fn parse(segment: &'a str) -> Self {
        if is_canonical_index(segment) {
            if let Ok(index) = segment.parse::<u64>() {
                return Key::Index(index);
            }
        }
        Key::Name(segment)
    }

    /// Returns `true` if this segment is a list index.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns the index value, if this segment is one.
    #[must_use]
    pub const fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

fn is_canonical_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return false;
    }
    segment.bytes().all(|b| b.is_ascii_digit())
}
