//! Nested values to flat path mappings.
//!
//! Flattening walks a nested [`Value`] and emits one entry per leaf into a
//! [`Map`], the key being the delimiter-encoded path of that leaf. The
//! encoding is controlled entirely by [`PathOptions`]: map segments and list
//! segments are decorated with their own prefix/suffix pair, and each
//! container picks its decoration style once, when it is entered.
//!
//! ```rust
//! use flatpath::{flat, flatten, PathOptions};
//!
//! let value = flat!({
//!     "name": "webapp",
//!     "ports": [80, 443],
//!     "limits": {"cpu": 2}
//! });
//!
//! let flat = flatten(&value, &PathOptions::default());
//! let keys: Vec<_> = flat.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "ports[0]", "ports[1]", "limits.cpu"]);
//! ```
//!
//! Leaves are cloned through unchanged, whatever their kind. An empty array
//! or object is itself a leaf: it has no entries to walk, so it is stored
//! verbatim under its path instead of vanishing.

use crate::{Key, Map, PathOptions, Value};

/// Flattens a nested value into a fresh path mapping.
///
/// Every leaf of `source` lands in the result under its encoded path. A
/// `source` that is itself a leaf (any scalar, or an empty container)
/// produces an empty mapping, since there are no entries to name.
///
/// # Examples
///
/// ```rust
/// use flatpath::{flat, flatten, PathOptions};
///
/// let value = flat!({"a": {"b": 1, "c": 2}});
/// let flat = flatten(&value, &PathOptions::default());
///
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat.get("a.b").and_then(|v| v.as_i64()), Some(1));
/// assert_eq!(flat.get("a.c").and_then(|v| v.as_i64()), Some(2));
/// ```
#[must_use]
pub fn flatten(source: &Value, options: &PathOptions) -> Map {
    let mut destination = Map::new();
    flatten_into(source, &mut destination, options, "");
    destination
}

/// Flattens a nested value into an existing path mapping.
///
/// The additive form of [`flatten`]: entries already in `destination` are
/// left alone (an emitted path that collides with an existing key overwrites
/// just that key), and every emitted path begins with `start`. Passing a
/// distinct `start` per call namespaces several sources into one mapping.
///
/// # Examples
///
/// ```rust
/// use flatpath::{flat, flatten_into, Map, PathOptions};
///
/// let options = PathOptions::default();
/// let mut flat = Map::new();
///
/// flatten_into(&flat!({"host": "a"}), &mut flat, &options, "primary.");
/// flatten_into(&flat!({"host": "b"}), &mut flat, &options, "replica.");
///
/// assert_eq!(flat.get("primary.host").and_then(|v| v.as_str()), Some("a"));
/// assert_eq!(flat.get("replica.host").and_then(|v| v.as_str()), Some("b"));
/// ```
pub fn flatten_into(source: &Value, destination: &mut Map, options: &PathOptions, start: &str) {
    let entries = match Entries::of(source) {
        Some(entries) => entries,
        None => return,
    };

    let list_style = options.has_list_markers() && source.is_list();
    let (prefix, suffix, suffix_end) = if list_style {
        (
            &options.list_prefix,
            &options.list_suffix,
            options.list_suffix_end,
        )
    } else {
        (&options.prefix, &options.suffix, options.suffix_end)
    };

    // A list reached through a map segment sheds that segment's trailing
    // suffix characters, except when terminal map segments keep their
    // suffix anyway (suffix_end). Char-set trim, not substring removal.
    let start = if list_style && !options.suffix_end {
        start.trim_end_matches(|c| options.suffix.contains(c))
    } else {
        start
    };

    for (key, value) in entries {
        let mut path = format!("{}{}{}", start, prefix, key);
        if value.is_leaf() {
            if suffix_end {
                path.push_str(suffix);
            }
            destination.insert(path, value.clone());
        } else {
            path.push_str(suffix);
            flatten_into(value, destination, options, &path);
        }
    }
}

/// Unified iteration over a container's entries, indices and names alike.
enum Entries<'a> {
    Seq(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Keyed(indexmap::map::Iter<'a, String, Value>),
}

impl<'a> Entries<'a> {
    /// `None` for leaves, including empty containers.
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) if !items.is_empty() => {
                Some(Entries::Seq(items.iter().enumerate()))
            }
            Value::Object(map) if !map.is_empty() => Some(Entries::Keyed(map.iter())),
            _ => None,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Seq(iter) => iter
                .next()
                .map(|(index, value)| (Key::Index(index as u64), value)),
            Entries::Keyed(iter) => iter.next().map(|(key, value)| (Key::parse(key), value)),
        }
    }
}
