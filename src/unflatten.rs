//! Flat path mappings back to nested values.
//!
//! Expansion reverses [`flatten`](crate::flatten): each flat key is reduced
//! to a canonical token list, the tokens are walked as nested map keys, and
//! the entry's value is stored at the end of the walk. Containers are
//! rebuilt fully keyed; turning sequentially indexed maps back into arrays
//! is a separate, final pass ([`Value::promote_lists`]).
//!
//! Decoding does not parse path grammar. It derives a single *splitter*
//! from the options, rewrites every delimiter spelling in the key to that
//! splitter with a fixed sequence of literal replacements, and splits. That
//! makes expansion tolerant of redundant or lopsided delimiter placement
//! (terminal suffixes, unclosed list markers) at the cost of treating
//! delimiter characters inside data keys as structure.
//!
//! ```rust
//! use flatpath::{flat, unflatten, Map, PathOptions, Value};
//!
//! let flat: Map = [
//!     ("server.host".to_string(), Value::from("db1")),
//!     ("server.ports[0]".to_string(), Value::from(5432)),
//!     ("server.ports[1]".to_string(), Value::from(5433)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let value = unflatten(&flat, &PathOptions::default()).unwrap();
//! assert_eq!(value, flat!({
//!     "server": {"host": "db1", "ports": [5432, 5433]}
//! }));
//! ```

use crate::error::{Error, Result};
use crate::{Map, PathOptions, Value};

/// Expands a flat path mapping into a nested value.
///
/// Builds a fresh tree from every entry of `source`, then promotes
/// sequentially indexed containers to arrays, the root included. Entries are
/// processed in mapping order; when two keys decode to the same path, the
/// later entry wins.
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiters`] when all four delimiters of `options`
/// are empty, since no splitter exists to decode keys with. Nothing else
/// fails: undecodable keys degrade to plain map keys rather than erroring.
///
/// # Examples
///
/// ```rust
/// use flatpath::{flat, flatten, unflatten, PathOptions};
///
/// let options = PathOptions::default();
/// let original = flat!({"a": {"b": 1, "c": 2}});
///
/// let flat = flatten(&original, &options);
/// let rebuilt = unflatten(&flat, &options).unwrap();
/// assert_eq!(rebuilt, original);
/// ```
pub fn unflatten(source: &Map, options: &PathOptions) -> Result<Value> {
    let mut destination = Map::new();
    unflatten_into(source, &mut destination, options, "")?;

    let mut value = Value::Object(destination);
    value.promote_lists();
    Ok(value)
}

/// Expands a flat path mapping into an existing destination map.
///
/// The additive form of [`unflatten`]: the rebuilt entries merge into
/// `destination`, and characters of `start` are trimmed from the front of
/// each key before decoding (the counterpart of the `start` argument of
/// [`flatten_into`](crate::flatten_into)).
///
/// The tree is left fully keyed: no array promotion happens here, so
/// repeated calls keep merging into the same generic containers. Run
/// [`Value::promote_lists`] over the result once all sources are in.
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiters`] when all four delimiters of `options`
/// are empty; `destination` is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use flatpath::{flat, unflatten_into, Map, PathOptions, Value};
///
/// let options = PathOptions::default();
/// let flat: Map = [("items[0]".to_string(), Value::from("a"))]
///     .into_iter()
///     .collect();
///
/// let mut destination = Map::new();
/// unflatten_into(&flat, &mut destination, &options, "").unwrap();
///
/// // Still keyed, not yet an array
/// assert_eq!(destination.get("items"), Some(&flat!({"0": "a"})));
///
/// let mut value = Value::Object(destination);
/// value.promote_lists();
/// assert_eq!(value, flat!({"items": ["a"]}));
/// ```
pub fn unflatten_into(
    source: &Map,
    destination: &mut Map,
    options: &PathOptions,
    start: &str,
) -> Result<()> {
    let splitter = match options.splitter() {
        Some(splitter) => splitter,
        None => return Err(Error::EmptyDelimiters),
    };
    let normalizer = KeyNormalizer::new(options, splitter);

    for (key, value) in source.iter() {
        let stripped = key.trim_start_matches(|c: char| start.contains(c));
        let normalized = normalizer.normalize(stripped);
        let trimmed = normalized.trim_matches(|c: char| splitter.contains(c));

        let tokens: Vec<&str> = trimmed.split(splitter).collect();
        if let Some((last, intermediate)) = tokens.split_last() {
            let mut node = &mut *destination;
            for token in intermediate {
                node = descend(node, token);
            }
            node.insert((*last).to_string(), value.clone());
        }
    }

    Ok(())
}

/// Returns the object under `token`, creating it if the slot is missing and
/// replacing whatever non-object value occupies it.
fn descend<'a>(node: &'a mut Map, token: &str) -> &'a mut Map {
    let slot = node
        .entry(token.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just set to an object"),
    }
}

/// The ordered literal-replacement passes that reduce every delimiter
/// spelling in a flat key to the single splitter.
///
/// Pattern order is fixed: map prefix, map suffix, suffix-then-prefix, list
/// prefix, list suffix, list-suffix-then-prefix, doubled splitter. Empty
/// patterns are dropped and duplicates keep their first position, so the
/// pass list depends only on the options.
struct KeyNormalizer {
    splitter: String,
    patterns: Vec<String>,
}

impl KeyNormalizer {
    fn new(options: &PathOptions, splitter: &str) -> Self {
        let candidates = [
            options.prefix.clone(),
            options.suffix.clone(),
            format!("{}{}", options.suffix, options.prefix),
            options.list_prefix.clone(),
            options.list_suffix.clone(),
            format!("{}{}", options.list_suffix, options.list_prefix),
            format!("{}{}", splitter, splitter),
        ];

        let mut patterns = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !candidate.is_empty() && !patterns.contains(&candidate) {
                patterns.push(candidate);
            }
        }

        KeyNormalizer {
            splitter: splitter.to_string(),
            patterns,
        }
    }

    /// Applies every pass in order, each over the whole intermediate result.
    fn normalize(&self, key: &str) -> String {
        let mut result = key.to_string();
        for pattern in &self.patterns {
            result = result.replace(pattern, &self.splitter);
        }
        result
    }
}
