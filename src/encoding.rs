//! Flat Path Encoding
//!
//! This module documents the path encoding scheme used by this library's
//! flatten and expand transforms.
//!
//! # Overview
//!
//! Flattening turns a nested structure into a single-level map whose keys are
//! paths. Each path records the chain of object keys and list indices that
//! led to a leaf, joined with configurable delimiters. Expansion reverses the
//! process: it decodes paths back into segments and rebuilds the tree.
//!
//! ```text
//! {"user": {"name": "Alice", "tags": ["a", "b"]}}
//!
//! user.name    -> "Alice"
//! user.tags[0] -> "a"
//! user.tags[1] -> "b"
//! ```
//!
//! Values are never inspected or rewritten. Only container structure is
//! encoded into paths; leaves transfer verbatim in both directions.
//!
//! # Delimiter Configuration
//!
//! Six settings control how paths are written, all carried by
//! [`PathOptions`](crate::PathOptions):
//!
//! | Option | Default | Role |
//! |--------|---------|------|
//! | `prefix` | `""` | Written before each key of a keyed container |
//! | `suffix` | `"."` | Written after each key of a keyed container |
//! | `suffix_end` | `false` | Keep the suffix on leaf paths |
//! | `list_prefix` | `"["` | Written before each index of a list |
//! | `list_suffix` | `"]"` | Written after each index of a list |
//! | `list_suffix_end` | `true` | Keep the list suffix on leaf paths |
//!
//! The defaults produce the familiar dotted style with bracketed indices.
//! Other combinations express other conventions:
//!
//! | Configuration | Example path |
//! |---------------|--------------|
//! | defaults | `user.tags[1]` |
//! | `prefix="{"`, `suffix="}"`, `suffix_end=true` | `{user}{tags}[1]` |
//! | `suffix="/"` with list markers empty | `user/tags/1` |
//!
//! # Encoding
//!
//! Paths are built container by container while walking the tree:
//!
//! - Keyed containers write `prefix + key + suffix` for each entry.
//! - Lists write `list_prefix + index + list_suffix` instead, when list
//!   markers are configured. A keyed container whose keys are exactly
//!   `"0", "1", ...` in order counts as a list here.
//! - At a leaf the trailing suffix is kept or dropped per `suffix_end`
//!   (`list_suffix_end` for the list style). With the defaults this is why
//!   `user.name` has no trailing dot while `user.tags[1]` keeps its bracket.
//! - When a list begins under a keyed path, the pending suffix is shed:
//!   characters belonging to the suffix are trimmed from the end of the
//!   accumulated path before the first `list_prefix` is written. That turns
//!   `user.tags.` + `[0]` into `user.tags[0]`.
//!
//! Structures that produce no entries:
//!
//! - A top-level leaf (scalar, empty array, empty object) has no container
//!   to walk; flattening yields an empty map.
//! - Empty arrays and objects below the top level are leaves; they are
//!   stored verbatim under the path of their key.
//!
//! # Decoding
//!
//! Expansion cannot assume paths came from this library, so it normalizes
//! first and splits second.
//!
//! **1. Splitter selection.** The splitter is the first non-empty delimiter
//! in the order `suffix`, `prefix`, `list_prefix`, `list_suffix`. A
//! configuration with all four empty has no splitter and is rejected.
//!
//! **2. Normalization.** Every delimiter and adjacent delimiter pair is
//! rewritten to the splitter. The rewrite patterns are applied in order,
//! skipping empty and repeated patterns:
//!
//! | Pattern | Covers |
//! |---------|--------|
//! | `prefix` | key openers |
//! | `suffix` | key closers |
//! | `suffix + prefix` | closer immediately followed by opener |
//! | `list_prefix` | index openers |
//! | `list_suffix` | index closers |
//! | `list_suffix + list_prefix` | adjacent index markers |
//! | `splitter + splitter` | doubled splitters collapse to one |
//!
//! With the defaults the patterns are `.`, `[`, `]`, `][`, `..` and the
//! splitter is `.`:
//!
//! ```text
//! user.tags[0]  ->  user.tags.0.
//! ```
//!
//! **3. Trimming.** Characters of the expansion prefix (the `start`
//! argument) are trimmed from the front of the raw path, then splitter
//! characters are trimmed from both ends of the normalized path. Trimming
//! is by character set, so multi-character delimiters shed any run of their
//! characters.
//!
//! **4. Splitting and insertion.** The remaining path splits on the
//! splitter into segments. Interior segments become keyed containers on the
//! way down; a segment that collides with an existing leaf replaces it with
//! a fresh container. The final segment stores the value. Later entries win
//! over earlier ones at the same path.
//!
//! **5. List promotion.** After all entries are inserted, keyed containers
//! whose keys are exactly `"0", "1", ...` in order are converted to arrays,
//! bottom-up. Empty containers are never promoted; gapped or out-of-order
//! indices stay keyed:
//!
//! ```text
//! t[0]: "x", t[1]: "y"  ->  {"t": ["x", "y"]}
//! t[0]: "x", t[2]: "y"  ->  {"t": {"0": "x", "2": "y"}}
//! ```
//!
//! The additive form, [`unflatten_into`](crate::unflatten_into), skips this
//! step so that repeated calls keep merging into the same keyed tree;
//! promotion runs once at the end via
//! [`Value::promote_lists`](crate::Value::promote_lists).
//!
//! # Round Trips
//!
//! Flatten then expand reproduces the original tree, with two systematic
//! exceptions:
//!
//! - **Sequential keyed containers become arrays.** `{"0": "a", "1": "b"}`
//!   encodes in list style and decodes as `["a", "b"]`. The two spellings
//!   are equivalent under this scheme.
//! - **Delimiter characters inside data keys are lossy.** A key like
//!   `"a.b"` flattens into a path indistinguishable from nesting, so it
//!   decodes as nesting. Choose delimiters that cannot appear in your keys
//!   when exact round trips matter.
//!
//! Top-level leaves do not round trip at all: they flatten to an empty map,
//! and an empty map expands to an empty object.
//!
//! # Limitations
//!
//! - **Keys must be strings.** Numeric or structured keys have no path
//!   representation.
//! - **Degenerate configurations are rejected.** With every delimiter empty
//!   there is nothing to split on; expansion returns an error.
//! - **Paths carry no type information.** Dates, big integers, and special
//!   float values survive because leaf values transfer verbatim, not
//!   because paths encode them.

// This module contains only documentation; no implementation code
