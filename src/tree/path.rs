use crate::error::{ConfigError, Result};
use crate::tree::{Tree, Value, coerce};
use std::fmt;
use std::str::FromStr;

/// A validated dot-separated key path such as `backends.sound.volume`.
///
/// Empty paths and empty segments (`a..b`, `.a`, `a.`) are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
	parents: Vec<String>,
	key: String,
}

impl DottedPath {
	/// Parse and validate a dotted path.
	pub fn parse(path: &str) -> Result<Self> {
		if path.is_empty() {
			return Err(ConfigError::InvalidPath {
				path: path.to_string(),
				reason: "path is empty",
			});
		}

		let mut parents: Vec<String> = path.split('.').map(str::to_string).collect();
		if parents.iter().any(String::is_empty) {
			return Err(ConfigError::InvalidPath {
				path: path.to_string(),
				reason: "path contains an empty segment",
			});
		}
		let key = parents.pop().unwrap_or_default();

		Ok(Self { parents, key })
	}

	/// All segments, outermost first.
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.parents
			.iter()
			.map(String::as_str)
			.chain(std::iter::once(self.key.as_str()))
	}
}

impl FromStr for DottedPath {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for DottedPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for parent in &self.parents {
			write!(f, "{parent}.")?;
		}
		f.write_str(&self.key)
	}
}

/// Outcome of a path lookup.
///
/// `Present(Value::Null)` is distinct from `Missing`: the key exists but
/// holds an explicit null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
	Missing,
	Present(&'a Value),
}

impl<'a> Lookup<'a> {
	pub fn is_present(&self) -> bool {
		matches!(self, Lookup::Present(_))
	}

	/// The value, treating an explicit null the same as a missing key.
	pub fn value(self) -> Option<&'a Value> {
		match self {
			Lookup::Present(Value::Null) | Lookup::Missing => None,
			Lookup::Present(value) => Some(value),
		}
	}
}

/// Walk `tree` along `path`.
///
/// Returns `Missing` as soon as a segment is absent or the current node is
/// not a mapping.
pub fn lookup<'a>(tree: &'a Tree, path: &DottedPath) -> Lookup<'a> {
	let mut current = tree;

	for segment in &path.parents {
		match current.get(segment) {
			Some(Value::Object(child)) => current = child,
			_ => return Lookup::Missing,
		}
	}

	match current.get(&path.key) {
		Some(value) => Lookup::Present(value),
		None => Lookup::Missing,
	}
}

/// Coerce `raw` and store it at `path`, creating intermediate mappings.
pub fn assign(tree: &mut Tree, path: &DottedPath, raw: &str) {
	assign_value(tree, path, coerce(raw));
}

/// Store `value` at `path` as-is.
///
/// Missing intermediates are created as empty mappings. An intermediate that
/// holds a non-mapping value is replaced by an empty mapping before
/// descending. The final key is overwritten unconditionally.
pub fn assign_value(tree: &mut Tree, path: &DottedPath, value: Value) {
	assign_in(tree, &path.parents, &path.key, value);
}

fn assign_in(tree: &mut Tree, parents: &[String], key: &str, value: Value) {
	let Some((segment, rest)) = parents.split_first() else {
		tree.insert(key.to_string(), value);
		return;
	};

	let slot = tree
		.entry(segment.clone())
		.or_insert_with(|| Value::Object(Tree::new()));
	match slot {
		Value::Object(child) => assign_in(child, rest, key, value),
		other => {
			let mut child = Tree::new();
			assign_in(&mut child, rest, key, value);
			*other = Value::Object(child);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn tree(value: Value) -> Tree {
		match value {
			Value::Object(map) => map,
			other => panic!("expected object, got {other}"),
		}
	}

	fn path(s: &str) -> DottedPath {
		DottedPath::parse(s).unwrap()
	}

	#[test]
	fn test_parse_valid_paths() {
		assert_eq!(path("a").segments().collect::<Vec<_>>(), ["a"]);
		assert_eq!(
			path("backends.sound.states.needs-input")
				.segments()
				.collect::<Vec<_>>(),
			["backends", "sound", "states", "needs-input"]
		);
		assert_eq!(path("a.b.c").to_string(), "a.b.c");
	}

	#[test]
	fn test_parse_rejects_empty_segments() {
		for bad in ["", ".", "a..b", ".a", "a."] {
			match DottedPath::parse(bad) {
				Err(ConfigError::InvalidPath { path, .. }) => assert_eq!(path, bad),
				other => panic!("expected InvalidPath for {bad:?}, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_from_str() {
		let parsed: DottedPath = "x.y".parse().unwrap();
		assert_eq!(parsed, path("x.y"));
		assert!("x..y".parse::<DottedPath>().is_err());
	}

	#[test]
	fn test_lookup_nested_value() {
		let t = tree(json!({ "backends": { "sound": { "volume": 0.7 } } }));

		assert_eq!(
			lookup(&t, &path("backends.sound.volume")),
			Lookup::Present(&json!(0.7))
		);
		assert_eq!(
			lookup(&t, &path("backends.sound")),
			Lookup::Present(&json!({ "volume": 0.7 }))
		);
	}

	#[test]
	fn test_lookup_missing_key() {
		let t = tree(json!({ "a": { "b": 1 } }));

		assert_eq!(lookup(&t, &path("a.c")), Lookup::Missing);
		assert_eq!(lookup(&t, &path("z")), Lookup::Missing);
		assert_eq!(lookup(&t, &path("a.b.c")), Lookup::Missing);
	}

	#[test]
	fn test_lookup_distinguishes_null_from_missing() {
		let t = tree(json!({ "a": null }));

		let found = lookup(&t, &path("a"));
		assert!(found.is_present());
		assert_eq!(found.value(), None);

		let missing = lookup(&t, &path("b"));
		assert!(!missing.is_present());
		assert_eq!(missing.value(), None);
	}

	#[test]
	fn test_lookup_falsy_values_are_present() {
		let t = tree(json!({ "off": false, "zero": 0, "empty": "" }));

		assert_eq!(lookup(&t, &path("off")).value(), Some(&json!(false)));
		assert_eq!(lookup(&t, &path("zero")).value(), Some(&json!(0)));
		assert_eq!(lookup(&t, &path("empty")).value(), Some(&json!("")));
	}

	#[test]
	fn test_assign_creates_intermediates() {
		let mut t = Tree::new();
		assign(&mut t, &path("backends.sound.volume"), "0.5");

		assert_eq!(
			Value::Object(t),
			json!({ "backends": { "sound": { "volume": 0.5 } } })
		);
	}

	#[test]
	fn test_assign_keeps_siblings() {
		let mut t = tree(json!({ "a": { "b": 1, "c": 2 } }));
		assign(&mut t, &path("a.b"), "hello");

		assert_eq!(Value::Object(t), json!({ "a": { "b": "hello", "c": 2 } }));
	}

	#[test]
	fn test_assign_replaces_scalar_intermediate() {
		let mut t = tree(json!({ "a": "scalar" }));
		assign(&mut t, &path("a.b"), "true");

		assert_eq!(Value::Object(t), json!({ "a": { "b": true } }));
	}

	#[test]
	fn test_assign_replaces_nested_scalar_intermediates() {
		let mut t = tree(json!({ "first": 0, "a": { "b": [1, 2] }, "last": 0 }));
		assign(&mut t, &path("a.b.c.d"), "x");

		assert_eq!(
			Value::Object(t.clone()),
			json!({ "first": 0, "a": { "b": { "c": { "d": "x" } } }, "last": 0 })
		);
		let keys: Vec<_> = t.keys().cloned().collect();
		assert_eq!(keys, ["first", "a", "last"]);
	}

	#[test]
	fn test_assign_overwrites_mapping_leaf() {
		let mut t = tree(json!({ "a": { "b": { "deep": 1 } } }));
		assign(&mut t, &path("a.b"), "7");

		assert_eq!(Value::Object(t), json!({ "a": { "b": 7 } }));
	}

	#[test]
	fn test_assign_then_lookup_round_trip() {
		let cases = ["true", "false", "0.5", "5", "hello", "1.2.3", "O'Brien"];
		for raw in cases {
			let mut t = tree(json!({ "x": { "y": 1 } }));
			let p = path("x.y.z");
			assign(&mut t, &p, raw);
			assert_eq!(lookup(&t, &p), Lookup::Present(&coerce(raw)), "raw={raw}");
		}
	}

	#[test]
	fn test_assign_value_stores_uncoerced() {
		let mut t = Tree::new();
		assign_value(&mut t, &path("a"), json!("true"));

		assert_eq!(t["a"], json!("true"));
	}
}
