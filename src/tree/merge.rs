use crate::tree::{Tree, Value};

/// Merge `overlay` onto `base`, returning a new tree.
///
/// Keys present in both trees are merged recursively when both values are
/// mappings. In every other case the overlay value replaces the base value
/// wholesale, including a mapping replaced by a scalar and vice versa.
pub fn deep_merge(base: &Tree, overlay: &Tree) -> Tree {
	let mut merged = base.clone();

	for (key, value) in overlay {
		let replacement = match (merged.get(key), value) {
			(Some(Value::Object(existing)), Value::Object(incoming)) => {
				Value::Object(deep_merge(existing, incoming))
			}
			_ => value.clone(),
		};
		merged.insert(key.clone(), replacement);
	}

	merged
}
