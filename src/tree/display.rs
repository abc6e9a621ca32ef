use crate::error::{ConfigError, Result};
use crate::tree::Value;

/// Render a value for human display.
///
/// Mappings are pretty-printed JSON, strings are printed bare and every
/// other value uses its JSON text (`true`, `0.5`, `[1,2]`).
pub fn display_value(value: &Value) -> Result<String> {
	match value {
		Value::Object(_) => serde_json::to_string_pretty(value).map_err(ConfigError::Serialize),
		Value::String(s) => Ok(s.clone()),
		other => Ok(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_scalars() {
		assert_eq!(display_value(&json!(true)).unwrap(), "true");
		assert_eq!(display_value(&json!(false)).unwrap(), "false");
		assert_eq!(display_value(&json!(0.5)).unwrap(), "0.5");
		assert_eq!(display_value(&json!(5)).unwrap(), "5");
		assert_eq!(display_value(&json!("a \"quoted\" str")).unwrap(), "a \"quoted\" str");
	}

	#[test]
	fn test_mapping_is_pretty_printed() {
		let value = json!({ "volume": 0.5, "states": { "done": true } });
		assert_eq!(
			display_value(&value).unwrap(),
			"{\n  \"volume\": 0.5,\n  \"states\": {\n    \"done\": true\n  }\n}"
		);
	}

	#[test]
	fn test_array_is_compact() {
		assert_eq!(display_value(&json!([1, "two"])).unwrap(), "[1,\"two\"]");
	}
}
