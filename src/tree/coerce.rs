use crate::tree::Value;
use serde_json::Number;

/// Convert raw text from a write request into a typed value.
///
/// Rules, in order:
/// 1. `true`/`false` in any letter case become booleans.
/// 2. Text containing a `.` becomes a float if it parses as a finite one.
/// 3. Otherwise text that parses as an integer becomes an integer.
/// 4. Anything else is kept verbatim as a string.
///
/// Coercion never fails: `"1.2.3"`, URLs and tokens all fall back to strings.
pub fn coerce(text: &str) -> Value {
	match text.to_lowercase().as_str() {
		"true" => return Value::Bool(true),
		"false" => return Value::Bool(false),
		_ => {}
	}

	let numeric = if text.contains('.') {
		parse_float(text)
	} else {
		parse_integer(text)
	};

	numeric
		.map(Value::Number)
		.unwrap_or_else(|| Value::String(text.to_string()))
}

fn parse_float(text: &str) -> Option<Number> {
	let parsed: f64 = text.trim().parse().ok()?;
	Number::from_f64(parsed)
}

fn parse_integer(text: &str) -> Option<Number> {
	let trimmed = text.trim();
	if let Ok(signed) = trimmed.parse::<i64>() {
		return Some(signed.into());
	}
	trimmed.parse::<u64>().ok().map(Number::from)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_booleans() {
		assert_eq!(coerce("true"), Value::Bool(true));
		assert_eq!(coerce("false"), Value::Bool(false));
		assert_eq!(coerce("TRUE"), Value::Bool(true));
		assert_eq!(coerce("False"), Value::Bool(false));
	}

	#[test]
	fn test_boolean_lookalikes_stay_strings() {
		assert_eq!(coerce("yes"), json!("yes"));
		assert_eq!(coerce("on"), json!("on"));
		assert_eq!(coerce(" true"), json!(" true"));
	}

	#[test]
	fn test_float() {
		let value = coerce("0.5");
		assert!(value.is_f64());
		assert_eq!(value.as_f64(), Some(0.5));

		assert_eq!(coerce("-2.25").as_f64(), Some(-2.25));
		assert_eq!(coerce(".5").as_f64(), Some(0.5));
	}

	#[test]
	fn test_integer() {
		let value = coerce("5");
		assert!(value.is_i64());
		assert_eq!(value, json!(5));

		assert_eq!(coerce("-12"), json!(-12));
		assert_eq!(coerce("+7"), json!(7));
		assert_eq!(coerce("18446744073709551615"), json!(u64::MAX));
	}

	#[test]
	fn test_whitespace_around_numbers_is_tolerated() {
		assert_eq!(coerce(" 5 "), json!(5));
		assert_eq!(coerce("0.25\n").as_f64(), Some(0.25));
	}

	#[test]
	fn test_malformed_dotted_number_falls_back_to_string() {
		assert_eq!(coerce("1.2.3"), json!("1.2.3"));
	}

	#[test]
	fn test_integer_without_dot_is_not_parsed_as_float() {
		assert_eq!(coerce("1e5"), json!("1e5"));
	}

	#[test]
	fn test_plain_strings() {
		assert_eq!(coerce("hello"), json!("hello"));
		assert_eq!(coerce(""), json!(""));
		assert_eq!(coerce("https://ntfy.sh"), json!("https://ntfy.sh"));
		assert_eq!(coerce("O'Brien"), json!("O'Brien"));
	}

	#[test]
	fn test_non_finite_float_falls_back_to_string() {
		let huge = format!("{}.0", "9".repeat(400));
		assert_eq!(coerce(&huge), Value::String(huge.clone()));
	}
}
