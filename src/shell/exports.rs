use crate::error::Result;
use crate::shell::table::EnvExport;
use crate::tree::{DottedPath, Tree, Value, lookup};
use std::collections::HashSet;

/// Names of the variables already set in an environment.
///
/// Presence is all that matters: a variable set to the empty string still
/// blocks its export.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
	names: HashSet<String>,
}

impl EnvSnapshot {
	/// Capture the current process environment.
	pub fn from_process() -> Self {
		std::env::vars_os()
			.map(|(name, _)| name.to_string_lossy().into_owned())
			.collect()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}
}

impl<S: Into<String>> FromIterator<S> for EnvSnapshot {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			names: iter.into_iter().map(Into::into).collect(),
		}
	}
}

/// Render a value as the text a shell variable should hold.
///
/// Booleans become `on`/`off`, null becomes the empty string, strings are
/// used verbatim and everything else uses its JSON text.
pub fn shell_value(value: &Value) -> String {
	match value {
		Value::Bool(true) => "on".to_string(),
		Value::Bool(false) => "off".to_string(),
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Wrap `text` in single quotes, escaping embedded single quotes as `'\''`.
pub fn single_quote(text: &str) -> String {
	format!("'{}'", text.replace('\'', r"'\''"))
}

/// Build `export NAME='value'` lines for every table entry that is not
/// already set in `env` and has a non-null value in `tree`.
///
/// Lines follow table order.
pub fn shell_exports(tree: &Tree, env: &EnvSnapshot, table: &[EnvExport]) -> Result<Vec<String>> {
	let mut lines = Vec::new();

	for entry in table {
		if env.contains(entry.var) {
			tracing::debug!(var = entry.var, "already set in environment, skipping");
			continue;
		}

		let path = DottedPath::parse(entry.path)?;
		let Some(value) = lookup(tree, &path).value() else {
			continue;
		};

		lines.push(format!(
			"export {}={}",
			entry.var,
			single_quote(&shell_value(value))
		));
	}

	Ok(lines)
}

/// Join export lines for `eval`.
pub fn render_exports(lines: &[String]) -> String {
	lines.join("\n")
}
