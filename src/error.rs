use std::path::PathBuf;

/// Library-level structured errors for agent-indicator-config.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid JSON in {path}: {source}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Config file must contain a JSON object: {path}")]
	NotAnObject { path: PathBuf },

	#[error("Failed to write config file: {path}")]
	ConfigWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to serialize configuration")]
	Serialize(#[source] serde_json::Error),

	#[error("Invalid dotted path {path:?}: {reason}")]
	InvalidPath { path: String, reason: &'static str },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
