use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Directory under the config home that holds the user file.
pub const APP_DIR_NAME: &str = "agent-indicator";

/// File name of the user config.
pub const USER_FILE_NAME: &str = "config.json";

/// File name of the defaults resource shipped next to the executable.
pub const DEFAULTS_FILE_NAME: &str = "defaults.json";

/// Environment variable that points at an alternative defaults resource.
pub const DEFAULTS_ENV_VAR: &str = "AGENT_INDICATOR_DEFAULTS";

/// Where the defaults and user trees are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocations {
	/// Defaults resource. `None` means no defaults at all.
	pub defaults: Option<PathBuf>,

	/// User config file. It may not exist yet.
	pub user: PathBuf,
}

impl ConfigLocations {
	pub fn new(defaults: Option<PathBuf>, user: PathBuf) -> Self {
		Self { defaults, user }
	}

	/// Resolve both locations from the process environment.
	pub fn from_env() -> Result<Self> {
		Ok(Self {
			defaults: default_defaults_path(),
			user: user_config_path()?,
		})
	}
}

/// Get the path to the user's config file.
///
/// `$XDG_CONFIG_HOME/agent-indicator/config.json` when `XDG_CONFIG_HOME` is
/// set and non-empty, otherwise `~/.config/agent-indicator/config.json`.
pub fn user_config_path() -> Result<PathBuf> {
	let xdg = std::env::var_os("XDG_CONFIG_HOME").filter(|value| !value.is_empty());
	let home = dirs::home_dir();
	resolve_user_config_path(xdg.map(PathBuf::from), home)
}

fn resolve_user_config_path(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
	let config_home = match xdg {
		Some(dir) => dir,
		None => home.ok_or(ConfigError::HomeDirectoryNotFound)?.join(".config"),
	};
	Ok(config_home.join(APP_DIR_NAME).join(USER_FILE_NAME))
}

/// Get the path to the defaults resource.
///
/// `$AGENT_INDICATOR_DEFAULTS` wins when non-empty. Otherwise the defaults
/// live next to the running executable.
pub fn default_defaults_path() -> Option<PathBuf> {
	if let Some(path) = std::env::var_os(DEFAULTS_ENV_VAR).filter(|value| !value.is_empty()) {
		return Some(PathBuf::from(path));
	}

	match std::env::current_exe() {
		Ok(exe) => defaults_beside(&exe),
		Err(e) => {
			tracing::debug!(error = %e, "cannot locate executable; running without defaults");
			None
		}
	}
}

fn defaults_beside(exe: &Path) -> Option<PathBuf> {
	exe.parent().map(|dir| dir.join(DEFAULTS_FILE_NAME))
}
