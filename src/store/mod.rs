//! Configuration storage for agent-indicator.
//!
//! This module handles:
//! - Resolving the defaults and user config locations
//! - Loading both files and merging them
//! - Persisting the user tree

pub mod config_store;
pub mod locations;

pub use config_store::{ConfigStore, parse_tree, to_pretty_json};
pub use locations::{
	APP_DIR_NAME, ConfigLocations, DEFAULTS_ENV_VAR, DEFAULTS_FILE_NAME, USER_FILE_NAME,
	default_defaults_path, user_config_path,
};
