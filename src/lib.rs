//! agent-indicator-config - layered JSON configuration for agent-indicator.
//!
//! This library provides the core functionality, including:
//! - Deep merging of the built-in defaults with the user's config file
//! - Dotted-path lookup and assignment with best-effort type coercion
//! - Projection of settings into `AGENT_INDICATOR_*` shell exports
//! - Loading and persisting the user config
//!
//! # Example
//!
//! ```no_run
//! use agent_indicator_config::shell::{ENV_EXPORTS, EnvSnapshot, render_exports, shell_exports};
//! use agent_indicator_config::store::{ConfigLocations, ConfigStore};
//!
//! let store = ConfigStore::load(ConfigLocations::from_env().unwrap()).unwrap();
//! let lines = shell_exports(&store.merged(), &EnvSnapshot::from_process(), ENV_EXPORTS).unwrap();
//! println!("{}", render_exports(&lines));
//! ```

pub mod error;
pub mod logging;
pub mod shell;
pub mod store;
pub mod tree;

pub use error::{ConfigError, Result};
