//! Shell environment projection.
//!
//! This module handles:
//! - The frozen dotted-path to `AGENT_INDICATOR_*` variable table
//! - Rendering values into shell-safe single-quoted assignments
//! - Honoring variables already present in the environment

pub mod exports;
pub mod table;

pub use exports::{EnvSnapshot, render_exports, shell_exports, shell_value, single_quote};
pub use table::{ENV_EXPORTS, EnvExport};
