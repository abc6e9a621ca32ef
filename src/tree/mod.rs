//! Configuration tree primitives.
//!
//! This module handles:
//! - Deep merging of nested mappings
//! - Dotted-path lookup and assignment
//! - Best-effort coercion of raw text into typed values
//! - Rendering values for display

pub mod coerce;
pub mod display;
pub mod merge;
pub mod path;

pub use coerce::coerce;
pub use display::display_value;
pub use merge::deep_merge;
pub use path::{DottedPath, Lookup, assign, assign_value, lookup};

/// A single configuration value. Arrays are opaque leaves.
pub type Value = serde_json::Value;

/// A nested mapping from string keys to values, in insertion order.
pub type Tree = serde_json::Map<String, Value>;
