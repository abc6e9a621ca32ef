use crate::error::{ConfigError, Result};
use crate::store::locations::ConfigLocations;
use crate::tree::{DottedPath, Tree, Value, assign, deep_merge, lookup};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Defaults and user trees loaded from disk.
///
/// The user tree only ever holds values that were explicitly set, so later
/// changes to the defaults still reach keys the user never touched.
#[derive(Debug, Clone)]
pub struct ConfigStore {
	locations: ConfigLocations,
	defaults: Tree,
	user: Tree,
}

impl ConfigStore {
	/// Load the defaults and user trees.
	///
	/// A missing or corrupt defaults resource yields an empty defaults tree.
	/// A missing user file yields an empty user tree, but a user file that
	/// cannot be read or parsed is an error.
	pub fn load(locations: ConfigLocations) -> Result<Self> {
		let defaults = load_defaults(locations.defaults.as_deref());
		let user = load_user(&locations.user)?;

		Ok(Self {
			locations,
			defaults,
			user,
		})
	}

	/// Build a store from in-memory trees.
	pub fn from_trees(locations: ConfigLocations, defaults: Tree, user: Tree) -> Self {
		Self {
			locations,
			defaults,
			user,
		}
	}

	pub fn locations(&self) -> &ConfigLocations {
		&self.locations
	}

	pub fn defaults(&self) -> &Tree {
		&self.defaults
	}

	pub fn user(&self) -> &Tree {
		&self.user
	}

	/// The user tree overlaid on the defaults.
	pub fn merged(&self) -> Tree {
		deep_merge(&self.defaults, &self.user)
	}

	/// Look up `path` in the merged tree. Explicit nulls read as `None`.
	pub fn get(&self, path: &DottedPath) -> Option<Value> {
		lookup(&self.merged(), path).value().cloned()
	}

	/// Coerce `raw` and write it into the user tree. Call [`save`](Self::save)
	/// to persist.
	pub fn set(&mut self, path: &DottedPath, raw: &str) {
		assign(&mut self.user, path, raw);
	}

	/// Write the user tree back to its file.
	pub fn save(&self) -> Result<()> {
		let contents = to_pretty_json(&self.user)?;
		write_atomic(&self.locations.user, &contents)?;
		tracing::debug!(path = %self.locations.user.display(), "saved user config");
		Ok(())
	}

	/// Create an empty user file if none exists.
	///
	/// Returns `true` when the file was created.
	pub fn ensure(locations: &ConfigLocations) -> Result<bool> {
		if locations.user.exists() {
			return Ok(false);
		}

		write_atomic(&locations.user, &to_pretty_json(&Tree::new())?)?;
		tracing::debug!(path = %locations.user.display(), "created user config");
		Ok(true)
	}
}

/// Parse JSON text into a tree, requiring an object at the top level.
pub fn parse_tree(content: &str, path: &Path) -> Result<Tree> {
	let value: Value =
		serde_json::from_str(content).map_err(|source| ConfigError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;

	match value {
		Value::Object(tree) => Ok(tree),
		_ => Err(ConfigError::NotAnObject {
			path: path.to_path_buf(),
		}),
	}
}

/// Serialize a tree with two-space indentation and a trailing newline.
pub fn to_pretty_json(tree: &Tree) -> Result<String> {
	let mut out = serde_json::to_string_pretty(tree).map_err(ConfigError::Serialize)?;
	out.push('\n');
	Ok(out)
}

fn load_defaults(path: Option<&Path>) -> Tree {
	let Some(path) = path else {
		tracing::debug!("no defaults resource configured");
		return Tree::new();
	};

	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) => {
			tracing::debug!(path = %path.display(), error = %e, "defaults unavailable; using empty tree");
			return Tree::new();
		}
	};

	match parse_tree(&content, path) {
		Ok(tree) => {
			tracing::debug!(path = %path.display(), "loaded defaults");
			tree
		}
		Err(e) => {
			tracing::debug!(error = %e, "defaults unusable; using empty tree");
			Tree::new()
		}
	}
}

fn load_user(path: &Path) -> Result<Tree> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "no user config");
			return Ok(Tree::new());
		}
		Err(source) => {
			return Err(ConfigError::ConfigRead {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	let tree = parse_tree(&content, path)?;
	tracing::debug!(path = %path.display(), "loaded user config");
	Ok(tree)
}

/// Write `contents` to a temp file beside the real target, then rename it
/// over the target.
///
/// A symlinked config is written through to the file it points at. The
/// existing file's permissions carry over to the replacement.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let target = resolve_write_target(path)?;
	let write_err = |path: &Path| {
		let path = path.to_path_buf();
		move |source| ConfigError::ConfigWrite { path, source }
	};

	let dir = match target.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};
	fs::create_dir_all(&dir).map_err(write_err(&dir))?;

	let mut temp = NamedTempFile::new_in(&dir).map_err(write_err(&dir))?;
	temp.write_all(contents.as_bytes())
		.map_err(write_err(temp.path()))?;

	match fs::metadata(&target) {
		Ok(existing) => temp
			.as_file()
			.set_permissions(existing.permissions())
			.map_err(write_err(temp.path()))?,
		Err(e) if e.kind() == ErrorKind::NotFound => {}
		Err(source) => {
			return Err(ConfigError::ConfigWrite {
				path: target,
				source,
			});
		}
	}

	temp.as_file().sync_all().map_err(write_err(temp.path()))?;
	temp.persist(&target)
		.map_err(|e| ConfigError::ConfigWrite {
			path: target.clone(),
			source: e.error,
		})?;

	Ok(())
}

/// Follow symlinks at `path` so the write lands on the real file.
///
/// A dangling symlink resolves to the file it names, which is then created.
fn resolve_write_target(path: &Path) -> Result<PathBuf> {
	let is_symlink = fs::symlink_metadata(path)
		.map(|meta| meta.file_type().is_symlink())
		.unwrap_or(false);
	if !is_symlink {
		return Ok(path.to_path_buf());
	}

	match fs::canonicalize(path) {
		Ok(real) => Ok(real),
		Err(e) if e.kind() == ErrorKind::NotFound => {
			let link = fs::read_link(path).map_err(|source| ConfigError::ConfigWrite {
				path: path.to_path_buf(),
				source,
			})?;
			Ok(match path.parent() {
				Some(parent) if link.is_relative() => parent.join(link),
				_ => link,
			})
		}
		Err(source) => Err(ConfigError::ConfigWrite {
			path: path.to_path_buf(),
			source,
		}),
	}
}
