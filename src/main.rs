use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use std::process::ExitCode;

use agent_indicator_config::logging;
use agent_indicator_config::shell::{ENV_EXPORTS, EnvSnapshot, render_exports, shell_exports};
use agent_indicator_config::store::{ConfigLocations, ConfigStore, user_config_path};
use agent_indicator_config::tree::{DottedPath, display_value};

#[derive(Parser)]
#[command(name = "agent-indicator-config")]
#[command(
	author,
	version,
	about = "Read and write agent-indicator configuration and export it to the shell"
)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
struct Cli {
	/// Print the value at a dotted path, e.g. backends.sound.volume
	#[arg(long, value_name = "PATH", group = "mode")]
	get: Option<String>,

	/// Set the value at a dotted path in the user config
	#[arg(
		long,
		num_args = 2,
		value_names = ["PATH", "VALUE"],
		allow_hyphen_values = true,
		group = "mode"
	)]
	set: Option<Vec<String>>,

	/// Print `export` statements for the shell to eval
	#[arg(long, group = "mode")]
	shell_exports: bool,

	/// Print the merged configuration as JSON
	#[arg(long, group = "mode")]
	dump: bool,

	/// Print the path of the user config file
	#[arg(long, group = "mode")]
	config_path: bool,

	/// Create an empty user config file if none exists
	#[arg(long, group = "mode")]
	ensure: bool,
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			return match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
				_ => ExitCode::FAILURE,
			};
		}
	};

	logging::init();

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	// Handle --get
	if let Some(path) = cli.get {
		return handle_get(&path);
	}

	// Handle --set
	if let Some(pair) = cli.set {
		let [path, value] = <[String; 2]>::try_from(pair)
			.map_err(|_| anyhow::anyhow!("--set takes exactly a path and a value"))?;
		return handle_set(&path, &value);
	}

	// Handle --shell-exports
	if cli.shell_exports {
		return handle_shell_exports();
	}

	// Handle --dump
	if cli.dump {
		return handle_dump();
	}

	// Handle --config-path
	if cli.config_path {
		return handle_config_path();
	}

	// Handle --ensure
	if cli.ensure {
		return handle_ensure();
	}

	// Unreachable: the mode group is required
	Ok(ExitCode::FAILURE)
}

fn load_store() -> Result<ConfigStore> {
	let locations = ConfigLocations::from_env().context("Failed to resolve config locations")?;
	ConfigStore::load(locations).context("Failed to load configuration")
}

fn handle_get(raw_path: &str) -> Result<ExitCode> {
	let path = DottedPath::parse(raw_path)?;
	let store = load_store()?;

	// Missing keys and explicit nulls both exit non-zero with no output
	let Some(value) = store.get(&path) else {
		return Ok(ExitCode::FAILURE);
	};

	println!("{}", display_value(&value)?);
	Ok(ExitCode::SUCCESS)
}

fn handle_set(raw_path: &str, raw_value: &str) -> Result<ExitCode> {
	let path = DottedPath::parse(raw_path)?;
	let mut store = load_store()?;

	store.set(&path, raw_value);
	store
		.save()
		.with_context(|| format!("Failed to save {}", store.locations().user.display()))?;

	Ok(ExitCode::SUCCESS)
}

fn handle_shell_exports() -> Result<ExitCode> {
	let store = load_store()?;
	let lines = shell_exports(&store.merged(), &EnvSnapshot::from_process(), ENV_EXPORTS)?;

	println!("{}", render_exports(&lines));
	Ok(ExitCode::SUCCESS)
}

fn handle_dump() -> Result<ExitCode> {
	let store = load_store()?;
	let merged = serde_json::to_string_pretty(&store.merged())
		.context("Failed to serialize merged configuration")?;

	println!("{}", merged);
	Ok(ExitCode::SUCCESS)
}

fn handle_config_path() -> Result<ExitCode> {
	let path = user_config_path().context("Failed to resolve config path")?;
	println!("{}", path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_ensure() -> Result<ExitCode> {
	let locations = ConfigLocations::from_env().context("Failed to resolve config locations")?;

	if ConfigStore::ensure(&locations)? {
		println!("Created {}", locations.user.display());
	} else {
		println!("Already exists: {}", locations.user.display());
	}

	Ok(ExitCode::SUCCESS)
}
