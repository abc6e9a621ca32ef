use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "AGENT_INDICATOR_LOG";

/// Install a stderr subscriber filtered by `AGENT_INDICATOR_LOG`.
///
/// Defaults to `warn`. Stdout carries `eval`-able output, so logs never go
/// there. Calling this twice is harmless.
pub fn init() {
	let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.compact(),
		)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_twice() {
		init();
		init();
		tracing::debug!("logging initialised");
	}
}
