/// One exported setting: where it lives in the tree and the variable it
/// becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvExport {
	pub path: &'static str,
	pub var: &'static str,
}

const fn export(path: &'static str, var: &'static str) -> EnvExport {
	EnvExport { path, var }
}

/// Every exported setting, in output order.
///
/// Scripts outside this tool read these exact variable names. Do not rename
/// or reorder entries.
pub const ENV_EXPORTS: &[EnvExport] = &[
	export("backends.terminal.enabled", "AGENT_INDICATOR_TERMINAL"),
	export(
		"backends.terminal.bg_restore_timeout",
		"AGENT_INDICATOR_TERMINAL_BG_RESTORE_TIMEOUT",
	),
	export(
		"backends.terminal.bg_needs_input",
		"AGENT_INDICATOR_TERMINAL_BG_NEEDS_INPUT",
	),
	export("backends.terminal.bg_done", "AGENT_INDICATOR_TERMINAL_BG_DONE"),
	export("backends.sound.enabled", "AGENT_INDICATOR_SOUND"),
	export("backends.sound.pack", "AGENT_INDICATOR_SOUND_PACK"),
	export("backends.sound.volume", "AGENT_INDICATOR_SOUND_VOLUME"),
	export(
		"backends.sound.states.needs-input",
		"AGENT_INDICATOR_SOUND_STATE_NEEDS_INPUT",
	),
	export("backends.sound.states.done", "AGENT_INDICATOR_SOUND_STATE_DONE"),
	export("backends.desktop.enabled", "AGENT_INDICATOR_DESKTOP"),
	export(
		"backends.desktop.states.needs-input",
		"AGENT_INDICATOR_DESKTOP_STATE_NEEDS_INPUT",
	),
	export(
		"backends.desktop.states.done",
		"AGENT_INDICATOR_DESKTOP_STATE_DONE",
	),
	export(
		"backends.desktop.title_format",
		"AGENT_INDICATOR_DESKTOP_TITLE_FORMAT",
	),
	export(
		"backends.desktop.body_format",
		"AGENT_INDICATOR_DESKTOP_BODY_FORMAT",
	),
	export("backends.push.enabled", "AGENT_INDICATOR_PUSH"),
	export("backends.push.service", "AGENT_INDICATOR_PUSH_SERVICE"),
	export("backends.push.topic", "AGENT_INDICATOR_PUSH_TOPIC"),
	export("backends.push.server", "AGENT_INDICATOR_PUSH_SERVER"),
	export("backends.push.token", "AGENT_INDICATOR_PUSH_TOKEN"),
	export(
		"backends.push.states.needs-input",
		"AGENT_INDICATOR_PUSH_STATE_NEEDS_INPUT",
	),
	export("backends.push.states.done", "AGENT_INDICATOR_PUSH_STATE_DONE"),
];
