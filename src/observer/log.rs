use crate::config::{Config, Policy};
use crate::error::RuleMergeError;
use crate::observer::ParseObserver;
use crate::rules::{FileFormat, Rule};
use tracing::{debug, info, warn};

/// Observer that forwards every event to `tracing`.
///
/// Per-rule events go to `debug`, per-file progress and totals to `info`,
/// anything that drops input to `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
	fn config_loaded(&mut self, config: &Config) {
		info!(files = config.file_count(), "config loaded");
		debug!(?config, "config file content");
	}

	fn file_started(&mut self, name: &str, format: FileFormat) {
		info!(file = %name, %format, "parsing rule file");
	}

	fn unknown_rule_skipped(&mut self, name: &str, line: &str) {
		warn!(file = %name, rule = %line, "unknown rule type, skipping");
	}

	fn file_parsed(&mut self, name: &str, count: usize) {
		info!(file = %name, count, "parsed rule file");
	}

	fn file_failed(&mut self, name: &str, error: &RuleMergeError) {
		let chain = error_chain(error);
		warn!(file = %name, error = %chain, "failed to parse rule file, skipping");
	}

	fn duplicate_skipped(&mut self, rule: &Rule) {
		debug!(%rule, "rule exists, skip add");
	}

	fn merge_finished(&mut self, policy: Option<Policy>, input: usize, unique: usize) {
		match policy {
			Some(policy) => info!(%policy, previous = input, finally = unique, "merged rules"),
			None => info!(previous = input, finally = unique, "merged rules"),
		}
	}
}

/// Render an error with its `source()` chain on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
	let mut rendered = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		rendered.push_str(": ");
		rendered.push_str(&cause.to_string());
		source = cause.source();
	}
	rendered
}
