//! Batch driver for rule-merge.
//!
//! This module handles:
//! - Loading the config from an explicit path
//! - Parsing every listed rule file, skipping the ones that fail
//! - Merging each policy list into its own rule set

use crate::config::{Policy, parse_config_file};
use crate::error::Result;
use crate::observer::ParseObserver;
use crate::rules::{RuleSet, UnknownTypePolicy, merge_rules, parse_rule_file};
use std::path::{Path, PathBuf};

/// Where to find the config and rule files, and how strict to be.
#[derive(Debug, Clone)]
pub struct BatchOptions {
	/// Path to the JSON config file.
	pub config_path: PathBuf,

	/// Directory that rule file names are resolved against.
	pub data_dir: PathBuf,

	/// Treatment of rule lines with an unrecognized type token.
	pub unknown_types: UnknownTypePolicy,
}

impl BatchOptions {
	pub fn new(config_path: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
		BatchOptions {
			config_path: config_path.into(),
			data_dir: data_dir.into(),
			unknown_types: UnknownTypePolicy::default(),
		}
	}
}

impl Default for BatchOptions {
	fn default() -> Self {
		BatchOptions::new("conf/config.json", "data")
	}
}

/// Outcome of one policy list.
#[derive(Debug, Clone)]
pub struct PolicyReport {
	pub policy: Policy,

	/// Files that parsed, with their rule counts, in config order.
	pub parsed_files: Vec<(String, usize)>,

	/// Files that were skipped, with the rendered error.
	pub failed_files: Vec<(String, String)>,

	/// Rules parsed across all files, before deduplication.
	pub parsed_rules: usize,

	/// Deduplicated rules.
	pub rules: RuleSet,
}

impl PolicyReport {
	/// Number of files listed under this policy.
	pub fn file_count(&self) -> usize {
		self.parsed_files.len() + self.failed_files.len()
	}
}

/// Outcome of a whole run, one report per policy in [`Policy::ALL`] order.
#[derive(Debug, Clone)]
pub struct BatchReport {
	pub policies: Vec<PolicyReport>,
}

impl BatchReport {
	pub fn policy(&self, policy: Policy) -> Option<&PolicyReport> {
		self.policies.iter().find(|r| r.policy == policy)
	}
}

/// Run the whole batch: load config, parse every rule file, merge per policy.
///
/// Only a config failure is returned as an error. Rule file failures are
/// reported to the observer and recorded in the report.
pub fn run_batch(options: &BatchOptions, observer: &mut dyn ParseObserver) -> Result<BatchReport> {
	let config = parse_config_file(&options.config_path)?;
	observer.config_loaded(&config);

	let policies = Policy::ALL
		.iter()
		.map(|&policy| {
			process_policy(
				policy,
				config.files(policy),
				&options.data_dir,
				options.unknown_types,
				observer,
			)
		})
		.collect();

	Ok(BatchReport { policies })
}

/// Parse and merge the rule files of one policy list.
pub fn process_policy(
	policy: Policy,
	files: &[String],
	data_dir: &Path,
	unknown: UnknownTypePolicy,
	observer: &mut dyn ParseObserver,
) -> PolicyReport {
	let mut parsed_files = Vec::new();
	let mut failed_files = Vec::new();
	let mut rules = Vec::new();

	for name in files {
		match parse_rule_file(data_dir, name, unknown, observer) {
			Ok(file_rules) => {
				parsed_files.push((name.clone(), file_rules.len()));
				rules.extend(file_rules);
			}
			Err(e) => {
				observer.file_failed(name, &e);
				failed_files.push((name.clone(), e.to_string()));
			}
		}
	}

	let parsed_rules = rules.len();
	let rules = merge_rules(rules, Some(policy), observer);

	PolicyReport {
		policy,
		parsed_files,
		failed_files,
		parsed_rules,
		rules,
	}
}
