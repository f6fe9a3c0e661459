//! Progress reporting for rule parsing and merging.
//!
//! Parsers and the merger never log directly. They report what happened to a
//! [`ParseObserver`], which keeps them pure and lets tests record events.
//!
//! This module handles:
//! - The observer trait and its no-op implementation
//! - A `tracing`-backed observer used by the CLI

pub mod log;

pub use log::LogObserver;

use crate::config::{Config, Policy};
use crate::error::RuleMergeError;
use crate::rules::{FileFormat, Rule};

/// Receives progress and diagnostic events.
///
/// Every method has an empty default so implementations only override the
/// events they care about.
pub trait ParseObserver {
	/// The config file was loaded.
	fn config_loaded(&mut self, _config: &Config) {}

	/// Parsing of a rule file is starting.
	fn file_started(&mut self, _name: &str, _format: FileFormat) {}

	/// A rule line with an unrecognized type token was skipped.
	fn unknown_rule_skipped(&mut self, _name: &str, _line: &str) {}

	/// A rule file parsed successfully.
	fn file_parsed(&mut self, _name: &str, _count: usize) {}

	/// A rule file was dropped because of an error.
	fn file_failed(&mut self, _name: &str, _error: &RuleMergeError) {}

	/// A rule was dropped because an equal rule was already merged.
	fn duplicate_skipped(&mut self, _rule: &Rule) {}

	/// Merging finished for one policy list.
	fn merge_finished(&mut self, _policy: Option<Policy>, _input: usize, _unique: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// A recorded observer event, flattened to strings for easy assertions.
	#[derive(Debug, Clone, PartialEq, Eq)]
	pub enum Event {
		ConfigLoaded(usize),
		FileStarted(String, FileFormat),
		UnknownSkipped(String, String),
		FileParsed(String, usize),
		FileFailed(String),
		Duplicate(Rule),
		MergeFinished(Option<Policy>, usize, usize),
	}

	/// Observer that records every event in order.
	#[derive(Debug, Default)]
	pub struct RecordingObserver {
		pub events: Vec<Event>,
	}

	impl RecordingObserver {
		pub fn failed_files(&self) -> Vec<&str> {
			self.events
				.iter()
				.filter_map(|e| match e {
					Event::FileFailed(name) => Some(name.as_str()),
					_ => None,
				})
				.collect()
		}

		pub fn duplicates(&self) -> usize {
			self.events
				.iter()
				.filter(|e| matches!(e, Event::Duplicate(_)))
				.count()
		}
	}

	impl ParseObserver for RecordingObserver {
		fn config_loaded(&mut self, config: &Config) {
			self.events.push(Event::ConfigLoaded(config.file_count()));
		}

		fn file_started(&mut self, name: &str, format: FileFormat) {
			self.events.push(Event::FileStarted(name.to_string(), format));
		}

		fn unknown_rule_skipped(&mut self, name: &str, line: &str) {
			self.events
				.push(Event::UnknownSkipped(name.to_string(), line.to_string()));
		}

		fn file_parsed(&mut self, name: &str, count: usize) {
			self.events.push(Event::FileParsed(name.to_string(), count));
		}

		fn file_failed(&mut self, name: &str, _error: &RuleMergeError) {
			self.events.push(Event::FileFailed(name.to_string()));
		}

		fn duplicate_skipped(&mut self, rule: &Rule) {
			self.events.push(Event::Duplicate(rule.clone()));
		}

		fn merge_finished(&mut self, policy: Option<Policy>, input: usize, unique: usize) {
			self.events.push(Event::MergeFinished(policy, input, unique));
		}
	}
}
