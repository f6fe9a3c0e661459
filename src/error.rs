use std::path::PathBuf;

/// Library-level structured errors for rule-merge.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RuleMergeError {
	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to read rule file: {path}")]
	RuleFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to decode rule file: {path}")]
	RuleFileFormat {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Malformed rule {line:?}: expected 2 fields, got {fields}")]
	MalformedRule { line: String, fields: usize },

	#[error("Unknown rule type {rule_type:?} in rule {line:?}")]
	UnknownRuleType { rule_type: String, line: String },
}

/// Result type alias using RuleMergeError.
pub type Result<T> = std::result::Result<T, RuleMergeError>;
