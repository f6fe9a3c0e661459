use crate::error::{Result, RuleMergeError};
use crate::observer::ParseObserver;
use crate::rules::parser::{UnknownTypePolicy, parse_rule_line};
use crate::rules::rule::Rule;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Contents of a rule file. Only `payload` is recognized.
#[derive(Debug, Default, Deserialize)]
struct RuleFile {
	#[serde(default)]
	payload: Vec<String>,
}

/// How the payload entries of a rule file are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
	/// Each entry is a `TYPE,VALUE` rule line.
	Classical,
	/// Each entry is a bare CIDR.
	IpCidr,
}

impl FileFormat {
	/// Pick the format for a rule file from its name.
	pub fn detect(name: &str) -> Self {
		if is_ip_file_name(name) {
			FileFormat::IpCidr
		} else {
			FileFormat::Classical
		}
	}
}

impl fmt::Display for FileFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FileFormat::Classical => f.write_str("classical"),
			FileFormat::IpCidr => f.write_str("ipcidr"),
		}
	}
}

/// Whether a rule file holds bare CIDRs, judged by its name alone.
///
/// Any name containing "ip" in any case qualifies, so `tripadvisor.yaml`
/// is treated as a CIDR list too.
pub fn is_ip_file_name(name: &str) -> bool {
	name.to_lowercase().contains("ip")
}

/// Read and parse the rule file `name` from `data_dir`.
pub fn parse_rule_file(
	data_dir: &Path,
	name: &str,
	unknown: UnknownTypePolicy,
	observer: &mut dyn ParseObserver,
) -> Result<Vec<Rule>> {
	let path = data_dir.join(name);
	let content = std::fs::read_to_string(&path)
		.map_err(|source| RuleMergeError::RuleFileRead { path: path.clone(), source })?;

	parse_rule_file_str(name, &content, &path, unknown, observer)
}

/// Parse rule file content (useful for testing).
///
/// `name` selects the format; `path` is only used in error messages. In the
/// classical format the first bad line fails the whole file.
pub fn parse_rule_file_str(
	name: &str,
	content: &str,
	path: &Path,
	unknown: UnknownTypePolicy,
	observer: &mut dyn ParseObserver,
) -> Result<Vec<Rule>> {
	let format = FileFormat::detect(name);
	observer.file_started(name, format);

	let file = decode_rule_file(content, path)?;

	let rules = match format {
		FileFormat::IpCidr => file.payload.into_iter().map(Rule::cidr).collect(),
		FileFormat::Classical => {
			let mut rules = Vec::with_capacity(file.payload.len());
			for line in &file.payload {
				match parse_rule_line(line, unknown)? {
					Some(rule) => rules.push(rule),
					None => observer.unknown_rule_skipped(name, line),
				}
			}
			rules
		}
	};

	observer.file_parsed(name, rules.len());
	Ok(rules)
}

fn decode_rule_file(content: &str, path: &Path) -> Result<RuleFile> {
	// An empty YAML document has no payload rather than being an error
	if content.trim().is_empty() {
		return Ok(RuleFile::default());
	}

	serde_yaml::from_str(content).map_err(|source| RuleMergeError::RuleFileFormat {
		path: path.to_path_buf(),
		source,
	})
}
