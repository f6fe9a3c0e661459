use serde::Deserialize;
use std::fmt;

/// Top-level configuration from a `config.json` file.
///
/// Each list names rule files relative to the data directory, in the order
/// they should be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
	/// Rule files for traffic that should bypass the proxy.
	#[serde(default)]
	pub direct: Vec<String>,

	/// Rule files for traffic routed through the proxy.
	#[serde(default)]
	pub proxy: Vec<String>,

	/// Rule files for traffic that should be blocked.
	#[serde(default)]
	pub reject: Vec<String>,
}

/// One of the three rule lists in a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
	Direct,
	Proxy,
	Reject,
}

impl Policy {
	/// All policies, in processing order.
	pub const ALL: [Policy; 3] = [Policy::Direct, Policy::Proxy, Policy::Reject];

	/// Get the config key for this policy.
	pub fn as_str(&self) -> &'static str {
		match self {
			Policy::Direct => "direct",
			Policy::Proxy => "proxy",
			Policy::Reject => "reject",
		}
	}
}

impl fmt::Display for Policy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Config {
	/// Get the rule files listed under a policy.
	pub fn files(&self, policy: Policy) -> &[String] {
		match policy {
			Policy::Direct => &self.direct,
			Policy::Proxy => &self.proxy,
			Policy::Reject => &self.reject,
		}
	}

	/// Total number of rule files across all policies.
	pub fn file_count(&self) -> usize {
		Policy::ALL.iter().map(|p| self.files(*p).len()).sum()
	}
}
