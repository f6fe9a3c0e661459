use std::fmt;

/// What a rule's content matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleType {
	/// A domain name (`DOMAIN` and `DOMAIN-SUFFIX` rules).
	Domain,
	/// An IP network in CIDR notation.
	Cidr,
	/// A substring of a domain name.
	Keyword,
}

impl RuleType {
	/// Map a rule type token to a rule type.
	///
	/// Tokens are case-sensitive; `domain` is not a recognized token.
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"DOMAIN-SUFFIX" | "DOMAIN" => Some(RuleType::Domain),
			"DOMAIN-KEYWORD" => Some(RuleType::Keyword),
			"IP-CIDR" => Some(RuleType::Cidr),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			RuleType::Domain => "domain",
			RuleType::Cidr => "cidr",
			RuleType::Keyword => "keyword",
		}
	}
}

impl fmt::Display for RuleType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single routing rule.
///
/// The content is kept exactly as written in the rule file; no domain or
/// CIDR validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
	rule_type: RuleType,
	content: String,
}

/// Identity of a rule for deduplication.
pub type RuleKey<'a> = (RuleType, &'a str);

impl Rule {
	pub fn new(rule_type: RuleType, content: impl Into<String>) -> Self {
		Rule {
			rule_type,
			content: content.into(),
		}
	}

	pub fn domain(content: impl Into<String>) -> Self {
		Rule::new(RuleType::Domain, content)
	}

	pub fn cidr(content: impl Into<String>) -> Self {
		Rule::new(RuleType::Cidr, content)
	}

	pub fn keyword(content: impl Into<String>) -> Self {
		Rule::new(RuleType::Keyword, content)
	}

	pub fn rule_type(&self) -> RuleType {
		self.rule_type
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	/// The merge key: two rules are duplicates when their keys are equal.
	pub fn key(&self) -> RuleKey<'_> {
		(self.rule_type, &self.content)
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.rule_type, self.content)
	}
}
