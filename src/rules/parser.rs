use crate::error::{Result, RuleMergeError};
use crate::rules::rule::{Rule, RuleType};

/// What to do with a rule line whose type token is not recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownTypePolicy {
	/// Drop the line and keep parsing the file.
	#[default]
	Skip,
	/// Fail the line with [`RuleMergeError::UnknownRuleType`].
	Reject,
}

/// Parse a single `TYPE,VALUE` rule line.
///
/// The line must split into exactly two comma-separated fields. The value is
/// taken verbatim. Returns `Ok(None)` for an unknown type token under
/// [`UnknownTypePolicy::Skip`].
pub fn parse_rule_line(line: &str, unknown: UnknownTypePolicy) -> Result<Option<Rule>> {
	let fields: Vec<&str> = line.split(',').collect();
	let [token, value] = fields[..] else {
		return Err(RuleMergeError::MalformedRule {
			line: line.to_string(),
			fields: fields.len(),
		});
	};

	match (RuleType::from_token(token), unknown) {
		(Some(rule_type), _) => Ok(Some(Rule::new(rule_type, value))),
		(None, UnknownTypePolicy::Skip) => Ok(None),
		(None, UnknownTypePolicy::Reject) => Err(RuleMergeError::UnknownRuleType {
			rule_type: token.to_string(),
			line: line.to_string(),
		}),
	}
}
