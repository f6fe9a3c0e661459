use crate::config::Policy;
use crate::observer::ParseObserver;
use crate::rules::rule::{Rule, RuleType};
use std::collections::HashSet;

/// Deduplicated rules in first-seen order.
///
/// `Rule` equality is equality of its merge key, so the set is keyed on the
/// rules themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
	rules: Vec<Rule>,
	seen: HashSet<Rule>,
}

impl RuleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a rule unless an equal one is already present.
	///
	/// Returns `false` for a duplicate; the earlier rule is kept.
	pub fn insert(&mut self, rule: Rule) -> bool {
		if self.contains(&rule) {
			return false;
		}
		self.seen.insert(rule.clone());
		self.rules.push(rule);
		true
	}

	pub fn contains(&self, rule: &Rule) -> bool {
		self.seen.contains(rule)
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
		self.rules.iter()
	}

	/// Number of rules of one type.
	pub fn count_of(&self, rule_type: RuleType) -> usize {
		self.rules
			.iter()
			.filter(|r| r.rule_type() == rule_type)
			.count()
	}

	pub fn into_vec(self) -> Vec<Rule> {
		self.rules
	}
}

impl<'a> IntoIterator for &'a RuleSet {
	type Item = &'a Rule;
	type IntoIter = std::slice::Iter<'a, Rule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.iter()
	}
}

/// Merge rules into a deduplicated set keyed by type and content.
///
/// The first occurrence of a key wins; each later duplicate is reported to the
/// observer and dropped.
pub fn merge_rules(
	rules: impl IntoIterator<Item = Rule>,
	policy: Option<Policy>,
	observer: &mut dyn ParseObserver,
) -> RuleSet {
	let mut set = RuleSet::new();
	let mut input = 0;

	for rule in rules {
		input += 1;
		if set.contains(&rule) {
			observer.duplicate_skipped(&rule);
		} else {
			set.insert(rule);
		}
	}

	observer.merge_finished(policy, input, set.len());
	set
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::observer::NoopObserver;
	use crate::observer::testing::{Event, RecordingObserver};

	#[test]
	fn test_insert_first_wins() {
		let mut set = RuleSet::new();
		assert!(set.insert(Rule::domain("example.com")));
		assert!(!set.insert(Rule::domain("example.com")));
		assert_eq!(set.len(), 1);
	}

	#[test]
	fn test_same_content_different_type_is_distinct() {
		let mut set = RuleSet::new();
		assert!(set.insert(Rule::domain("google")));
		assert!(set.insert(Rule::keyword("google")));
		assert_eq!(set.len(), 2);
		assert_eq!(set.count_of(RuleType::Domain), 1);
		assert_eq!(set.count_of(RuleType::Keyword), 1);
	}

	#[test]
	fn test_merge_drops_duplicates() {
		let rules = vec![
			Rule::domain("example.com"),
			Rule::cidr("10.0.0.0/8"),
			Rule::domain("example.com"),
		];
		let mut observer = RecordingObserver::default();
		let set = merge_rules(rules, Some(Policy::Direct), &mut observer);

		assert_eq!(
			set.into_vec(),
			vec![Rule::domain("example.com"), Rule::cidr("10.0.0.0/8")]
		);
		assert_eq!(
			observer.events,
			vec![
				Event::Duplicate(Rule::domain("example.com")),
				Event::MergeFinished(Some(Policy::Direct), 3, 2),
			]
		);
	}

	#[test]
	fn test_merge_distinct_keeps_all() {
		let rules: Vec<Rule> = (0..50)
			.map(|i| Rule::cidr(format!("10.{i}.0.0/16")))
			.collect();
		let set = merge_rules(rules.clone(), None, &mut NoopObserver);

		assert_eq!(set.len(), 50);
		assert_eq!(set.into_vec(), rules);
	}

	#[test]
	fn test_merge_empty() {
		let mut observer = RecordingObserver::default();
		let set = merge_rules(Vec::new(), None, &mut observer);

		assert!(set.is_empty());
		assert_eq!(observer.events, vec![Event::MergeFinished(None, 0, 0)]);
	}

	#[test]
	fn test_merge_preserves_first_seen_order() {
		let rules = vec![
			Rule::keyword("ads"),
			Rule::domain("b.com"),
			Rule::keyword("ads"),
			Rule::domain("a.com"),
			Rule::domain("b.com"),
		];
		let set = merge_rules(rules, None, &mut NoopObserver);
		let contents: Vec<&str> = set.iter().map(Rule::content).collect();
		assert_eq!(contents, vec!["ads", "b.com", "a.com"]);
	}

	#[test]
	fn test_merge_is_idempotent() {
		let rules = vec![
			Rule::domain("example.com"),
			Rule::keyword("example"),
			Rule::domain("example.com"),
			Rule::cidr("192.168.0.0/16"),
			Rule::cidr("192.168.0.0/16"),
		];
		let once = merge_rules(rules, None, &mut NoopObserver);

		let mut observer = RecordingObserver::default();
		let twice = merge_rules(once.clone().into_vec(), None, &mut observer);

		assert_eq!(once, twice);
		assert_eq!(observer.duplicates(), 0);
	}
}
