//! Rule parsing and merging for rule-merge.
//!
//! This module handles:
//! - Parsing `TYPE,VALUE` rule lines into typed rules
//! - Reading rule files and choosing their format from the file name
//! - Deduplicating rules by type and content

pub mod file;
pub mod merge;
pub mod parser;
pub mod rule;

pub use file::{FileFormat, is_ip_file_name, parse_rule_file, parse_rule_file_str};
pub use merge::{RuleSet, merge_rules};
pub use parser::{UnknownTypePolicy, parse_rule_line};
pub use rule::{Rule, RuleKey, RuleType};
