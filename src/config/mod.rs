//! Configuration loading and parsing for rule-merge.
//!
//! This module handles:
//! - JSON config file parsing
//! - The `direct` / `proxy` / `reject` rule file lists

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Policy};
