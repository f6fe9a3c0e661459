//! Rule-merge - CLI tool for parsing and deduplicating routing rule lists.
//!
//! This library provides the core functionality for rule-merge, including:
//! - JSON config parsing for the `direct` / `proxy` / `reject` file lists
//! - Rule line and rule file parsing
//! - Deduplication of rules by type and content
//! - Progress reporting through an injected observer
//!
//! # Example
//!
//! ```no_run
//! use rule_merge::config::Policy;
//! use rule_merge::driver::{BatchOptions, run_batch};
//! use rule_merge::observer::LogObserver;
//!
//! let options = BatchOptions::new("conf/config.json", "data");
//! let report = run_batch(&options, &mut LogObserver).unwrap();
//!
//! if let Some(direct) = report.policy(Policy::Direct) {
//!     println!("{} unique direct rules", direct.rules.len());
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod observer;
pub mod rules;

pub use error::{Result, RuleMergeError};
