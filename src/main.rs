use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rule_merge::driver::{BatchOptions, BatchReport, run_batch};
use rule_merge::observer::LogObserver;

#[derive(Parser)]
#[command(name = "rulemerge")]
#[command(
	author,
	version,
	about = "CLI tool for parsing and deduplicating routing rule lists"
)]
struct Cli {
	/// Path to the JSON config listing rule files
	#[arg(short, long, value_name = "PATH", default_value = "conf/config.json")]
	config: PathBuf,

	/// Directory containing the rule files named in the config
	#[arg(short, long, value_name = "DIR", default_value = "data")]
	data_dir: PathBuf,
}

fn main() -> ExitCode {
	init_tracing();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let options = BatchOptions::new(cli.config, cli.data_dir);

	let report = run_batch(&options, &mut LogObserver).with_context(|| {
		format!(
			"Failed to load configuration from {}",
			options.config_path.display()
		)
	})?;

	print_summary(&report);
	Ok(ExitCode::SUCCESS)
}

fn print_summary(report: &BatchReport) {
	for policy in &report.policies {
		println!(
			"{}: {} files, {} rules parsed, {} unique",
			policy.policy,
			policy.file_count(),
			policy.parsed_rules,
			policy.rules.len()
		);
	}
}

/// Log to stderr so stdout only carries the summary. `RUST_LOG` overrides the
/// default `info` filter.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(io::stderr))
		.init();
}
