//! `zkgas-www check` command implementation.

use std::path::PathBuf;

use clap::Args;
use zkgas_www_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or has
    /// conformance problems.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Lenient load so every problem is reported, not just the first
        let config = SiteConfig::load_lenient(self.config.as_deref())?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Checking {}...", path.display()));
        }

        let entries = config.sidebar.len();
        let links = config.leaf_entries().count();
        output.info(&format!("{entries} sidebar entries, {links} links"));

        let issues = config.lint();
        if issues.is_empty() {
            output.success("Configuration OK.");
            return Ok(());
        }

        output.warning(&format!("\nProblems found ({}):", issues.len()));
        for issue in &issues {
            output.info(&format!("  - {issue}"));
        }
        Err(CliError::Validation(format!(
            "{} problem(s) found",
            issues.len()
        )))
    }
}
