//! `zkgas-www export` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use zkgas_www_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the output cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // The generator must never see an invalid configuration
        let config = SiteConfig::load(self.config.as_deref())?;

        let mut json = if self.compact {
            config.to_json()?
        } else {
            config.to_json_pretty()?
        };
        json.push('\n');

        match self.out {
            Some(path) => {
                std::fs::write(&path, &json)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
            }
        }

        Ok(())
    }
}
