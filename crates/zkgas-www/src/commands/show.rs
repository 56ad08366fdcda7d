//! `zkgas-www show` command implementation.

use std::path::PathBuf;

use clap::Args;
use zkgas_www_config::{SidebarEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Lenient load: the tree is useful even while the config is being fixed
        let config = SiteConfig::load_lenient(self.config.as_deref())?;

        output.highlight(&config.title);
        output.info(&config.description);
        output.info("");

        for entry in &config.sidebar {
            match entry {
                SidebarEntry::Leaf(leaf) => {
                    output.info(&format!("{}  ->  {}", leaf.text, leaf.link));
                }
                SidebarEntry::Group(group) => {
                    output.highlight(&group.text);
                    for item in &group.items {
                        output.info(&format!("  {}  ->  {}", item.text, item.link));
                    }
                }
            }
        }

        Ok(())
    }
}
