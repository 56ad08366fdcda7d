//! Site configuration for the zkGas profiling documentation site.
//!
//! Parses `site.toml` configuration files with serde, provides auto-discovery
//! of the config file in parent directories, checks the configuration against
//! the rules the external site generator assumes, and exports it as the JSON
//! the generator reads at build time.
//!
//! The configuration is a single declarative record: a `title`, a
//! `description`, and an ordered `sidebar` of navigation entries. Sidebar
//! order is the rendered order and is preserved through load and export.

pub mod sidebar;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use sidebar::{GroupEntry, LeafEntry, LintIssue, SidebarEntry};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "site.toml";

/// Site configuration consumed by the documentation-site generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Short site title shown in the header.
    pub title: String,
    /// Longer summary used for page metadata.
    pub description: String,
    /// Ordered sidebar entries.
    #[serde(default)]
    pub sidebar: Vec<SidebarEntry>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl SiteConfig {
    /// Load configuration from file and validate it.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `site.toml` in the current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, no config
    /// can be discovered, parsing fails, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_lenient(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file without validating it.
    ///
    /// Used by conformance checking so every problem can be reported at once
    /// instead of stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be found or parsed.
    pub fn load_lenient(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => Self::discover_config().ok_or_else(|| {
                ConfigError::Validation(format!(
                    "no {CONFIG_FILENAME} found in current directory or parents"
                ))
            })?,
        };

        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or required
    /// fields are missing.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check the configuration against the rules the site generator assumes.
    ///
    /// Returns every problem found, in authoring order: empty `title` or
    /// `description`, empty entry text, malformed links, duplicate links,
    /// and groups without items.
    #[must_use]
    pub fn lint(&self) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(LintIssue::new("title", "cannot be empty"));
        }
        if self.description.trim().is_empty() {
            issues.push(LintIssue::new("description", "cannot be empty"));
        }
        issues.extend(sidebar::lint(&self.sidebar));
        issues
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` carrying the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.lint().into_iter().next() {
            Some(issue) => Err(ConfigError::Validation(issue.to_string())),
            None => Ok(()),
        }
    }

    /// Iterate leaf entries in rendered order, descending into groups.
    pub fn leaf_entries(&self) -> impl Iterator<Item = &LeafEntry> {
        sidebar::leaf_entries(&self.sidebar)
    }

    /// Find a leaf entry by its link.
    #[must_use]
    pub fn find_by_link(&self, link: &str) -> Option<&LeafEntry> {
        sidebar::find_by_link(&self.sidebar, link)
    }

    /// Serialize the configuration as compact JSON for the site generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL_TOML: &str = r#"
title = "zkGas profiling"
description = "Profiling framework documentation."

[[sidebar]]
text = "Getting Started"
link = "/getting-started"

[[sidebar]]
text = "Example"
link = "/example"
"#;

    const GROUPED_TOML: &str = r#"
title = "zkGas profiling"
description = "Profiling framework documentation."

[[sidebar]]
text = "Getting Started"
link = "/getting-started"

[[sidebar]]
text = "Benchmark Results"

[[sidebar.items]]
text = "SP1"
link = "/benchmark-results/sp1"

[[sidebar.items]]
text = "RISC0"
link = "/benchmark-results/risc0"
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        assert_eq!(config.title, "zkGas profiling");
        assert_eq!(config.description, "Profiling framework documentation.");
        assert_eq!(config.sidebar.len(), 2);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_config_without_sidebar() {
        let toml = r#"
title = "Site"
description = "Description."
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        assert!(config.sidebar.is_empty());
    }

    #[test]
    fn test_parse_config_missing_title_fails() {
        let toml = r#"description = "Description.""#;
        let result = SiteConfig::from_toml(toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_grouped_sidebar() {
        let config = SiteConfig::from_toml(GROUPED_TOML).unwrap();
        assert_eq!(config.sidebar.len(), 2);

        let SidebarEntry::Group(group) = &config.sidebar[1] else {
            panic!("expected group entry, got {:?}", config.sidebar[1]);
        };
        assert_eq!(group.text, "Benchmark Results");
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[0].link, "/benchmark-results/sp1");
        assert_eq!(group.items[1].link, "/benchmark-results/risc0");
    }

    #[test]
    fn test_conformance_scenario_two_leaves_in_order() {
        // Two leaves, in authoring order, exact links, no duplicates
        let config = SiteConfig::from_toml(MINIMAL_TOML).unwrap();

        let leaves: Vec<_> = config.leaf_entries().collect();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].text, "Getting Started");
        assert_eq!(leaves[0].link, "/getting-started");
        assert_eq!(leaves[1].text, "Example");
        assert_eq!(leaves[1].link, "/example");
        assert!(config.lint().is_empty());
    }

    #[test]
    fn test_order_stable_across_parse_cycles() {
        let first = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        let second = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        assert_eq!(first, second);

        // Parse the serialized form back and compare entry order
        let json = first.to_json().unwrap();
        let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed.sidebar, first.sidebar);
    }

    #[test]
    fn test_find_by_link() {
        let config = SiteConfig::from_toml(GROUPED_TOML).unwrap();
        assert_eq!(
            config.find_by_link("/benchmark-results/sp1").unwrap().text,
            "SP1"
        );
        assert!(config.find_by_link("/absent").is_none());
    }

    // Validation tests

    #[test]
    fn test_validate_valid_config() {
        let config = SiteConfig::from_toml(GROUPED_TOML).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        config.title = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_validate_empty_description() {
        let mut config = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        config.description = "  ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_validate_reports_first_sidebar_issue() {
        let toml = r#"
title = "Site"
description = "Description."

[[sidebar]]
text = "Broken"
link = "no-slash"
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sidebar[0]"));
        assert!(err.to_string().contains("start with '/'"));
    }

    #[test]
    fn test_lint_collects_config_and_sidebar_issues() {
        let toml = r#"
title = ""
description = "Description."

[[sidebar]]
text = "First"
link = "/page"

[[sidebar]]
text = "Second"
link = "/page"
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        let issues = config.lint();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].location, "title");
        assert_eq!(issues[1].location, "sidebar[1]");
    }

    // Export tests

    #[test]
    fn test_to_json_matches_generator_shape() {
        let config = SiteConfig::from_toml(GROUPED_TOML).unwrap();
        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(json["title"], "zkGas profiling");
        assert_eq!(json["description"], "Profiling framework documentation.");
        assert_eq!(json["sidebar"][0]["text"], "Getting Started");
        assert_eq!(json["sidebar"][0]["link"], "/getting-started");
        assert_eq!(json["sidebar"][1]["text"], "Benchmark Results");
        assert_eq!(json["sidebar"][1]["items"][0]["link"], "/benchmark-results/sp1");
        // config_path is internal and must not leak into the export
        assert!(json.get("config_path").is_none());
    }

    #[test]
    fn test_to_json_pretty_round_trips() {
        let config = SiteConfig::from_toml(MINIMAL_TOML).unwrap();
        let reparsed: SiteConfig =
            serde_json::from_str(&config.to_json_pretty().unwrap()).unwrap();
        assert_eq!(reparsed.sidebar, config.sidebar);
    }

    // Load tests

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, MINIMAL_TOML).unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title, "zkGas profiling");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = SiteConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
title = "Site"
description = "Description."

[[sidebar]]
text = "Broken"
link = "broken"
"#,
        )
        .unwrap();

        let result = SiteConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_lenient_keeps_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
title = "Site"
description = "Description."

[[sidebar]]
text = "Broken"
link = "broken"
"#,
        )
        .unwrap();

        let config = SiteConfig::load_lenient(Some(&path)).unwrap();
        assert_eq!(config.lint().len(), 1);
    }

    // The configuration shipped at the repository root must conform

    #[test]
    fn test_bundled_config_is_valid() {
        let config = SiteConfig::from_toml(include_str!("../../../site.toml")).unwrap();

        assert_eq!(config.title, "zkGas profiling");
        assert!(config.validate().is_ok());

        // Extended sidebar variant is authoritative
        let texts: Vec<_> = config.sidebar.iter().map(SidebarEntry::text).collect();
        assert!(texts.contains(&"Single File Benchmark"));
        assert!(texts.contains(&"Simplified Naming"));
        assert!(texts.contains(&"Benchmark Results"));
        assert_eq!(texts.first(), Some(&"Getting Started"));
        assert_eq!(texts.last(), Some(&"Example"));
    }
}
