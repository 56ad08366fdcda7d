//! Sidebar navigation entries.
//!
//! The sidebar is an ordered sequence of [`SidebarEntry`] values. An entry
//! either links directly to a documentation page ([`LeafEntry`]) or labels an
//! expandable group of leaf entries ([`GroupEntry`]). Ordering is significant:
//! the site generator renders entries in authoring order, and iteration here
//! preserves it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A clickable sidebar entry linking to a documentation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafEntry {
    /// Display title.
    pub text: String,
    /// Root-relative page path (e.g., `/getting-started`).
    pub link: String,
}

/// A labeled, expandable group of leaf entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Group label.
    pub text: String,
    /// Leaf entries contained in the group, in rendered order.
    pub items: Vec<LeafEntry>,
}

/// A single sidebar entry.
///
/// Serialized without a tag: an object with `items` is a group, an object
/// with `link` is a leaf. This is the exact shape the site generator consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Expandable group of leaf entries.
    Group(GroupEntry),
    /// Direct link to a page.
    Leaf(LeafEntry),
}

impl SidebarEntry {
    /// Display title of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Leaf(leaf) => &leaf.text,
        }
    }

    /// Number of leaf entries this entry contributes.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Group(group) => group.items.len(),
            Self::Leaf(_) => 1,
        }
    }
}

/// Iterate leaf entries in rendered order, descending into groups.
pub fn leaf_entries(sidebar: &[SidebarEntry]) -> impl Iterator<Item = &LeafEntry> {
    sidebar.iter().flat_map(|entry| match entry {
        SidebarEntry::Group(group) => group.items.iter(),
        SidebarEntry::Leaf(leaf) => std::slice::from_ref(leaf).iter(),
    })
}

/// Find a leaf entry by its link.
#[must_use]
pub fn find_by_link<'a>(sidebar: &'a [SidebarEntry], link: &str) -> Option<&'a LeafEntry> {
    leaf_entries(sidebar).find(|leaf| leaf.link == link)
}

/// A single conformance problem found in a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintIssue {
    /// Location of the problem (e.g., `sidebar[2].items[0]`).
    pub location: String,
    /// Problem description.
    pub message: String,
}

impl LintIssue {
    /// Create a lint issue.
    #[must_use]
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Check a sidebar against the rules the site generator assumes.
///
/// Reports, in authoring order:
/// - empty entry or group-item text;
/// - links that do not start with `/` or that carry a trailing slash;
/// - duplicate links anywhere in the sidebar;
/// - groups without items.
#[must_use]
pub fn lint(sidebar: &[SidebarEntry]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut seen_links: HashSet<&str> = HashSet::new();

    for (idx, entry) in sidebar.iter().enumerate() {
        let location = format!("sidebar[{idx}]");
        match entry {
            SidebarEntry::Leaf(leaf) => {
                lint_leaf(leaf, &location, &mut seen_links, &mut issues);
            }
            SidebarEntry::Group(group) => {
                if group.text.trim().is_empty() {
                    issues.push(LintIssue::new(&location, "text cannot be empty"));
                }
                if group.items.is_empty() {
                    issues.push(LintIssue::new(&location, "group has no items"));
                }
                for (item_idx, item) in group.items.iter().enumerate() {
                    let item_location = format!("{location}.items[{item_idx}]");
                    lint_leaf(item, &item_location, &mut seen_links, &mut issues);
                }
            }
        }
    }

    issues
}

/// Check a single leaf entry and record its link for duplicate detection.
fn lint_leaf<'a>(
    leaf: &'a LeafEntry,
    location: &str,
    seen_links: &mut HashSet<&'a str>,
    issues: &mut Vec<LintIssue>,
) {
    if leaf.text.trim().is_empty() {
        issues.push(LintIssue::new(location, "text cannot be empty"));
    }

    if !leaf.link.starts_with('/') {
        issues.push(LintIssue::new(
            location,
            format!("link \"{}\" must start with '/'", leaf.link),
        ));
    } else if leaf.link.ends_with('/') {
        issues.push(LintIssue::new(
            location,
            format!("link \"{}\" must not have a trailing slash", leaf.link),
        ));
    }

    if !seen_links.insert(leaf.link.as_str()) {
        issues.push(LintIssue::new(
            location,
            format!("duplicate link \"{}\"", leaf.link),
        ));
    }
}
