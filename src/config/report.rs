//! Structured report of everything the loader had to skip.

use serde::Serialize;

/// Where in the configuration an issue was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum IssueLocation {
    /// A whole top-level parameter.
    Parameter(&'static str),
    /// Entry `n` of the pack type list.
    PackType(usize),
    /// Member `card` of pack type `pack`.
    PackMember {
        /// Pack type list position.
        pack: usize,
        /// Card index as written in the pack's `cards` list.
        card: i64,
    },
    /// Entry `n` of the card list.
    Card(usize),
    /// Entry `n` of the scene's card positions.
    CardSlot(usize),
}

impl std::fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueLocation::Parameter(name) => write!(f, "parameter `{name}`"),
            IssueLocation::PackType(n) => write!(f, "pack type {n}"),
            IssueLocation::PackMember { pack, card } => write!(f, "card {card} of pack type {pack}"),
            IssueLocation::Card(n) => write!(f, "card {n}"),
            IssueLocation::CardSlot(n) => write!(f, "card position {n}"),
        }
    }
}

/// One skipped or degraded configuration entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoadIssue {
    /// Where the problem is.
    pub location: IssueLocation,
    /// What is wrong.
    pub message: String,
}

impl std::fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// All issues found in one load, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue and emit it as a warning.
    pub fn push(&mut self, location: IssueLocation, message: impl Into<String>) {
        let issue = LoadIssue {
            location,
            message: message.into(),
        };
        tracing::warn!(location = %issue.location, message = %issue.message, "skipping booster configuration entry");
        self.issues.push(issue);
    }

    /// True when nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if there are no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over issues.
    pub fn iter(&self) -> impl Iterator<Item = &LoadIssue> {
        self.issues.iter()
    }

    /// Issues raised against a whole top-level parameter.
    pub fn parameter_issues(&self) -> impl Iterator<Item = &LoadIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.location, IssueLocation::Parameter(_)))
    }
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no configuration issues");
        }
        writeln!(f, "{} configuration issue(s):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}
