//! Migration constants injected into the pipeline.
//!
//! The defaults describe a Jira to Azure DevOps migration. Swapping the
//! target tracker means building a different [`MigrationConfig`], not editing
//! the transform code.

use serde::Serialize;

use crate::error::ConfigError;

/// Browse URL prefix of the source tracker; the issue key is appended.
pub const DEFAULT_ISSUE_BASE_URL: &str = "https://microtec.atlassian.net/browse/";

/// Work item type assigned to every imported row.
pub const DEFAULT_WORK_ITEM_TYPE: &str = "Bug";

/// Link text of the "Original Issue" section.
pub const DEFAULT_LINK_LABEL: &str = "View in Jira";

/// Where an attachment URL ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UrlPattern {
    /// URL runs to the next whitespace.
    Whitespace,
    /// URL runs to the next whitespace or semicolon.
    #[default]
    WhitespaceOrSemicolon,
}

/// Source severity name to target priority code.
///
/// Lookups are exact (after trimming). Severities not in the table resolve
/// to the fallback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityMap {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl PriorityMap {
    /// Builds a table from `(severity, code)` pairs.
    ///
    /// # Errors
    ///
    /// Fails when the table is empty, a severity repeats, or `fallback` is not
    /// one of the severities.
    pub fn new<S, C>(
        entries: impl IntoIterator<Item = (S, C)>,
        fallback: &str,
    ) -> Result<Self, ConfigError>
    where
        S: Into<String>,
        C: Into<String>,
    {
        let mut collected: Vec<(String, String)> = Vec::new();
        for (severity, code) in entries {
            let severity = severity.into();
            if collected.iter().any(|(existing, _)| *existing == severity) {
                return Err(ConfigError::DuplicatePriority { severity });
            }
            collected.push((severity, code.into()));
        }
        if collected.is_empty() {
            return Err(ConfigError::EmptyPriorityMap);
        }
        if !collected.iter().any(|(severity, _)| severity == fallback) {
            return Err(ConfigError::UnknownFallback {
                fallback: fallback.to_string(),
            });
        }
        Ok(Self {
            entries: collected,
            fallback: fallback.to_string(),
        })
    }

    /// Azure DevOps priorities, 1 being the most urgent.
    pub fn azure_devops() -> Self {
        let entries = [
            ("Highest", "1"),
            ("High", "2"),
            ("Medium", "3"),
            ("Low", "4"),
            ("Lowest", "4"),
        ];
        Self {
            entries: entries
                .iter()
                .map(|(s, c)| ((*s).to_string(), (*c).to_string()))
                .collect(),
            fallback: "Medium".to_string(),
        }
    }

    /// Target code for a known severity.
    pub fn get(&self, severity: &str) -> Option<&str> {
        let severity = severity.trim();
        self.entries
            .iter()
            .find(|(name, _)| name == severity)
            .map(|(_, code)| code.as_str())
    }

    /// Target code for `severity`, or the fallback entry's code.
    pub fn resolve(&self, severity: Option<&str>) -> &str {
        severity
            .and_then(|s| self.get(s))
            .unwrap_or_else(|| self.fallback_code())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn fallback_code(&self) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| *name == self.fallback)
            .map_or("", |(_, code)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriorityMap {
    fn default() -> Self {
        Self::azure_devops()
    }
}

/// Constants of one source/target tracker pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationConfig {
    issue_base_url: String,
    work_item_type: String,
    link_label: String,
    priorities: PriorityMap,
    url_pattern: UrlPattern,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            issue_base_url: DEFAULT_ISSUE_BASE_URL.to_string(),
            work_item_type: DEFAULT_WORK_ITEM_TYPE.to_string(),
            link_label: DEFAULT_LINK_LABEL.to_string(),
            priorities: PriorityMap::default(),
            url_pattern: UrlPattern::default(),
        }
    }
}

impl MigrationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the browse URL prefix used for the "Original Issue" link.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] for a blank URL.
    pub fn with_issue_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        self.issue_base_url = url;
        Ok(self)
    }

    #[must_use]
    pub fn with_work_item_type(mut self, work_item_type: impl Into<String>) -> Self {
        self.work_item_type = work_item_type.into();
        self
    }

    #[must_use]
    pub fn with_link_label(mut self, label: impl Into<String>) -> Self {
        self.link_label = label.into();
        self
    }

    #[must_use]
    pub fn with_priorities(mut self, priorities: PriorityMap) -> Self {
        self.priorities = priorities;
        self
    }

    #[must_use]
    pub fn with_url_pattern(mut self, pattern: UrlPattern) -> Self {
        self.url_pattern = pattern;
        self
    }

    pub fn issue_base_url(&self) -> &str {
        &self.issue_base_url
    }

    pub fn work_item_type(&self) -> &str {
        &self.work_item_type
    }

    pub fn link_label(&self) -> &str {
        &self.link_label
    }

    pub fn priorities(&self) -> &PriorityMap {
        &self.priorities
    }

    pub fn url_pattern(&self) -> UrlPattern {
        self.url_pattern
    }

    /// Browse link of an issue in the source tracker.
    pub fn issue_url(&self, issue_key: &str) -> String {
        format!("{}{}", self.issue_base_url, issue_key)
    }
}
