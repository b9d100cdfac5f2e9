//! Supplementary per-issue fields joined in from the secondary export.

/// Description placeholder used when the source has no description text.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Environment placeholder used when the source has no environment value.
pub const NOT_PROVIDED: &str = "Not Provided";

/// Attachments placeholder used when no attachment URL was found.
pub const NO_ATTACHMENTS: &str = "No Attachments";

/// Description, environment and attachments of one issue.
///
/// Built once per key from the secondary table and read-only afterwards.
/// The default value carries the placeholders used for issues that have no
/// secondary-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedFields {
    /// Normalized description markup.
    pub description: String,
    pub environment: String,
    /// Attachment URLs joined by newlines, or [`NO_ATTACHMENTS`].
    pub attachments: String,
}

impl EnrichedFields {
    /// Builds fields from already-normalized parts, applying placeholders
    /// for a blank environment and an empty attachment list.
    pub fn new(description: String, environment: Option<&str>, attachment_urls: &[String]) -> Self {
        let environment = environment
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(NOT_PROVIDED)
            .to_string();
        let attachments = if attachment_urls.is_empty() {
            NO_ATTACHMENTS.to_string()
        } else {
            attachment_urls.join("\n")
        };
        Self {
            description,
            environment,
            attachments,
        }
    }
}

impl Default for EnrichedFields {
    fn default() -> Self {
        Self {
            description: NO_DESCRIPTION.to_string(),
            environment: NOT_PROVIDED.to_string(),
            attachments: NO_ATTACHMENTS.to_string(),
        }
    }
}
