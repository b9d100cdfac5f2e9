//! Target import record.

use serde::Serialize;

use crate::columns::target;

/// Header of the import file, in column order.
pub const OUTPUT_COLUMNS: [&str; 9] = [
    target::WORK_ITEM_TYPE,
    target::TITLE,
    target::ASSIGNED_TO,
    target::CREATED_BY,
    target::PRIORITY,
    target::STATE,
    target::CREATED_DATE,
    target::CHANGED_DATE,
    target::DESCRIPTION,
];

/// One work item of the import file.
///
/// Every field is always present; values missing from the source degrade to
/// an empty string or to a placeholder, never to an absent column. Serializes
/// with the [`OUTPUT_COLUMNS`] headers in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Work Item Type")]
    pub work_item_type: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Assigned To")]
    pub assigned_to: String,
    #[serde(rename = "Created By")]
    pub created_by: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Created Date")]
    pub created_date: String,
    #[serde(rename = "Changed Date")]
    pub changed_date: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl OutputRow {
    /// Field values in [`OUTPUT_COLUMNS`] order.
    pub fn values(&self) -> [&str; 9] {
        [
            self.work_item_type.as_str(),
            self.title.as_str(),
            self.assigned_to.as_str(),
            self.created_by.as_str(),
            self.priority.as_str(),
            self.state.as_str(),
            self.created_date.as_str(),
            self.changed_date.as_str(),
            self.description.as_str(),
        ]
    }

    /// Value of the field with the given output header.
    pub fn field(&self, column: &str) -> Option<&str> {
        let idx = OUTPUT_COLUMNS.iter().position(|c| *c == column)?;
        Some(self.values()[idx])
    }
}
