//! Column names of the source exports and the target import file.

/// Join key present in both source tables.
pub const ISSUE_KEY: &str = "Issue key";

/// Columns read from the primary ("default fields") export.
pub mod primary {
    pub const SUMMARY: &str = "Summary";
    pub const ASSIGNEE: &str = "Assignee";
    pub const REPORTER: &str = "Reporter";
    pub const PRIORITY: &str = "Priority";
    pub const STATUS: &str = "Status";
    pub const CREATED: &str = "Created";
    pub const UPDATED: &str = "Updated";
}

/// Columns read from the secondary ("all fields") export.
pub mod secondary {
    pub const DESCRIPTION: &str = "Description";
    pub const ENVIRONMENT: &str = "Environment";
    pub const ATTACHMENT: &str = "Attachment";
}

/// Header names of the target import file, in output order.
pub mod target {
    pub const WORK_ITEM_TYPE: &str = "Work Item Type";
    pub const TITLE: &str = "Title";
    pub const ASSIGNED_TO: &str = "Assigned To";
    pub const CREATED_BY: &str = "Created By";
    pub const PRIORITY: &str = "Priority";
    pub const STATE: &str = "State";
    pub const CREATED_DATE: &str = "Created Date";
    pub const CHANGED_DATE: &str = "Changed Date";
    pub const DESCRIPTION: &str = "Description";
}
