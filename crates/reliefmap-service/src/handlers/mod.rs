//! Request handlers, one module per collection.

pub mod alerts;
pub mod fallback;
pub mod nearby;
pub mod resources;
pub mod submissions;

pub const MSG_RESOURCE_ADDED: &str = "Resource added successfully";
pub const MSG_RESOURCE_UPDATED: &str = "Resource updated successfully";
pub const MSG_RESOURCE_DELETED: &str = "Resource deleted successfully";
pub const MSG_ALERT_CREATED: &str = "Alert created successfully";
pub const MSG_REPORT_SUBMITTED: &str = "Report submitted successfully";
pub const MSG_VOLUNTEER_SUBMITTED: &str = "Volunteer application submitted successfully";
