use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A Clockify workspace, the top-level scope for all queries. Only the
/// fields clockidup needs are kept; the rest of the payload is ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

/// Association between a user and a workspace or project. Used only to
/// recover the acting user's identifier.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub target_id: String,
    #[serde(default)]
    pub membership_type: String,
    #[serde(default)]
    pub membership_status: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub workspace_id: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_id: String,
}

/// One tracked interval of work as returned by the API. `task_id` and
/// `project_id` come back as `null` when the entry is not tied to a task
/// or project.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub time_interval: TimeInterval,
    #[serde(default)]
    pub workspace_id: String,
    #[serde(default)]
    pub is_locked: bool,
}

/// `end` is absent while the entry's timer is still running.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// Whenever an error occurs, Clockify responds with a JSON body that looks
/// like this:
///
/// ```json
/// {
///   "message": "Full authentication is required to access this resource",
///   "code": 1000
/// }
/// ```
///
/// Both fields are required on purpose: routing errors and empty bodies do
/// not fit this shape and must be surfaced as unexpected responses instead.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub code: i64,
}
