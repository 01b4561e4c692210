use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockidupError {
    /// Clockify answered with its recognized error body `{"message", "code"}`.
    /// The HTTP status is kept so callers can branch on it, e.g. to tell a bad
    /// token (401) apart from other failures.
    #[error("{status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        code: i64,
    },

    /// A non-2xx response whose body is not the recognized error shape, e.g.
    /// routing errors or empty bodies.
    #[error("{status}: (raw response body) {body}")]
    UnexpectedResponse { status: StatusCode, body: String },

    #[error("no workspaces found, check your token and re-login via 'clockidup login'")]
    NoWorkspaces,

    #[error("unable to find workspace '{0}'. Use 'clockidup select' or pass a workspace name with '--workspace'")]
    WorkspaceNotFound(String),

    #[error("workspace '{0}' has no memberships, cannot determine the acting user")]
    NoMembership(String),

    #[error("time entry references projectId '{0}' which does not exist in this workspace")]
    UnknownProject(String),

    #[error("workspaceID is empty")]
    EmptyWorkspaceId,

    #[error("userID is empty")]
    EmptyUserId,

    #[error("projectID is empty")]
    EmptyProjectId,

    #[error("taskID is empty")]
    EmptyTaskId,

    #[error("while fetching task for time entry '{project}: {description}': {source}")]
    TaskLookup {
        project: String,
        description: String,
        #[source]
        source: Box<ClockidupError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{0}' is not a valid date. The date must be of the form: 2021-12-31, today, yesterday, 3 days ago, three days ago, wednesday, last tuesday")]
    InvalidDate(String),

    #[error("cannot give a future date, {0} is in the future")]
    FutureDate(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("while parsing JSON from the HTTP response for GET {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ClockidupError {
    /// True when this is a structured Clockify API error with the given
    /// HTTP status.
    pub fn is_status(&self, status: StatusCode) -> bool {
        matches!(self, ClockidupError::Api { status: s, .. } if *s == status)
    }
}

pub type Result<T> = std::result::Result<T, ClockidupError>;
