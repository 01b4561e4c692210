use crate::error::{ClockidupError, Result};
use crate::models::{ApiErrorBody, Project, Task, TimeEntry, Workspace};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
#[cfg(test)]
use mockall::automock;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

pub const DEFAULT_SERVER: &str = "https://api.clockify.me";

/// The four read operations clockidup needs from the Clockify API. The
/// production implementation is [`ClockifyClient`]; tests use the generated
/// mock.
#[cfg_attr(test, automock)]
pub trait ClockifyApi {
    fn workspaces(&self) -> Result<Vec<Workspace>>;

    fn projects(&self, workspace_id: &str) -> Result<Vec<Project>>;

    fn time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>>;

    fn task(&self, workspace_id: &str, project_id: &str, task_id: &str) -> Result<Task>;
}

pub struct ClockifyClient {
    client: Client,
    base_url: String,
}

impl ClockifyClient {
    /// Builds a client that authenticates every request with the given token
    /// through the `X-Api-Key` header. No network call is made and the token
    /// is not validated here.
    pub fn new(token: &str, server: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Api-Key",
            HeaderValue::from_str(token).map_err(|e| {
                ClockidupError::Config(format!("Invalid Clockify API token: {}", e))
            })?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: server.trim_end_matches('/').to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // Routing errors and empty bodies don't parse as the recognized
            // error shape; those carry the raw body instead.
            return match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_err) => Err(ClockidupError::Api {
                    status,
                    message: api_err.message,
                    code: api_err.code,
                }),
                Err(_) => Err(ClockidupError::UnexpectedResponse { status, body }),
            };
        }

        serde_json::from_str(&body).map_err(|e| ClockidupError::Decode {
            path: path.to_string(),
            source: e,
        })
    }
}

impl ClockifyApi for ClockifyClient {
    fn workspaces(&self) -> Result<Vec<Workspace>> {
        self.get("/api/v1/workspaces")
    }

    fn projects(&self, workspace_id: &str) -> Result<Vec<Project>> {
        if workspace_id.is_empty() {
            return Err(ClockidupError::EmptyWorkspaceId);
        }

        self.get(&format!("/api/v1/workspaces/{}/projects", workspace_id))
    }

    fn time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>> {
        if workspace_id.is_empty() {
            return Err(ClockidupError::EmptyWorkspaceId);
        }
        if user_id.is_empty() {
            return Err(ClockidupError::EmptyUserId);
        }

        // Clockify documents the expected format as ISO 8601 of the form
        // "2021-01-26T06:02:00Z"; RFC 3339 in UTC matches it.
        self.get(&format!(
            "/api/v1/workspaces/{}/user/{}/time-entries?start={}&end={}",
            workspace_id,
            user_id,
            start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end.to_rfc3339_opts(SecondsFormat::Secs, true),
        ))
    }

    fn task(&self, workspace_id: &str, project_id: &str, task_id: &str) -> Result<Task> {
        if workspace_id.is_empty() {
            return Err(ClockidupError::EmptyWorkspaceId);
        }
        if project_id.is_empty() {
            return Err(ClockidupError::EmptyProjectId);
        }
        if task_id.is_empty() {
            return Err(ClockidupError::EmptyTaskId);
        }

        self.get(&format!(
            "/api/v1/workspaces/{}/projects/{}/tasks/{}",
            workspace_id, project_id, task_id
        ))
    }
}
