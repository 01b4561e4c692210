use crate::clockify::{ClockifyApi, ClockifyClient};
use crate::config::Config;
use crate::error::{ClockidupError, Result};
use crate::prompt;
use log::debug;

/// A token works when listing workspaces succeeds with it. Any failure, be
/// it a 401, a 403 or a network problem, means the token cannot be used.
pub fn token_works(client: &impl ClockifyApi) -> bool {
    match client.workspaces() {
        Ok(_) => true,
        Err(err) => {
            debug!("token check failed: {}", err);
            false
        }
    }
}

/// Interactive login: obtain and verify an API token, then pick the
/// workspace to use. Returns the new configuration to persist.
pub fn login(existing: &Config, server: &str) -> Result<Config> {
    prompt::display_info("the API token is available at https://clockify.me/user/settings");

    // When the stored token still works, only override it if asked to.
    if !existing.token.is_empty() {
        let client = ClockifyClient::new(&existing.token, server)?;
        if token_works(&client) {
            if !prompt::confirm_token_override()? {
                return Ok(existing.clone());
            }
        } else {
            prompt::display_warning("the stored token no longer works");
        }
    }

    let token = prompt::prompt_token()?;
    let client = ClockifyClient::new(&token, server)?;
    if !token_works(&client) {
        return Err(ClockidupError::Config("token seems to be invalid".to_string()));
    }

    let workspace = select_workspace(&client)?;

    Ok(Config { token, workspace })
}

/// Fetches the workspaces for the given client and prompts the user to
/// choose one; returns the chosen workspace name.
pub fn select_workspace(client: &impl ClockifyApi) -> Result<String> {
    let workspaces = client.workspaces()?;
    if workspaces.is_empty() {
        return Err(ClockidupError::NoWorkspaces);
    }

    prompt::prompt_workspace(&workspaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clockify::MockClockifyApi;
    use reqwest::StatusCode;

    #[test]
    fn token_works_when_workspaces_succeeds() {
        let mut client = MockClockifyApi::new();
        client.expect_workspaces().returning(|| Ok(vec![]));

        assert!(token_works(&client));
    }

    #[test]
    fn token_does_not_work_on_authentication_failure() {
        let mut client = MockClockifyApi::new();
        client.expect_workspaces().returning(|| {
            Err(ClockidupError::Api {
                status: StatusCode::UNAUTHORIZED,
                message: "Full authentication is required to access this resource".to_string(),
                code: 1000,
            })
        });

        assert!(!token_works(&client));
    }

    #[test]
    fn token_does_not_work_on_authorization_failure() {
        let mut client = MockClockifyApi::new();
        client.expect_workspaces().returning(|| {
            Err(ClockidupError::Api {
                status: StatusCode::FORBIDDEN,
                message: String::new(),
                code: 0,
            })
        });

        assert!(!token_works(&client));
    }

    #[test]
    fn select_workspace_fails_without_workspaces() {
        let mut client = MockClockifyApi::new();
        client.expect_workspaces().returning(|| Ok(vec![]));

        let err = select_workspace(&client).unwrap_err();

        assert!(matches!(err, ClockidupError::NoWorkspaces));
    }
}
