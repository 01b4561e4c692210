use crate::error::{ClockidupError, Result};
use crate::models::Workspace;
use console::style;
use dialoguer::{Confirm, Password, Select};

/// Display a success message
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Display an info message
pub fn display_info(message: &str) {
    println!("{} {}", style("ℹ").cyan().bold(), style(message).cyan());
}

/// Display a warning message
pub fn display_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Ask whether the already-stored, still-valid token should be replaced.
pub fn confirm_token_override() -> Result<bool> {
    Confirm::new()
        .with_prompt("Existing token seems to be valid. Override it?")
        .default(false)
        .interact()
        .map_err(|_| ClockidupError::UserCancelled)
}

/// Ask for the Clockify API token with hidden input.
pub fn prompt_token() -> Result<String> {
    Password::new()
        .with_prompt("Clockify API token")
        .validate_with(|input: &String| {
            if input.is_empty() {
                Err("the token cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact()
        .map_err(|_| ClockidupError::UserCancelled)
}

/// Let the user pick one of their workspaces by name.
pub fn prompt_workspace(workspaces: &[Workspace]) -> Result<String> {
    let items: Vec<&str> = workspaces.iter().map(|w| w.name.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Select a workspace")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|_| ClockidupError::UserCancelled)?;

    Ok(workspaces[selection].name.clone())
}
