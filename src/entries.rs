use crate::clockify::ClockifyApi;
use crate::error::{ClockidupError, Result};
use crate::models::Workspace;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use std::collections::HashMap;

/// A day's worth of work ready for display: names instead of identifiers,
/// and a duration instead of start and end dates.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub project: String,
    pub task: String,
    pub description: String,
    pub duration: Duration,
    pub billable: bool,
}

/// Fetches the time entries recorded on `day` in the workspace named
/// `workspace_name` and resolves their project and task names.
///
/// The day's window runs from 00:00:00 to 23:59:59 in the day's own
/// timezone. Entries whose timer is still running have no end date; their
/// duration is estimated against `now()` instead. One extra request is made
/// per entry that references a task, since the API has no batch task
/// endpoint.
pub fn entries_for_day<C, Tz, F>(
    client: &C,
    now: F,
    workspace_name: &str,
    day: DateTime<Tz>,
) -> Result<Vec<DayEntry>>
where
    C: ClockifyApi + ?Sized,
    Tz: TimeZone,
    F: Fn() -> DateTime<Utc>,
{
    let tz = day.timezone();
    let start = tz
        .with_ymd_and_hms(day.year(), day.month(), day.day(), 0, 0, 0)
        .earliest()
        .ok_or_else(|| ClockidupError::InvalidDate(day.date_naive().to_string()))?;
    let end = tz
        .with_ymd_and_hms(day.year(), day.month(), day.day(), 23, 59, 59)
        .latest()
        .ok_or_else(|| ClockidupError::InvalidDate(day.date_naive().to_string()))?;

    let workspaces = client.workspaces()?;
    if workspaces.is_empty() {
        return Err(ClockidupError::NoWorkspaces);
    }

    let workspace = find_workspace(&workspaces, workspace_name)
        .ok_or_else(|| ClockidupError::WorkspaceNotFound(workspace_name.to_string()))?;
    let user_id = workspace
        .memberships
        .first()
        .map(|m| m.user_id.clone())
        .ok_or_else(|| ClockidupError::NoMembership(workspace.name.clone()))?;

    let time_entries = client.time_entries(
        &workspace.id,
        &user_id,
        start.with_timezone(&Utc),
        end.with_timezone(&Utc),
    )?;

    let projects = client.projects(&workspace.id)?;
    let project_names: HashMap<&str, &str> = projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut day_entries = Vec::with_capacity(time_entries.len());
    for entry in &time_entries {
        let project = match entry.project_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => project_names
                .get(id)
                .map(|name| name.to_string())
                .ok_or_else(|| ClockidupError::UnknownProject(id.to_string()))?,
            None => String::new(),
        };

        let task = match entry.task_id.as_deref().filter(|id| !id.is_empty()) {
            Some(task_id) => {
                let project_id = entry.project_id.as_deref().unwrap_or_default();
                let task = client
                    .task(&entry.workspace_id, project_id, task_id)
                    .map_err(|err| ClockidupError::TaskLookup {
                        project: project.clone(),
                        description: entry.description.clone(),
                        source: Box::new(err),
                    })?;
                task.name
            }
            None => String::new(),
        };

        // A still-ticking entry has no end date; estimate how long it has
        // been going on for.
        let duration = match entry.time_interval.end {
            Some(end) => end - entry.time_interval.start,
            None => now() - entry.time_interval.start,
        };

        day_entries.push(DayEntry {
            project,
            task,
            description: entry.description.clone(),
            duration,
            billable: entry.billable,
        });
    }

    Ok(day_entries)
}

/// Exact, case-sensitive match on the workspace name. An empty name never
/// matches: a workspace must be selected during login or with the select
/// subcommand.
pub fn find_workspace<'a>(workspaces: &'a [Workspace], name: &str) -> Option<&'a Workspace> {
    if name.is_empty() {
        return None;
    }

    workspaces.iter().find(|w| w.name == name)
}

/// Leaves out the non-billable entries, preserving relative order.
pub fn filter_billable(entries: Vec<DayEntry>) -> Vec<DayEntry> {
    entries.into_iter().filter(|e| e.billable).collect()
}

/// Merges similar time entries by summing up their durations. Similar
/// entries have the same project, task and description simultaneously. For
/// example, given the following time entries:
///
/// | Project   | Task   | Description                | Duration |
/// |-----------|--------|----------------------------|----------|
/// |           |        | "Review my emails"         | 1h       |
/// | project-2 |        | "Review PR"                | 40min    | <- merge 1
/// | project-1 |        | "Standup"                  | 30min    |
/// | project-2 |        | "Review PR"                | 10min    | <- merge 1
/// | project-1 | task-1 | "Deal with unit-testing"   | 30min    | <- merge 2
/// | project-1 | task-1 | "Deal with unit-testing"   | 1h30     | <- merge 2
///
/// the two pairs collapse into single entries of 50min and 2h. The order of
/// the merged entries corresponds to the order of first appearance of the
/// similar entries; the billable flag and every other display field come
/// from the first occurrence.
pub fn merge_similar(entries: Vec<DayEntry>) -> Vec<DayEntry> {
    let mut seen: HashMap<(String, String, String), usize> = HashMap::new();
    let mut merged: Vec<DayEntry> = Vec::new();

    for entry in entries {
        let key = (
            entry.project.clone(),
            entry.task.clone(),
            entry.description.clone(),
        );
        match seen.get(&key) {
            Some(&i) => merged[i].duration = merged[i].duration + entry.duration,
            None => {
                seen.insert(key, merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}
