use crate::entries::DayEntry;
use chrono::{DateTime, Duration, TimeZone};

/// Formats a duration as decimal hours with one digit of precision,
/// stripping the leading zero to distinguish small amounts from larger
/// ones:
///
/// ```text
/// 0.5  -> ".5"
/// 0.98 -> "1.0"
/// 1.86 -> "1.9"
/// ```
pub fn format_hours(duration: Duration) -> String {
    let hours = duration.num_seconds() as f64 / 3600.0;
    let formatted = format!("{:.1}", hours);
    match formatted.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => formatted,
    }
}

/// One standup line: `- [<hours>] <project>: <task>: <description>`, with
/// the project and task segments left out when empty.
pub fn format_entry(entry: &DayEntry) -> String {
    let mut text = entry.description.clone();
    if !entry.task.is_empty() {
        text = format!("{}: {}", entry.task, text);
    }
    if !entry.project.is_empty() {
        text = format!("{}: {}", entry.project, text);
    }

    format!("- [{}] {}", format_hours(entry.duration), text)
}

/// The report heading: the weekday name when the day is recent enough to
/// be unambiguous, the full date otherwise.
pub fn day_heading<Tz: TimeZone>(day: DateTime<Tz>, now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if day > now - Duration::days(6) {
        day.format("%A").to_string()
    } else {
        day.format("%Y-%m-%d").to_string()
    }
}

/// Renders the merged entries most-recently-started first.
pub fn render(entries: &[DayEntry]) -> Vec<String> {
    entries.iter().rev().map(format_entry).collect()
}
