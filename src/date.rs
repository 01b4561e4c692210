use crate::error::{ClockidupError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Weekday};

/// Parses the DAY argument into midnight of the target day, in `now`'s
/// timezone. Accepted forms:
///
/// ```text
/// today
/// yesterday
/// wednesday
/// last tuesday
/// 2 days ago
/// three days ago
/// 2021-01-28
/// ```
///
/// Weekday names resolve to the most recent such weekday, today included;
/// `last <weekday>` resolves to the most recent strictly-past occurrence,
/// so it differs from the bare name only when that name is today's weekday.
pub fn parse_day<Tz: TimeZone>(input: &str, now: DateTime<Tz>) -> Result<DateTime<Tz>> {
    let normalized = input.trim().to_lowercase();

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return now
            .timezone()
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest()
            .ok_or_else(|| ClockidupError::InvalidDate(input.to_string()));
    }

    let days_back = match normalized.as_str() {
        "today" => Some(0),
        "yesterday" => Some(1),
        other => weekday_days_back(other, now.weekday()).or_else(|| days_ago(other)),
    };

    match days_back {
        Some(n) => midnight(now - Duration::days(n)),
        None => Err(ClockidupError::InvalidDate(input.to_string())),
    }
}

fn midnight<Tz: TimeZone>(moment: DateTime<Tz>) -> Result<DateTime<Tz>> {
    moment
        .timezone()
        .with_ymd_and_hms(moment.year(), moment.month(), moment.day(), 0, 0, 0)
        .earliest()
        .ok_or_else(|| ClockidupError::InvalidDate(moment.date_naive().to_string()))
}

fn weekday_days_back(input: &str, today: Weekday) -> Option<i64> {
    let (name, last) = match input.strip_prefix("last ") {
        Some(rest) => (rest, true),
        None => (input, false),
    };

    let target: Weekday = name.parse().ok()?;
    let mut back = (today.num_days_from_monday() as i64
        - target.num_days_from_monday() as i64)
        .rem_euclid(7);
    if last && back == 0 {
        back = 7;
    }

    Some(back)
}

fn days_ago(input: &str) -> Option<i64> {
    const WORDS: [&str; 10] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];

    let count = input
        .strip_suffix(" days ago")
        .or_else(|| input.strip_suffix(" day ago"))?;

    if let Ok(n) = count.parse::<i64>() {
        return (n >= 0).then_some(n);
    }

    WORDS.iter().position(|w| *w == count).map(|i| i as i64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // 2021-07-03 is a Saturday.
    fn now() -> DateTime<Utc> {
        "2021-07-03T14:00:00Z".parse().unwrap()
    }

    fn day(s: &str) -> DateTime<Utc> {
        format!("{}T00:00:00Z", s).parse().unwrap()
    }

    #[test]
    fn parses_today_and_yesterday() {
        assert_eq!(parse_day("today", now()).unwrap(), day("2021-07-03"));
        assert_eq!(parse_day("yesterday", now()).unwrap(), day("2021-07-02"));
    }

    #[test]
    fn is_case_and_whitespace_insensitive() {
        assert_eq!(parse_day(" Today ", now()).unwrap(), day("2021-07-03"));
        assert_eq!(parse_day("YESTERDAY", now()).unwrap(), day("2021-07-02"));
    }

    #[test]
    fn parses_weekday_names_into_the_past() {
        assert_eq!(parse_day("friday", now()).unwrap(), day("2021-07-02"));
        assert_eq!(parse_day("sunday", now()).unwrap(), day("2021-06-27"));
        assert_eq!(parse_day("monday", now()).unwrap(), day("2021-06-28"));
    }

    #[test]
    fn todays_weekday_name_means_today() {
        assert_eq!(parse_day("saturday", now()).unwrap(), day("2021-07-03"));
    }

    #[test]
    fn last_weekday_is_the_most_recent_strictly_past_occurrence() {
        // On Saturday, "last saturday" skips today; "last friday" is the
        // same day as plain "friday".
        assert_eq!(parse_day("last saturday", now()).unwrap(), day("2021-06-26"));
        assert_eq!(parse_day("last friday", now()).unwrap(), day("2021-07-02"));
        assert_eq!(
            parse_day("last friday", now()).unwrap(),
            parse_day("friday", now()).unwrap()
        );
    }

    #[test]
    fn parses_numeric_days_ago() {
        assert_eq!(parse_day("2 days ago", now()).unwrap(), day("2021-07-01"));
        assert_eq!(parse_day("1 day ago", now()).unwrap(), day("2021-07-02"));
        assert_eq!(parse_day("0 days ago", now()).unwrap(), day("2021-07-03"));
    }

    #[test]
    fn parses_spelled_out_days_ago() {
        assert_eq!(parse_day("three days ago", now()).unwrap(), day("2021-06-30"));
        assert_eq!(parse_day("one day ago", now()).unwrap(), day("2021-07-02"));
        assert_eq!(parse_day("ten days ago", now()).unwrap(), day("2021-06-23"));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_day("2021-01-28", now()).unwrap(), day("2021-01-28"));
    }

    #[test]
    fn rejects_everything_else() {
        for input in [
            "",
            "not-a-date",
            "2021-13-01",
            "tomorrow",
            "-3 days ago",
            "eleven days ago",
            "days ago",
        ] {
            assert!(
                matches!(parse_day(input, now()), Err(ClockidupError::InvalidDate(_))),
                "expected InvalidDate for {:?}",
                input
            );
        }
    }
}
