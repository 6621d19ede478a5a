//! Due date parsing and formatting helpers.
//!
//! Both functions take `today` explicitly so callers decide which clock applies.

use chrono::{Datelike, Duration, NaiveDate};

/// Parse human-readable due date input.
///
/// Supports:
/// - "today", "tomorrow", "yesterday"
/// - "end of week" / "eow", "end of month" / "eom"
/// - weekday names ("friday", "next monday")
/// - "in 3d", "in 2w" (`None` when the result is out of range)
/// - "YYYY-MM-DD" format
pub fn parse_due_input(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        "end of week" | "eow" => {
            let weekday = today.weekday().num_days_from_monday() as i64;
            return Some(today + Duration::days(6 - weekday));
        }
        "end of month" | "eom" => {
            let (year, month) = if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            };
            let first_of_next = NaiveDate::from_ymd_opt(year, month, 1)?;
            return Some(first_of_next - Duration::days(1));
        }
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(n) = rest.strip_suffix('d') {
            if let Ok(days) = n.trim().parse::<i64>() {
                return Duration::try_days(days).and_then(|d| today.checked_add_signed(d));
            }
        }
        if let Some(n) = rest.strip_suffix('w') {
            if let Ok(weeks) = n.trim().parse::<i64>() {
                return Duration::try_weeks(weeks).and_then(|w| today.checked_add_signed(w));
            }
        }
    }

    let weekdays = [
        ("monday", 0), ("tuesday", 1), ("wednesday", 2), ("thursday", 3),
        ("friday", 4), ("saturday", 5), ("sunday", 6),
        ("mon", 0), ("tue", 1), ("wed", 2), ("thu", 3),
        ("fri", 4), ("sat", 5), ("sun", 6),
    ];
    let (next_week, day) = match s.strip_prefix("next ") {
        Some(rest) => (true, rest),
        None => (false, s.as_str()),
    };
    if let Some(&(_, target)) = weekdays.iter().find(|(name, _)| *name == day) {
        let current = today.weekday().num_days_from_monday() as i64;
        let ahead = (target + 7 - current) % 7;
        let ahead = if next_week { ahead + 7 } else { ahead };
        return Some(today + Duration::days(ahead));
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: NaiveDate, today: NaiveDate) -> String {
    let delta = (due - today).num_days();
    match delta {
        0 => "today".into(),
        1 => "tomorrow".into(),
        d if d > 1 => format!("in {}d", d),
        d => format!("{}d late", -d),
    }
}

/// Short calendar form, e.g. "Nov 5".
pub fn format_due_short(due: NaiveDate) -> String {
    due.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // A Thursday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 6).unwrap()
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_due_input("today", today()), Some(d(11, 6)));
        assert_eq!(parse_due_input(" Tomorrow ", today()), Some(d(11, 7)));
        assert_eq!(parse_due_input("eow", today()), Some(d(11, 9)));
        assert_eq!(parse_due_input("end of month", today()), Some(d(11, 30)));
    }

    #[test]
    fn test_parse_relative() {
        assert_eq!(parse_due_input("in 3d", today()), Some(d(11, 9)));
        assert_eq!(parse_due_input("in 2w", today()), Some(d(11, 20)));
    }

    #[test]
    fn test_parse_relative_out_of_range_is_rejected() {
        assert_eq!(parse_due_input("in 99999999d", today()), None);
        assert_eq!(parse_due_input("in 999999999999999w", today()), None);
        assert_eq!(parse_due_input("in -99999999d", today()), None);
        assert_eq!(parse_due_input("in 9223372036854775807d", today()), None);
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(parse_due_input("thursday", today()), Some(d(11, 6)));
        assert_eq!(parse_due_input("fri", today()), Some(d(11, 7)));
        assert_eq!(parse_due_input("next monday", today()), Some(d(11, 17)));
    }

    #[test]
    fn test_parse_iso_and_garbage() {
        assert_eq!(parse_due_input("2025-12-24", today()), Some(d(12, 24)));
        assert_eq!(parse_due_input("someday", today()), None);
        assert_eq!(parse_due_input("", today()), None);
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_due_relative(d(11, 6), today()), "today");
        assert_eq!(format_due_relative(d(11, 7), today()), "tomorrow");
        assert_eq!(format_due_relative(d(11, 10), today()), "in 4d");
        assert_eq!(format_due_relative(d(11, 1), today()), "5d late");
        assert_eq!(format_due_short(d(11, 5)), "Nov 5");
    }
}
