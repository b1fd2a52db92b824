use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Compact iCalendar timestamp for a (date, time, all-day) triple.
///
/// - all-day: `YYYYMMDD`
/// - otherwise: `YYYYMMDDTHHMM00Z`, with a missing or invalid time read as `00:00`
///
/// Returns `None` when the date cannot be parsed. The date is taken from its
/// UTC calendar fields and never shifted by the local timezone.
pub fn format_timestamp(date: &str, time: &str, all_day: bool) -> Option<String> {
    let date = parse_date(date)?;
    let day = date.format("%Y%m%d");

    if all_day {
        return Some(day.to_string());
    }

    let time = parse_time(time).unwrap_or_default();
    Some(format!("{}T{}00Z", day, time.format("%H%M")))
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_day_uses_date_only() {
        assert_eq!(
            format_timestamp("2024-03-09", "14:30", true),
            Some("20240309".to_string())
        );
    }

    #[test]
    fn test_timed_event() {
        assert_eq!(
            format_timestamp("2024-03-09", "14:30", false),
            Some("20240309T143000Z".to_string())
        );
    }

    #[test]
    fn test_missing_or_invalid_time_defaults_to_midnight() {
        assert_eq!(
            format_timestamp("2024-03-09", "", false),
            Some("20240309T000000Z".to_string())
        );
        assert_eq!(
            format_timestamp("2024-03-09", "25:99", false),
            Some("20240309T000000Z".to_string())
        );
    }

    #[test]
    fn test_invalid_date_is_none() {
        assert_eq!(format_timestamp("not-a-date", "10:00", false), None);
        assert_eq!(format_timestamp("", "10:00", true), None);
        assert_eq!(format_timestamp("2024-02-30", "", true), None);
    }

    #[test]
    fn test_rfc3339_date_uses_utc_calendar_day() {
        // 23:30 at -05:00 is already the next day in UTC
        assert_eq!(
            format_timestamp("2024-12-31T23:30:00-05:00", "", true),
            Some("20250101".to_string())
        );
    }
}
