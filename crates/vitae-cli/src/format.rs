//! Display helpers for the loosely formatted date strings the portfolio
//! data uses ("2019.09", "2021_XX", "Present", ...).

use chrono::NaiveDate;

use vitae_core::models::Timeframe;

/// End-date markers meaning "still running".
const ONGOING_KEYWORDS: [&str; 4] = ["present", "ongoing", "current", ""];

/// Whether an end date marks a still-running engagement.
pub fn is_ongoing(end_date: Option<&str>) -> bool {
    let normalized = end_date.unwrap_or("").trim().to_lowercase();
    ONGOING_KEYWORDS.contains(&normalized.as_str())
}

/// Parse an author-supplied date string. Placeholder month/day segments
/// (`_XX`) are dropped; missing segments default to the start of the period.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.replace("_XX", "");
    let cleaned = cleaned.trim().trim_matches('.').replace('.', "-");

    if let Ok(date) = NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d") {
        return Some(date);
    }
    // Year-month only: anchor to the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", cleaned), "%Y-%m-%d") {
        return Some(date);
    }
    // Bare year: anchor to January 1st
    if let Ok(year) = cleaned.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// Duration of a role for display. Finished roles keep their authored
/// duration string; ongoing roles (and roles without one) get a duration
/// derived from the dates, measured up to `today`.
pub fn role_duration(timeframe: &Timeframe, today: NaiveDate) -> Option<String> {
    let start = timeframe.start_date.as_deref();
    let end = timeframe.end_date.as_deref();
    let ongoing = is_ongoing(end);

    if let Some(existing) = timeframe.duration.as_deref() {
        if !ongoing && !existing.trim().is_empty() {
            return Some(existing.to_string());
        }
    }

    let start_date = parse_loose_date(start?)?;
    let end_date = if ongoing {
        today
    } else {
        parse_loose_date(end.unwrap_or(""))?
    };

    let days = (end_date - start_date).num_days().unsigned_abs();
    let years = days / 365;
    let months = (days % 365) / 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} yr{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{} mo{}", months, if months > 1 { "s" } else { "" }));
    }

    if parts.is_empty() {
        Some("Less than a month".to_string())
    } else {
        Some(parts.join(" "))
    }
}

/// "start – end" range for display, with sensible fallbacks.
pub fn date_range(timeframe: &Timeframe) -> String {
    let start = timeframe.start_date.as_deref().unwrap_or("?");
    let end = timeframe.end_date.as_deref().filter(|s| !s.trim().is_empty());
    match end {
        Some(end) => format!("{} – {}", start, end),
        None => format!("{} – Present", start),
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Current date, split out so duration tests are deterministic.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeframe(start: &str, end: &str, duration: Option<&str>) -> Timeframe {
        Timeframe {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            duration: duration.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_ongoing_keywords() {
        assert!(is_ongoing(Some("Present")));
        assert!(is_ongoing(Some("ongoing")));
        assert!(is_ongoing(Some(" Current ")));
        assert!(is_ongoing(Some("")));
        assert!(is_ongoing(None));
        assert!(!is_ongoing(Some("2021.06")));
    }

    #[test]
    fn test_parse_loose_date_formats() {
        assert_eq!(
            parse_loose_date("2019.09"),
            NaiveDate::from_ymd_opt(2019, 9, 1)
        );
        assert_eq!(
            parse_loose_date("2019.09.15"),
            NaiveDate::from_ymd_opt(2019, 9, 15)
        );
        assert_eq!(parse_loose_date("2021_XX"), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(parse_loose_date("2021._XX"), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(parse_loose_date("soon"), None);
    }

    #[test]
    fn test_finished_role_keeps_authored_duration() {
        let tf = timeframe("2019.09", "2021.06", Some("1 yr 10 mos"));
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(role_duration(&tf, today).as_deref(), Some("1 yr 10 mos"));
    }

    #[test]
    fn test_ongoing_role_derives_duration_to_today() {
        let tf = timeframe("2023.08", "Present", Some("stale value"));
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        // 2023-08-01 to 2025-10-01 is about 2 years 2 months.
        assert_eq!(role_duration(&tf, today).as_deref(), Some("2 yrs 2 mos"));
    }

    #[test]
    fn test_very_short_role() {
        let tf = timeframe("2024.03", "2024.03", None);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            role_duration(&tf, today).as_deref(),
            Some("Less than a month")
        );
    }

    #[test]
    fn test_unparseable_dates_give_no_duration() {
        let tf = timeframe("sometime", "Present", None);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(role_duration(&tf, today), None);
    }

    #[test]
    fn test_date_range_fallbacks() {
        assert_eq!(
            date_range(&timeframe("2020", "2021", None)),
            "2020 – 2021"
        );
        let open = Timeframe {
            start_date: Some("2020".to_string()),
            ..Default::default()
        };
        assert_eq!(date_range(&open), "2020 – Present");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }
}
