/// Utilities for date formatting
///
/// Dates are shown UK style, DD/MM/YYYY.
use chrono::NaiveDate;

/// Format a date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Missing dates render as a dash
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_iso_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => date_str.to_string(),
    }
}

/// Human wording of a day offset from today
/// Example: 3 -> "in 3 days", -1 -> "1 day overdue"
pub fn describe_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d > 1 => format!("in {} days", d),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15/03/2024");
        assert_eq!(format_date_opt(Some(d)), "15/03/2024");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_iso_date("2024-12-31T23:59:59Z"), "31/12/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_iso_date("invalid"), "invalid");
        assert_eq!(format_iso_date("2024-02-30"), "2024-02-30");
    }

    #[test]
    fn test_describe_days() {
        assert_eq!(describe_days(0), "today");
        assert_eq!(describe_days(1), "tomorrow");
        assert_eq!(describe_days(15), "in 15 days");
        assert_eq!(describe_days(-1), "1 day overdue");
        assert_eq!(describe_days(-4), "4 days overdue");
    }
}
