use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Short weekday name ("Mon") of an ISO date; empty for empty or invalid input.
pub fn weekday_name(s: &str) -> String {
    parse_date(s)
        .map(|d| d.format("%a").to_string())
        .unwrap_or_default()
}
