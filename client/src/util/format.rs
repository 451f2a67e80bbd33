//! Display formatting for dates, percentages, and names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

/// Days before a due date that count as "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Render `2025-03-14` as `Mar 14, 2025`. Unparseable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    parse_iso_date(raw)
        .and_then(|d| d.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
    NoDate,
}

impl DueStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due soon",
            Self::Upcoming => "Upcoming",
            Self::NoDate => "No due date",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "soon",
            Self::Upcoming => "upcoming",
            Self::NoDate => "none",
        }
    }
}

pub fn due_status(due: &str, today: Date) -> DueStatus {
    let Some(due) = parse_iso_date(due) else {
        return DueStatus::NoDate;
    };
    let days_left = (due - today).whole_days();
    if days_left < 0 {
        DueStatus::Overdue
    } else if days_left <= DUE_SOON_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

/// Today's local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .unwrap_or(time::Month::January);
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// CSS modifier for progress and grade bars.
pub fn percent_class(percent: u8) -> &'static str {
    match percent {
        80.. => "high",
        50..=79 => "mid",
        _ => "low",
    }
}

/// Up to two uppercase initials for avatar bubbles.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { format!("1 {singular}") } else { format!("{count} {plural}") }
}
