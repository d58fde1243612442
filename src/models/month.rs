//! Calendar month naming
//!
//! Month names come from a fixed English table so that filtering never
//! depends on the runtime locale.

use chrono::{Datelike, Local, Month, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};

/// Storage format of an expense date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// All months in calendar order
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Long-form English month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Long-form English name of a month
pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.number_from_month() as usize - 1]
}

/// Parse a stored `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Month of a stored date string, or `None` if the date does not parse
pub fn month_of(date: &str) -> Option<Month> {
    parse_date(date).map(|d| MONTHS[d.month0() as usize])
}

/// Month of today's local date
pub fn current_month() -> Month {
    MONTHS[Local::now().date_naive().month0() as usize]
}

/// Today's local date in storage format
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parse a month from user input
///
/// Accepts a full name ("March"), a three-letter abbreviation ("mar"), or a
/// month number ("3"), case-insensitively.
pub fn parse_month(input: &str) -> ExpenseResult<Month> {
    let trimmed = input.trim();

    if let Ok(number) = trimmed.parse::<usize>() {
        return match number {
            1..=12 => Ok(MONTHS[number - 1]),
            _ => Err(ExpenseError::Validation(format!(
                "Month number must be between 1 and 12, got {}",
                number
            ))),
        };
    }

    let lower = trimmed.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
        .map(|index| MONTHS[index])
        .ok_or_else(|| ExpenseError::Validation(format!("Unknown month: {}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_calendar_order() {
        for (index, month) in MONTHS.iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, index + 1);
            assert_eq!(month_name(*month), MONTH_NAMES[index]);
        }
        assert_eq!(month_name(Month::March), "March");
    }

    #[test]
    fn test_month_of_date() {
        assert_eq!(month_of("2024-03-05"), Some(Month::March));
        assert_eq!(month_of("2023-12-31"), Some(Month::December));
        assert_eq!(month_of("2024-01-01"), Some(Month::January));
    }

    #[test]
    fn test_month_of_invalid_date() {
        assert_eq!(month_of(""), None);
        assert_eq!(month_of("not a date"), None);
        assert_eq!(month_of("2024-13-01"), None);
        assert_eq!(month_of("2024-02-30"), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("March").unwrap(), Month::March);
        assert_eq!(parse_month("march").unwrap(), Month::March);
        assert_eq!(parse_month("SEP").unwrap(), Month::September);
        assert_eq!(parse_month("12").unwrap(), Month::December);
        assert!(parse_month("13").is_err());
        assert!(parse_month("0").is_err());
        assert!(parse_month("Marc").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn test_today_round_trips() {
        let today = today();
        assert!(parse_date(&today).is_some());
        assert_eq!(month_of(&today), Some(current_month()));
    }
}
