//! Spanish (es-ES) presentation of counters and dates.

use chrono::Datelike;

use crate::model::Timestamp;

/// Shown in place of a value the upstream never sent.
pub const PLACEHOLDER: &str = "-";

const GROUP_SEPARATOR: char = '.';

/// es-ES only groups numbers with at least five integer digits.
const MIN_GROUPED_DIGITS: usize = 5;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Renders a counter with thousands grouping, e.g. `1234567` as `1.234.567`.
pub fn format_count(count: impl Into<Option<u64>>) -> String {
    let Some(count) = count.into() else {
        return PLACEHOLDER.to_string();
    };

    let digits = count.to_string();
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits;
    }

    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            output.push(GROUP_SEPARATOR);
        }
        output.push(digit);
    }

    output
}

/// Renders the calendar date of a timestamp in long form,
/// e.g. `15 de marzo de 2024`.
pub fn format_date(timestamp: Option<&Timestamp>) -> String {
    let Some(timestamp) = timestamp else {
        return PLACEHOLDER.to_string();
    };

    let date = timestamp.date();
    let month = MONTHS[date.month0() as usize];

    format!("{} de {} de {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn four_digits_stay_ungrouped() {
        assert_eq!(format_count(1000), "1000");
        assert_eq!(format_count(9999), "9999");
    }

    #[test]
    fn group_by_thousands() {
        assert_eq!(format_count(12345), "12.345");
        assert_eq!(format_count(100000), "100.000");
        assert_eq!(format_count(1234567), "1.234.567");
        assert_eq!(format_count(u64::MAX), "18.446.744.073.709.551.615");
    }

    #[test]
    fn missing_count_is_placeholder() {
        assert_eq!(format_count(None), PLACEHOLDER);
    }

    #[test]
    fn long_form_spanish_date() {
        let timestamp: Timestamp = "2024-03-15".parse().unwrap();
        assert_eq!(format_date(Some(&timestamp)), "15 de marzo de 2024");
    }

    #[test]
    fn date_uses_reported_offset() {
        let timestamp: Timestamp = "2023-12-31T23:59:59-03:00".parse().unwrap();
        assert_eq!(format_date(Some(&timestamp)), "31 de diciembre de 2023");
    }

    #[test]
    fn missing_date_is_placeholder() {
        assert_eq!(format_date(None), PLACEHOLDER);
    }
}
