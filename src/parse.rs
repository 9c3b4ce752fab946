// Boundary input parsing for text-based front ends.
// The core operations only ever see typed values; free-text input from a
// dialog or command line is converted here, with error kinds instead of
// exceptions.

use chrono::NaiveDate;
use thiserror::Error;

/// External date representation used by any text-based caller.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid room number: {0:?}")]
    InvalidRoomNumber(String),

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid date, expected yyyy-mm-dd: {0:?}")]
    InvalidDate(String),
}

pub fn parse_room_number(input: &str) -> Result<u32, ParseError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidRoomNumber(input.to_string()))
}

pub fn parse_price(input: &str) -> Result<f64, ParseError> {
    let price = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidPrice(input.to_string()))?;

    if !price.is_finite() || price < 0.0 {
        return Err(ParseError::InvalidPrice(input.to_string()));
    }

    Ok(price)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_number_with_whitespace() {
        assert_eq!(parse_room_number(" 101 "), Ok(101));
    }

    #[test]
    fn rejects_non_numeric_room_number() {
        assert_eq!(
            parse_room_number("10a"),
            Err(ParseError::InvalidRoomNumber("10a".to_string()))
        );
        assert!(parse_room_number("-3").is_err());
    }

    #[test]
    fn parses_price() {
        assert_eq!(parse_price("80.5"), Ok(80.5));
        assert_eq!(parse_price("0"), Ok(0.0));
    }

    #[test]
    fn rejects_negative_or_malformed_price() {
        assert!(parse_price("-1.0").is_err());
        assert!(parse_price("cheap").is_err());
        assert!(parse_price("NaN").is_err());
    }

    #[test]
    fn parses_and_formats_dates() {
        let date = parse_date("2024-01-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(format_date(date), "2024-01-10");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(
            parse_date("10/01/2024"),
            Err(ParseError::InvalidDate("10/01/2024".to_string()))
        );
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
