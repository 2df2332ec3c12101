use thiserror::Error;
use time::Date;
use time::macros::format_description;

use std::fmt::Display;

const DEGREE_CELSIUS: &str = "\u{00B0}C";

/// Convert a temperature from Fahrenheit to Celsius, rounded to one decimal place (half away from
/// zero).
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    let celsius = (fahrenheit - 32f64) / 1.8;
    (celsius * 10f64).round() / 10f64
}

/// Append the degrees Celsius suffix.  The value is used as-is, so the caller controls precision.
pub fn format_temperature<T: Display>(value: T) -> String {
    format!("{value}{DEGREE_CELSIUS}")
}

/// Render an ISO date (YYYY-MM-DD) like "Tuesday 06 July 2021"
pub fn format_date(iso_date: &str) -> Result<String, DateParseError> {
    let date = Date::parse(iso_date, &format_description!("[year]-[month]-[day]")).map_err(
        |source| DateParseError {
            input: iso_date.to_string(),
            source,
        },
    )?;
    Ok(date
        .format(&format_description!(
            "[weekday repr:long] [day padding:zero] [month repr:long] [year]"
        ))
        .expect("Unable to format date, a calendar date has every component of the format"))
}

#[derive(Debug, Error)]
#[error("Invalid ISO date {input:?}: {source}")]
pub struct DateParseError {
    pub input: String,
    #[source]
    pub source: time::error::Parse,
}
