use crate::convert::{DateParseError, fahrenheit_to_celsius, format_date, format_temperature};
use crate::stats::{ValueError, find_max, find_min, mean};
use crate::weather::Row;

use thiserror::Error;

const EMPTY_SUMMARY: &str = "0 Day Overview
  The lowest temperature will be 0.0°C, and will occur on .
  The highest temperature will be 0.0°C, and will occur on .
  The average low this week is 0.0°C.
  The average high this week is 0.0°C.
";

/// Render a Fahrenheit temperature as Celsius with one decimal place
fn celsius(fahrenheit: f64) -> String {
    format_temperature(format!("{:.1}", fahrenheit_to_celsius(fahrenheit)))
}

/// Overview of the whole table: the extremes with the days they occur on, and the average low
/// and high.
pub fn summary(rows: &[Row]) -> Result<String, ReportError> {
    let mins: Vec<i64> = rows.iter().map(|row| row.min).collect();
    let maxes: Vec<i64> = rows.iter().map(|row| row.max).collect();

    let (Some(lowest), Some(highest)) = (find_min(&mins)?, find_max(&maxes)?) else {
        return Ok(EMPTY_SUMMARY.to_string());
    };

    let lowest_date = format_date(&rows[lowest.index].date)?;
    let highest_date = format_date(&rows[highest.index].date)?;

    Ok(format!(
        "{} Day Overview\n  \
         The lowest temperature will be {}, and will occur on {lowest_date}.\n  \
         The highest temperature will be {}, and will occur on {highest_date}.\n  \
         The average low this week is {}.\n  \
         The average high this week is {}.\n",
        rows.len(),
        celsius(lowest.value),
        celsius(highest.value),
        celsius(mean(&mins)?),
        celsius(mean(&maxes)?),
    ))
}

/// One block per row, in file order, with the day's low and high
pub fn daily_summary(rows: &[Row]) -> Result<String, ReportError> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            format_date(&row.date)?,
            celsius(row.min as f64),
            celsius(row.max as f64),
        ));
    }
    Ok(out)
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    DateParseError(#[from] DateParseError),
    #[error(transparent)]
    ValueError(#[from] ValueError),
}
