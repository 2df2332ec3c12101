use csv::StringRecord;
use thiserror::Error;

use std::path::Path;

/// One day of weather data, temperatures in Fahrenheit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The ISO date (YYYY-MM-DD) of the reading, as it appeared in the file
    pub date: String,
    /// The minimum temperature for the day
    pub min: i64,
    /// The maximum temperature for the day
    pub max: i64,
}

impl Row {
    pub fn new(date: &str, min: i64, max: i64) -> Row {
        Row {
            date: date.to_string(),
            min,
            max,
        }
    }
}

/// Rows in the order they appeared in the source file
pub type WeatherTable = Vec<Row>;

const HEADER: [&str; 3] = ["date", "min", "max"];

/// Load a weather table from a CSV file of `date,min,max` records.
///
/// The header row is optional. Blank lines, and lines whose cells are all blank, are skipped.
/// Any other malformed line aborts the whole load.
pub fn load(path: &Path) -> Result<WeatherTable, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: WeatherTable = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(i as u64 + 1, |p| p.line());

        // Only the first physical line may be a header
        if line == 1 && is_header(&record) {
            debug!("Skipping header on line {line}");
            continue;
        }
        if record.iter().all(|cell| cell.trim().is_empty()) {
            debug!("Skipping blank line {line}");
            continue;
        }

        rows.push(parse_row(&record, line)?);
    }

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn is_header(record: &StringRecord) -> bool {
    record.len() == HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(cell, expected)| cell.trim().to_lowercase() == expected)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<Row, ParseError> {
    if record.len() < 3 {
        return Err(ParseError::MissingFields {
            line,
            found: record.len(),
        });
    }

    let date = record[0].trim();
    if date.is_empty() {
        return Err(ParseError::MissingDate { line });
    }

    Ok(Row {
        date: date.to_string(),
        min: parse_temp(&record[1], line)?,
        max: parse_temp(&record[2], line)?,
    })
}

/// Parse a temperature as an integer, falling back to a decimal truncated toward zero.
///
/// Decimals that don't fit in an `i64` once truncated are rejected rather than saturated.
fn parse_temp(cell: &str, line: u64) -> Result<i64, ParseError> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<i64>() {
        return Ok(value);
    }
    match cell.parse::<f64>() {
        Ok(value) if fits_i64(value.trunc()) => Ok(value.trunc() as i64),
        _ => Err(ParseError::NotANumber {
            line,
            value: cell.to_string(),
        }),
    }
}

fn fits_i64(value: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    value >= i64::MIN as f64 && value < i64::MAX as f64
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error("Line {line}: expected 3 fields but found {found}")]
    MissingFields { line: u64, found: usize },
    #[error("Line {line}: missing date")]
    MissingDate { line: u64 },
    #[error("Line {line}: temperature is not a number: {value:?}")]
    NotANumber { line: u64, value: String },
}
