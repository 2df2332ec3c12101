use thiserror::Error;

/// A value that can be read as a temperature for aggregation.
///
/// Text is trimmed and parsed as a float, so columns can be aggregated straight out of a file.
pub trait Reading {
    fn reading(&self) -> Result<f64, ValueError>;
}

macro_rules! numeric_reading {
    ($($t:ty),*) => {
        $(
            impl Reading for $t {
                fn reading(&self) -> Result<f64, ValueError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

numeric_reading!(f64, f32, i64, i32, i16, u32, u16, u8);

impl Reading for str {
    fn reading(&self) -> Result<f64, ValueError> {
        self.trim().parse::<f64>().map_err(|_| ValueError {
            value: self.to_string(),
        })
    }
}

impl Reading for String {
    fn reading(&self) -> Result<f64, ValueError> {
        self.as_str().reading()
    }
}

impl<T: Reading + ?Sized> Reading for &T {
    fn reading(&self) -> Result<f64, ValueError> {
        (**self).reading()
    }
}

/// An extreme value and its position in the series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

/// Arithmetic mean of the values, or 0 if there are none
pub fn mean<T: Reading>(values: &[T]) -> Result<f64, ValueError> {
    if values.is_empty() {
        return Ok(0f64);
    }

    let mut sum = 0f64;
    for value in values {
        sum += value.reading()?;
    }
    Ok(sum / values.len() as f64)
}

/// Smallest value in the series.  When the minimum occurs more than once, the last occurrence wins.
pub fn find_min<T: Reading>(values: &[T]) -> Result<Option<Extremum>, ValueError> {
    find_extremum(values, |candidate, current| candidate <= current)
}

/// Largest value in the series.  When the maximum occurs more than once, the last occurrence wins.
pub fn find_max<T: Reading>(values: &[T]) -> Result<Option<Extremum>, ValueError> {
    find_extremum(values, |candidate, current| candidate >= current)
}

/// Scan left to right, replacing the current extremum whenever `replaces(candidate, current)`
fn find_extremum<T: Reading>(
    values: &[T],
    replaces: impl Fn(f64, f64) -> bool,
) -> Result<Option<Extremum>, ValueError> {
    let mut found: Option<Extremum> = None;
    for (index, value) in values.iter().enumerate() {
        let value = value.reading()?;
        match found {
            Some(current) if !replaces(value, current.value) => {}
            _ => found = Some(Extremum { value, index }),
        }
    }
    Ok(found)
}

#[derive(Debug, Error, PartialEq)]
#[error("Not a number: {value:?}")]
pub struct ValueError {
    pub value: String,
}
