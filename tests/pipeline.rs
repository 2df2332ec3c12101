use weather_summary::report::{daily_summary, summary};
use weather_summary::weather::{Row, load};

use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn should_summarise_csv_file() {
    let file = write_csv("date,min,max\r\n2021-07-05,10,20\r\n\r\n2021-07-06,5.0,25.9\r\n");

    let rows = load(file.path()).unwrap();
    assert_eq!(
        rows,
        vec![Row::new("2021-07-05", 10, 20), Row::new("2021-07-06", 5, 25)]
    );

    assert_eq!(
        summary(&rows).unwrap(),
        "2 Day Overview\n  \
         The lowest temperature will be -15.0°C, and will occur on Tuesday 06 July 2021.\n  \
         The highest temperature will be -3.9°C, and will occur on Tuesday 06 July 2021.\n  \
         The average low this week is -13.6°C.\n  \
         The average high this week is -5.3°C.\n"
    );
    assert_eq!(
        daily_summary(&rows).unwrap(),
        "---- Monday 05 July 2021 ----\n  \
         Minimum Temperature: -12.2°C\n  \
         Maximum Temperature: -6.7°C\n\n\
         ---- Tuesday 06 July 2021 ----\n  \
         Minimum Temperature: -15.0°C\n  \
         Maximum Temperature: -3.9°C\n\n"
    );
}

#[test]
fn should_summarise_header_only_file_as_placeholder() {
    let file = write_csv("date,min,max\n");

    let rows = load(file.path()).unwrap();
    assert!(rows.is_empty());
    assert!(summary(&rows).unwrap().starts_with("0 Day Overview\n"));
    assert_eq!(daily_summary(&rows).unwrap(), "");
}

#[test]
fn should_surface_bad_dates_when_reporting() {
    let file = write_csv("2021-07-05,10,20\n05/07/2021,5,25\n");

    let rows = load(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(summary(&rows).is_err());
    assert!(daily_summary(&rows).is_err());
}
