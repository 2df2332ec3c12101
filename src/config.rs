use serde::Deserialize;
use thiserror::Error;

use std::fs;
use std::str::FromStr;

/// Which reports to print
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Overview,
    Daily,
    All,
}

impl ReportKind {
    pub fn includes_overview(self) -> bool {
        matches!(self, ReportKind::Overview | ReportKind::All)
    }

    pub fn includes_daily(self) -> bool {
        matches!(self, ReportKind::Daily | ReportKind::All)
    }
}

impl FromStr for ReportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(ReportKind::Overview),
            "daily" => Ok(ReportKind::Daily),
            "all" => Ok(ReportKind::All),
            _ => Err(ConfigError::UnknownReport(s.to_string())),
        }
    }
}

/// Settings read from a JSON config file.  Anything left out falls back to the command line
/// defaults.
#[derive(Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub input_file: Option<String>,
    pub report: Option<ReportKind>,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let conf_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&conf_str)
    }

    pub fn from_json(conf_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(conf_str)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown report {0:?}, expected one of overview, daily, all")]
    UnknownReport(String),
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn should_read_full_config() {
        let conf = Config::from_json(r#"{"input_file": "july.csv", "report": "daily"}"#).unwrap();
        assert_eq!(
            conf,
            Config {
                input_file: Some("july.csv".to_string()),
                report: Some(ReportKind::Daily),
            }
        );
    }

    #[test]
    fn should_default_missing_fields() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn should_reject_unknown_fields() {
        assert!(Config::from_json(r#"{"smoothing_days": 14}"#).is_err());
    }

    #[test]
    fn should_read_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"report": "overview"}"#).unwrap();
        let conf = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf.report, Some(ReportKind::Overview));
        assert_eq!(conf.input_file, None);
    }

    #[test]
    fn should_fail_on_missing_config_file() {
        assert!(matches!(
            Config::from_file("no/such/config.json").unwrap_err(),
            ConfigError::Io { .. }
        ));
    }

    #[test]
    fn should_parse_report_kind() {
        assert_eq!("All".parse::<ReportKind>().unwrap(), ReportKind::All);
        assert!("weekly".parse::<ReportKind>().is_err());
        assert!(ReportKind::All.includes_overview() && ReportKind::All.includes_daily());
        assert!(!ReportKind::Daily.includes_overview());
        assert!(!ReportKind::Overview.includes_daily());
    }
}
