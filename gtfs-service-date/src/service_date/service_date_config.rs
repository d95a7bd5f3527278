use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use config::{Config, FileFormat};
use serde::Deserialize;

use super::{date_codec, ServiceDateError};

/// days added to the earliest service date so the result lands away from the
/// first (often partial) week of a feed.
pub const DEFAULT_OFFSET_DAYS: u64 = 6;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceDateConfig {
    pub offset_days: u64,
    /// chrono format string used when printing the service date
    pub output_format: String,
}

impl Default for ServiceDateConfig {
    fn default() -> Self {
        Self {
            offset_days: DEFAULT_OFFSET_DAYS,
            output_format: String::from(date_codec::SERVICE_DATE_FORMAT),
        }
    }
}

impl ServiceDateConfig {
    /// reads a TOML configuration file. keys missing from the file keep their
    /// default values.
    pub fn from_file(filepath: &Path) -> Result<ServiceDateConfig, ServiceDateError> {
        let filepath_str = filepath.to_string_lossy();
        let source = config::File::new(&filepath_str, FileFormat::Toml);
        let config = Config::builder().add_source(source).build().map_err(|e| {
            ServiceDateError::ConfigReadError {
                msg: format!("failed reading '{filepath_str}'"),
                source: e,
            }
        })?;
        config
            .try_deserialize::<ServiceDateConfig>()
            .map_err(|e| ServiceDateError::ConfigReadError {
                msg: format!("failed deserializing '{filepath_str}'"),
                source: e,
            })
    }

    pub fn with_offset_days(self, offset_days: Option<u64>) -> ServiceDateConfig {
        match offset_days {
            Some(offset_days) => ServiceDateConfig {
                offset_days,
                ..self
            },
            None => self,
        }
    }

    /// renders a date with the configured output format. the format is checked
    /// up front since chrono reports a bad format string only while writing.
    pub fn format_date(&self, date: &NaiveDate) -> Result<String, ServiceDateError> {
        let invalid = StrftimeItems::new(&self.output_format).any(|item| item == Item::Error);
        if invalid {
            return Err(ServiceDateError::InvalidOutputFormat(
                self.output_format.clone(),
            ));
        }
        Ok(date.format(&self.output_format).to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ServiceDateConfig, DEFAULT_OFFSET_DAYS};
    use crate::service_date::ServiceDateError;
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn test_default_matches_fixed_behavior() {
        let config = ServiceDateConfig::default();
        assert_eq!(config.offset_days, DEFAULT_OFFSET_DAYS);
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(config.format_date(&date).unwrap(), "2024-01-07");
    }

    #[test]
    fn test_from_file_partial_keeps_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "offset_days = 0").expect("write config");
        let config = ServiceDateConfig::from_file(file.path()).expect("should read config");
        assert_eq!(config.offset_days, 0);
        assert_eq!(config.output_format, "%Y-%m-%d");
    }

    #[test]
    fn test_from_file_custom_format() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "offset_days = 1\noutput_format = \"%Y%m%d\"").expect("write config");
        let config = ServiceDateConfig::from_file(file.path()).expect("should read config");
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(config.format_date(&date).unwrap(), "20240307");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = ServiceDateConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(ServiceDateError::ConfigReadError { .. })
        ));
    }

    #[test]
    fn test_invalid_output_format() {
        let config = ServiceDateConfig {
            output_format: String::from("%Y-%Q"),
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(matches!(
            config.format_date(&date),
            Err(ServiceDateError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_offset_override() {
        let config = ServiceDateConfig::default().with_offset_days(Some(2));
        assert_eq!(config.offset_days, 2);
        let config = config.with_offset_days(None);
        assert_eq!(config.offset_days, 2);
    }
}
