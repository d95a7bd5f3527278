use crate::service_date::{self, ServiceDateConfig, ServiceDateError};
use clap::Parser;
use std::path::PathBuf;

/// command line tool for picking a deterministic service date from a GTFS archive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ServiceDateApp {
    /// a GTFS archive (.zip) containing calendar.txt and/or calendar_dates.txt
    pub gtfs_archive: PathBuf,
    /// optional TOML file with `offset_days` and `output_format` keys
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// days added to the earliest service date, overrides the configuration file
    #[arg(long)]
    pub offset_days: Option<u64>,
}

impl ServiceDateApp {
    pub fn config(&self) -> Result<ServiceDateConfig, ServiceDateError> {
        let config = match &self.config {
            Some(filepath) => ServiceDateConfig::from_file(filepath)?,
            None => ServiceDateConfig::default(),
        };
        Ok(config.with_offset_days(self.offset_days))
    }

    /// runs the extraction and returns the formatted service date.
    pub fn run(&self) -> Result<String, ServiceDateError> {
        let config = self.config()?;
        let date = service_date::extract_service_date(&self.gtfs_archive, &config)?;
        config.format_date(&date)
    }
}

#[cfg(test)]
mod test {
    use super::ServiceDateApp;
    use clap::Parser;

    #[test]
    fn test_single_positional_argument() {
        let app = ServiceDateApp::try_parse_from(["extract_service_date", "feed.zip"])
            .expect("should parse");
        assert_eq!(app.gtfs_archive.to_str(), Some("feed.zip"));
        assert_eq!(app.offset_days, None);
        let config = app.config().expect("default config");
        assert_eq!(config.offset_days, 6);
    }

    #[test]
    fn test_missing_positional_argument() {
        assert!(ServiceDateApp::try_parse_from(["extract_service_date"]).is_err());
    }

    #[test]
    fn test_extra_positional_argument() {
        let result = ServiceDateApp::try_parse_from(["extract_service_date", "a.zip", "b.zip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hyphen_leading_path_needs_separator() {
        assert!(ServiceDateApp::try_parse_from(["extract_service_date", "-feed.zip"]).is_err());
        let app = ServiceDateApp::try_parse_from(["extract_service_date", "--", "-feed.zip"])
            .expect("should parse");
        assert_eq!(app.gtfs_archive.to_str(), Some("-feed.zip"));
    }

    #[test]
    fn test_offset_days_flag() {
        let app = ServiceDateApp::try_parse_from([
            "extract_service_date",
            "feed.zip",
            "--offset-days",
            "3",
        ])
        .expect("should parse");
        assert_eq!(app.config().expect("config").offset_days, 3);
    }
}
