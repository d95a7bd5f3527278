use chrono::NaiveDate;
use zip::result::ZipError;

#[derive(thiserror::Error, Debug)]
pub enum ServiceDateError {
    #[error("failed to read GTFS archive '{path}': {source}")]
    ArchiveReadError { path: String, source: ZipError },
    #[error("failed reading '{entry}' from GTFS archive: {source}")]
    EntryReadError {
        entry: String,
        source: std::io::Error,
    },
    #[error("failed parsing '{entry}' as CSV: {source}")]
    CsvError { entry: String, source: csv::Error },
    #[error("No valid service dates found in GTFS")]
    NoServiceDateFound,
    #[error("date '{value}' does not match GTFS date format YYYYMMDD")]
    MalformedDateError {
        value: String,
        /// None when the value was rejected for holding a non-digit character
        source: Option<chrono::ParseError>,
    },
    #[error("adding {offset_days} days to {date} overflows the supported date range")]
    DateOverflow { date: NaiveDate, offset_days: u64 },
    #[error("invalid date output format '{0}'")]
    InvalidOutputFormat(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
}
