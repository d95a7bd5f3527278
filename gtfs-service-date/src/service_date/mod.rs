pub mod date_codec;
mod extractor;
mod gtfs_table;
mod service_date_config;
mod service_date_error;
mod service_date_source;

pub use extractor::{extract_from_archive, extract_service_date};
pub use gtfs_table::{GtfsRow, GtfsTable};
pub use service_date_config::{ServiceDateConfig, DEFAULT_OFFSET_DAYS};
pub use service_date_error::ServiceDateError;
pub use service_date_source::ServiceDateSource;
