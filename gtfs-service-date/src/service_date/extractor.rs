use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use chrono::NaiveDate;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{date_codec, GtfsTable, ServiceDateConfig, ServiceDateError, ServiceDateSource};

/// opens the GTFS archive at this path and extracts its service date.
///
/// the archive is held only for the duration of this call and is closed on
/// every return path.
pub fn extract_service_date(
    path: &Path,
    config: &ServiceDateConfig,
) -> Result<NaiveDate, ServiceDateError> {
    let to_archive_error = |source| ServiceDateError::ArchiveReadError {
        path: path.to_string_lossy().to_string(),
        source,
    };
    let file = File::open(path).map_err(|e| to_archive_error(ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(file).map_err(to_archive_error)?;
    log::debug!("opened GTFS archive {path:?} with {} entries", archive.len());
    extract_from_archive(&mut archive, config)
}

/// finds the earliest service date in an open GTFS archive and steps it
/// forward by the configured offset.
///
/// sources are consulted in [`ServiceDateSource::PREFERENCE_ORDER`]. the first
/// source with at least one qualifying date wins; a source that is missing or
/// has no qualifying rows falls through to the next one.
pub fn extract_from_archive<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    config: &ServiceDateConfig,
) -> Result<NaiveDate, ServiceDateError> {
    for source in ServiceDateSource::PREFERENCE_ORDER {
        let table = match GtfsTable::read_entry(archive, source.entry_name())? {
            Some(table) => table,
            None => {
                log::debug!("archive has no {source}");
                continue;
            }
        };
        log::debug!("read {} rows from {source}", table.len());
        match source.earliest_date(&table) {
            Some(earliest) => {
                let date = date_codec::parse_gtfs_date(earliest)?;
                let service_date = date_codec::step_date(date, config.offset_days)?;
                log::info!(
                    "earliest date in {source} is {date}, service date is {service_date} (+{} days)",
                    config.offset_days
                );
                return Ok(service_date);
            }
            None => log::warn!("{source} has no qualifying service dates"),
        }
    }
    Err(ServiceDateError::NoServiceDateFound)
}
