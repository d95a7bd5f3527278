use std::collections::HashMap;
use std::io::{Read, Seek};

use csv::{ReaderBuilder, StringRecord};
use zip::ZipArchive;

use super::ServiceDateError;

const UTF8_BOM: char = '\u{feff}';

/// a header-indexed GTFS table read from a single archive entry.
#[derive(Debug)]
pub struct GtfsTable {
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

/// a view of one row in a [`GtfsTable`] with field access by column name.
#[derive(Debug, Clone, Copy)]
pub struct GtfsRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> GtfsRow<'a> {
    /// value of the named field. missing when the column is not in the header
    /// or the row is shorter than the header.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        let record = self.record;
        self.columns.get(field).and_then(|idx| record.get(*idx))
    }
}

impl GtfsTable {
    /// true if the archive has an entry with exactly this name at its root.
    pub fn has_entry<R: Read + Seek>(archive: &ZipArchive<R>, entry: &str) -> bool {
        archive.file_names().any(|name| name == entry)
    }

    /// reads the entry as UTF-8 text and parses it as a comma-delimited table
    /// whose first line holds the column names. returns None if the entry is
    /// not in the archive.
    pub fn read_entry<R: Read + Seek>(
        archive: &mut ZipArchive<R>,
        entry: &str,
    ) -> Result<Option<GtfsTable>, ServiceDateError> {
        if !GtfsTable::has_entry(archive, entry) {
            return Ok(None);
        }
        let mut file = archive
            .by_name(entry)
            .map_err(|e| ServiceDateError::EntryReadError {
                entry: entry.to_string(),
                source: e.into(),
            })?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|source| ServiceDateError::EntryReadError {
                entry: entry.to_string(),
                source,
            })?;
        GtfsTable::from_csv_str(entry, &text).map(Some)
    }

    pub fn from_csv_str(entry: &str, text: &str) -> Result<GtfsTable, ServiceDateError> {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let to_csv_error = |source| ServiceDateError::CsvError {
            entry: entry.to_string(),
            source,
        };

        // a repeated column name resolves to its last occurrence
        let columns = reader
            .headers()
            .map_err(to_csv_error)?
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect::<HashMap<_, _>>();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_csv_error)?;

        Ok(GtfsTable { columns, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = GtfsRow<'_>> {
        self.records.iter().map(|record| GtfsRow {
            columns: &self.columns,
            record,
        })
    }
}
