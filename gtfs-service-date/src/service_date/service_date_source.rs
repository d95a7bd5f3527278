use std::fmt::Display;

use super::{gtfs_table::GtfsRow, GtfsTable};

/// exception_type value for "service added on this date" in calendar_dates.txt.
pub const SERVICE_ADDED: &str = "1";

/// the GTFS tables a service date can be read from, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDateSource {
    /// calendar.txt, using the start_date of each service.
    Calendar,
    /// calendar_dates.txt, using dates where service was added.
    CalendarDates,
}

impl ServiceDateSource {
    pub const PREFERENCE_ORDER: [ServiceDateSource; 2] =
        [ServiceDateSource::Calendar, ServiceDateSource::CalendarDates];

    pub fn entry_name(&self) -> &'static str {
        match self {
            ServiceDateSource::Calendar => "calendar.txt",
            ServiceDateSource::CalendarDates => "calendar_dates.txt",
        }
    }

    /// the raw YYYYMMDD date this row contributes, if it qualifies.
    pub fn qualifying_date<'a>(&self, row: &GtfsRow<'a>) -> Option<&'a str> {
        match self {
            ServiceDateSource::Calendar => row.get("start_date").filter(|d| !d.is_empty()),
            ServiceDateSource::CalendarDates => match row.get("exception_type") {
                Some(SERVICE_ADDED) => row.get("date"),
                _ => None,
            },
        }
    }

    /// earliest qualifying raw date of the table. GTFS dates are fixed-width
    /// YYYYMMDD so the lexicographic minimum is also the chronological one.
    pub fn earliest_date<'a>(&self, table: &'a GtfsTable) -> Option<&'a str> {
        table.rows().filter_map(|row| self.qualifying_date(&row)).min()
    }
}

impl Display for ServiceDateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entry_name())
    }
}
