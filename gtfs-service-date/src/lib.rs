//! finds a deterministic reference date for a GTFS archive: the earliest
//! service date in calendar.txt (or, failing that, the earliest added date in
//! calendar_dates.txt), stepped forward a fixed number of days.
pub mod app;
pub mod service_date;
