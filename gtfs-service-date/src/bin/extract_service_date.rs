//! prints a deterministic service date for a GTFS archive: the earliest date of
//! service plus a fixed offset, formatted YYYY-MM-DD.
use clap::{error::ErrorKind, Parser};
use gtfs_service_date::app::ServiceDateApp;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = match ServiceDateApp::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version requests are not failures
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    match args.run() {
        Ok(service_date) => {
            println!("{service_date}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("service date extraction failed: {e:?}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
