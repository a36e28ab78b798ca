//! Converts a WGS84 (GPS) position to an Ordnance Survey National Grid reference.
//!
//! ```text
//! $ os_coord 52.65757 1.7179216 24.7
//! TG 51539 13138 (Altitude: -20.0m)
//! ```
//!
//! Set `OS_COORD_LOG=debug` to trace each stage of the conversion.

use env_logger::Env;
use log::{debug, error};
use os_coord::{Error, LatLon, OSGB36_NATIONAL_GRID};
use std::env;
use std::process::ExitCode;

fn parse_args(args: &[String]) -> Option<LatLon> {
    let [_, lat, lon, eh] = args else {
        return None;
    };
    Some(LatLon::from_degrees(
        lat.parse().ok()?,
        lon.parse().ok()?,
        eh.parse().ok()?,
    ))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("OS_COORD_LOG", "warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("os_coord", String::as_str);

    let Some(gps) = parse_args(&args) else {
        eprintln!("{program}: Usage {program} [latitude] [longitude] [ellipsoidal height]");
        return ExitCode::FAILURE;
    };
    debug!("converting {gps:?}");

    match OSGB36_NATIONAL_GRID.to_grid_ref(gps) {
        Ok(grid_ref) => {
            println!("{grid_ref} (Altitude: {:.1}m)", grid_ref.h);
            ExitCode::SUCCESS
        }
        Err(Error::OutOfGrid) => {
            eprintln!("{program}: Coordinate not covered by National Grid");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("conversion failed: {err}");
            ExitCode::FAILURE
        }
    }
}
