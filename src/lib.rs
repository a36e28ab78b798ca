//! `os_coord` converts GPS-style WGS84 positions into Ordnance Survey National
//! Grid references for Great Britain and Ireland, and back again.
//!
//! The conversions follow "A Guide to Coordinate Systems in Great Britain"
//! (section 6 and appendix C) and are built from five stages, each exposed as a
//! plain function:
//!
//! 1. geographic ↔ cartesian on an ellipsoid ([`lat_lon_to_cartesian`], [`cartesian_to_lat_lon`]);
//! 2. a seven-parameter Helmert datum shift ([`helmert_transform`], [`helmert_invert`]);
//! 3. the transverse Mercator projection ([`lat_lon_to_tm_eas_nor`], [`tm_eas_nor_to_lat_lon`]);
//! 4. lettered 100 km grid squares ([`eas_nor_to_grid_ref`], [`grid_ref_to_eas_nor`]).
//!
//! [`GridSystem`] chains them for the common case, with ready-made systems for the
//! [National Grid](OSGB36_NATIONAL_GRID) and the [Irish National Grid](IRISH_NATIONAL_GRID).
//! Ellipsoids, datum shifts, projections and grids for both are in [`data`].
//!
//! Units matter: [`LatLon`] holds **radians**, while [`TmProjection`] holds its
//! true origin in **degrees**. Helmert rotations are in seconds of arc and the
//! scale in parts per million. Heights are metres throughout.
//!
//! All types are generic over the coordinate type (see [`CoordinateType`]) and
//! default to `f64`.
//!
//! # Example
//!
//! ```
//! use os_coord::{LatLon, OSGB36_NATIONAL_GRID};
//!
//! let gps = LatLon::from_degrees(52.65757, 1.7179216, 24.7);
//! let grid_ref = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
//! assert_eq!(grid_ref.to_string(), "TG 51539 13138");
//!
//! let back = OSGB36_NATIONAL_GRID.from_grid_ref(&grid_ref).unwrap();
//! assert!((back.lat_degrees() - 52.65757).abs() < 1e-5);
//! ```
//!
//! # Features
//!
//! `geo-types` (enabled by default) adds `From` conversions between the
//! coordinate records and [`geo-types`](https://docs.rs/geo-types) points.

mod coord;
pub mod data;
mod ellipsoid;
mod error;
#[cfg(feature = "geo-types")]
mod geo_types;
mod grid;
mod helmert;
mod params;
mod transform;
mod transverse_mercator;

/// Upper bound on the passes made by the iterative conversions before they
/// report [`Error::NotConverged`].
pub const MAX_ITERATIONS: usize = 100;

pub use crate::coord::{
    Cartesian, CoordinateType, EasNor, LatLon, arc_seconds_to_rad, deg_to_rad, pi, rad_to_deg,
};
pub use crate::ellipsoid::{CART_TO_LAT_LON_PRECISION, cartesian_to_lat_lon, lat_lon_to_cartesian};
pub use crate::error::Error;
pub use crate::grid::{GridCode, GridRef, eas_nor_to_grid_ref, grid_ref_to_eas_nor};
pub use crate::helmert::{helmert_invert, helmert_transform};
pub use crate::params::{Ellipsoid, Grid, Helmert, TmProjection};
pub use crate::transform::{GridSystem, IRISH_NATIONAL_GRID, OSGB36_NATIONAL_GRID};
pub use crate::transverse_mercator::{
    EAS_NOR_TO_LAT_LON_PRECISION, lat_lon_to_tm_eas_nor, tm_eas_nor_to_lat_lon,
};
