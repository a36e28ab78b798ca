//! Ellipsoids, datum shifts, projections and grids for Great Britain and Ireland.
//!
//! Values are from "A Guide to Coordinate Systems in Great Britain" unless noted.

use crate::params::{Ellipsoid, Grid, Helmert, TmProjection};

pub const AIRY_1830: Ellipsoid = Ellipsoid {
    a: 6_377_563.396,
    b: 6_356_256.910,
};

pub const AIRY_1830_MODIFIED: Ellipsoid = Ellipsoid {
    a: 6_377_340.189,
    b: 6_356_034.447,
};

/// International 1924, also known as Hayford 1909.
pub const INTERNATIONAL_1924: Ellipsoid = Ellipsoid {
    a: 6_378_388.000,
    b: 6_356_911.946,
};

pub const GRS80: Ellipsoid = Ellipsoid {
    a: 6_378_137.000,
    b: 6_356_752.314_140,
};

pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6_378_137.000,
    b: 6_356_752.314_2,
};

/// WGS84 to OSGB36. Produces heights similar to ODN heights.
pub const WGS84_TO_OSGB36: Helmert = Helmert {
    tx: -446.448,
    ty: 125.157,
    tz: -542.060,
    rx: -0.1502,
    ry: -0.2470,
    rz: -0.8421,
    s: 20.4894,
};

/// WGS84 to ED50, from the UK offshore oil and gas guidance notes.
pub const WGS84_TO_ED50: Helmert = Helmert {
    tx: 89.5,
    ty: 93.8,
    tz: 123.1,
    rx: 0.0,
    ry: 0.0,
    rz: 0.156,
    s: -1.2,
};

/// ETRF89 (close to WGS84) to Ireland 1975, as published by the Ordnance Survey of Ireland.
pub const ETRF89_TO_IRL1975: Helmert = Helmert {
    tx: -482.530,
    ty: 130.596,
    tz: -564.557,
    rx: -1.042,
    ry: -0.214,
    rz: -0.631,
    s: -8.150,
};

/// Ordnance Survey National Grid.
pub const TM_NATIONAL_GRID: TmProjection = TmProjection {
    e0: 400_000.0,
    n0: -100_000.0,
    f0: 0.999_601_271_7,
    lat0: 49.0,
    lon0: -2.0,
    ellipsoid: AIRY_1830,
};

/// Irish National Grid.
pub const TM_IRISH_NATIONAL_GRID: TmProjection = TmProjection {
    e0: 200_000.0,
    n0: 250_000.0,
    f0: 1.000_035,
    lat0: 53.5,
    lon0: -8.0,
    ellipsoid: AIRY_1830_MODIFIED,
};

const fn utm(lon0: f64) -> TmProjection {
    TmProjection {
        e0: 500_000.0,
        n0: 0.0,
        f0: 0.9996,
        lat0: 0.0,
        lon0,
        ellipsoid: INTERNATIONAL_1924,
    }
}

pub const TM_UTM_ZONE_29: TmProjection = utm(-9.0);
pub const TM_UTM_ZONE_30: TmProjection = utm(-3.0);
pub const TM_UTM_ZONE_31: TmProjection = utm(3.0);

/// National Grid lettering over England, Scotland and Wales.
pub const GRID_NATIONAL_GRID: Grid = Grid {
    num_digits: 2,
    bottom_left_first_char: 'S',
    width: 7,
    height: 13,
};

/// Irish National Grid lettering over Ireland and Northern Ireland.
pub const GRID_IRISH_NATIONAL_GRID: Grid = Grid {
    num_digits: 1,
    bottom_left_first_char: 'V',
    width: 5,
    height: 5,
};
