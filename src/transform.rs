use crate::coord::{CoordinateType, EasNor, LatLon};
use crate::data::{
    ETRF89_TO_IRL1975, GRID_IRISH_NATIONAL_GRID, GRID_NATIONAL_GRID, GRS80,
    TM_IRISH_NATIONAL_GRID, TM_NATIONAL_GRID, WGS84, WGS84_TO_OSGB36,
};
use crate::ellipsoid::{cartesian_to_lat_lon, lat_lon_to_cartesian};
use crate::error::Error;
use crate::grid::{GridRef, eas_nor_to_grid_ref, grid_ref_to_eas_nor};
use crate::helmert::{helmert_invert, helmert_transform};
use crate::params::{Ellipsoid, Grid, Helmert, TmProjection};
use crate::transverse_mercator::{lat_lon_to_tm_eas_nor, tm_eas_nor_to_lat_lon};

/// Everything needed to take a position from a global datum (such as the WGS84
/// positions reported by GPS) to a lettered national grid reference, and back.
///
/// The forward direction runs: geographic → cartesian on `source`, Helmert shift,
/// cartesian → geographic on the projection's ellipsoid, transverse Mercator,
/// then lettering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSystem<T = f64> {
    /// Ellipsoid of the global datum the input positions are on
    pub source: Ellipsoid<T>,
    /// Datum shift from the global datum to the grid's local datum
    pub helmert: Helmert<T>,
    /// Projection of the local datum, which also names its ellipsoid
    pub projection: TmProjection<T>,
    pub grid: Grid,
}

/// WGS84 to the Ordnance Survey National Grid on OSGB36.
pub const OSGB36_NATIONAL_GRID: GridSystem = GridSystem {
    source: WGS84,
    helmert: WGS84_TO_OSGB36,
    projection: TM_NATIONAL_GRID,
    grid: GRID_NATIONAL_GRID,
};

/// ETRF89 to the Irish National Grid on Ireland 1975.
pub const IRISH_NATIONAL_GRID: GridSystem = GridSystem {
    source: GRS80,
    helmert: ETRF89_TO_IRL1975,
    projection: TM_IRISH_NATIONAL_GRID,
    grid: GRID_IRISH_NATIONAL_GRID,
};

impl<T: CoordinateType> GridSystem<T> {
    pub fn cast<U: CoordinateType>(&self) -> GridSystem<U> {
        GridSystem {
            source: self.source.cast(),
            helmert: self.helmert.cast(),
            projection: self.projection.cast(),
            grid: self.grid,
        }
    }

    /// Shift a position on the global datum onto the grid's local datum.
    pub fn to_local(&self, point: LatLon<T>) -> Result<LatLon<T>, Error> {
        let global = lat_lon_to_cartesian(point, &self.source);
        let local = helmert_transform(global, &self.helmert);
        log::debug!("shifted {global:?} to {local:?}");
        cartesian_to_lat_lon(local, &self.projection.ellipsoid)
    }

    /// Shift a position on the grid's local datum back onto the global datum.
    pub fn to_global(&self, point: LatLon<T>) -> Result<LatLon<T>, Error> {
        let local = lat_lon_to_cartesian(point, &self.projection.ellipsoid);
        let global = helmert_transform(local, &helmert_invert(&self.helmert));
        log::debug!("shifted {local:?} to {global:?}");
        cartesian_to_lat_lon(global, &self.source)
    }

    /// Project a position on the global datum to grid eastings and northings.
    pub fn to_eas_nor(&self, point: LatLon<T>) -> Result<EasNor<T>, Error> {
        let local = self.to_local(point)?;
        let eas_nor = lat_lon_to_tm_eas_nor(local, &self.projection);
        log::debug!("projected {local:?} to {eas_nor:?}");
        Ok(eas_nor)
    }

    /// Convert a position on the global datum to a grid reference.
    ///
    /// ```
    /// use os_coord::{LatLon, OSGB36_NATIONAL_GRID};
    ///
    /// let gps = LatLon::from_degrees(52.65757, 1.7179216, 24.7);
    /// let grid_ref = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
    /// assert_eq!(format!("{grid_ref:#}"), "TG 51539 13138 (-20.0m)");
    /// ```
    pub fn to_grid_ref(&self, point: LatLon<T>) -> Result<GridRef<T>, Error> {
        let eas_nor = self.to_eas_nor(point)?;
        let grid_ref = eas_nor_to_grid_ref(eas_nor, &self.grid);
        if !grid_ref.is_valid() {
            return Err(Error::OutOfGrid);
        }
        Ok(grid_ref)
    }

    /// Convert grid eastings and northings to a position on the global datum.
    pub fn from_eas_nor(&self, point: EasNor<T>) -> Result<LatLon<T>, Error> {
        let local = tm_eas_nor_to_lat_lon(point, &self.projection)?;
        log::debug!("unprojected {point:?} to {local:?}");
        self.to_global(local)
    }

    /// Convert a grid reference to a position on the global datum.
    pub fn from_grid_ref(&self, grid_ref: &GridRef<T>) -> Result<LatLon<T>, Error> {
        if !grid_ref.is_valid() {
            return Err(Error::OutOfGrid);
        }
        self.from_eas_nor(grid_ref_to_eas_nor(grid_ref, &self.grid))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{TM_NATIONAL_GRID, WGS84_TO_ED50};
    use approx::assert_relative_eq;

    #[test]
    fn test_norfolk() {
        let gps = LatLon::from_degrees(52.65757, 1.7179216, 24.7);
        let r = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
        assert_eq!(r.code.as_str(), "TG");
        assert_relative_eq!(r.e, 51_538.642, epsilon = 1e-2);
        assert_relative_eq!(r.n, 13_138.370, epsilon = 1e-2);
        assert_relative_eq!(r.h, -19.988, epsilon = 1e-2);
        assert_eq!(r.to_string(), "TG 51539 13138");
    }

    #[test]
    fn test_manchester_lossless() {
        let gps = LatLon::from_degrees(53.467097, -2.220490, 24.7);
        let en = OSGB36_NATIONAL_GRID.to_eas_nor(gps).unwrap();
        let r = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
        assert_eq!(r.code.as_str(), "SJ");
        assert_eq!(r.to_string(), "SJ 85460 96729");
        assert_eq!(grid_ref_to_eas_nor(&r, &OSGB36_NATIONAL_GRID.grid), en);

        let local = OSGB36_NATIONAL_GRID.to_local(gps).unwrap();
        let back = tm_eas_nor_to_lat_lon(en, &TM_NATIONAL_GRID).unwrap();
        assert_relative_eq!(back.lat, local.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lon, local.lon, epsilon = 1e-9);
        assert_eq!(back.eh, local.eh);
    }

    #[test]
    fn test_cornwall() {
        let gps = LatLon::from_degrees(50.5, -5.0, 0.0);
        let r = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
        assert_eq!(r.code.as_str(), "SW");
        assert!(r.code.as_str().starts_with('S'));
    }

    #[test]
    fn test_off_grid() {
        let gps = LatLon::from_degrees(0.0, 0.0, 0.0);
        assert_eq!(OSGB36_NATIONAL_GRID.to_grid_ref(gps), Err(Error::OutOfGrid));

        let en = OSGB36_NATIONAL_GRID.to_eas_nor(gps).unwrap();
        assert!(!eas_nor_to_grid_ref(en, &OSGB36_NATIONAL_GRID.grid).is_valid());
    }

    #[test]
    fn test_round_trip() {
        // The first order Helmert inverse limits the round trip to roughly a
        // centimetre.
        let gps = LatLon::from_degrees(53.467097, -2.220490, 24.7);
        let r = OSGB36_NATIONAL_GRID.to_grid_ref(gps).unwrap();
        let back = OSGB36_NATIONAL_GRID.from_grid_ref(&r).unwrap();
        assert_relative_eq!(back.lat, gps.lat, epsilon = 1e-8);
        assert_relative_eq!(back.lon, gps.lon, epsilon = 1e-8);
        assert_relative_eq!(back.eh, gps.eh, epsilon = 2e-2);
    }

    #[test]
    fn test_parsed_reference() {
        let r: GridRef = "TQ 30047 80478".parse().unwrap();
        let ll = OSGB36_NATIONAL_GRID.from_grid_ref(&r).unwrap();
        assert_relative_eq!(ll.lat_degrees(), 51.5083, epsilon = 1e-4);
        assert_relative_eq!(ll.lon_degrees(), -0.1275, epsilon = 1e-4);

        let invalid = GridRef::new(crate::GridCode::EMPTY, 0.0, 0.0, 0.0);
        assert_eq!(OSGB36_NATIONAL_GRID.from_grid_ref(&invalid), Err(Error::OutOfGrid));
    }

    #[test]
    fn test_irish_grid() {
        // Dublin.
        let gps = LatLon::from_degrees(53.3498, -6.2603, 50.0);
        let r = IRISH_NATIONAL_GRID.to_grid_ref(gps).unwrap();
        assert_eq!(r.code.as_str(), "O");
        let back = IRISH_NATIONAL_GRID.from_grid_ref(&r).unwrap();
        assert_relative_eq!(back.lat, gps.lat, epsilon = 1e-8);
        assert_relative_eq!(back.lon, gps.lon, epsilon = 1e-8);
    }

    #[test]
    fn test_custom_system() {
        let ed50_utm = GridSystem {
            source: WGS84,
            helmert: WGS84_TO_ED50,
            projection: crate::data::TM_UTM_ZONE_30,
            grid: GRID_NATIONAL_GRID,
        };
        let en = ed50_utm.to_eas_nor(LatLon::from_degrees(52.0, -3.0, 0.0)).unwrap();
        assert_relative_eq!(en.e, 500_101.292, epsilon = 1e-2);
        assert_relative_eq!(en.n, 5_761_255.918, epsilon = 1e-2);
    }

    #[test]
    fn test_single_precision() {
        let system: GridSystem<f32> = OSGB36_NATIONAL_GRID.cast();
        let gps = LatLon::<f32>::from_degrees(52.65757, 1.7179216, 24.7);
        let en = system.to_eas_nor(gps).unwrap();
        assert_relative_eq!(en.e, 651_538.6, epsilon = 20.0);
        assert_relative_eq!(en.n, 313_138.4, epsilon = 20.0);
    }
}
