//! Transverse Mercator projection, following the series in section C of "A Guide
//! to Coordinate Systems in Great Britain".

use crate::MAX_ITERATIONS;
use crate::coord::{CoordinateType, EasNor, LatLon, deg_to_rad, lit};
use crate::error::Error;
use crate::params::TmProjection;

/// Northing residual (m) at which [`tm_eas_nor_to_lat_lon`] stops refining the
/// latitude: 0.01 mm.
pub const EAS_NOR_TO_LAT_LON_PRECISION: f64 = 1e-5;

/// Ellipsoid-derived constants shared by the forward and inverse projection.
struct Constants<T> {
    a: T,
    b: T,
    f0: T,
    e2: T,
    n: T,
    lat0: T,
    lon0: T,
}

impl<T: CoordinateType> Constants<T> {
    fn new(projection: &TmProjection<T>) -> Self {
        let a = projection.ellipsoid.a;
        let b = projection.ellipsoid.b;
        Constants {
            a,
            b,
            f0: projection.f0,
            e2: T::one() - (b * b) / (a * a),
            n: (a - b) / (a + b),
            lat0: deg_to_rad(projection.lat0),
            lon0: deg_to_rad(projection.lon0),
        }
    }

    /// Developed meridional arc from the true origin's latitude to `lat`.
    fn meridional_arc(&self, lat: T) -> T {
        let n = self.n;
        let n2 = n * n;
        let n3 = n * n * n;
        let d = lat - self.lat0;
        let s = lat + self.lat0;
        let two = lit::<T>(2.0);
        let three = lit::<T>(3.0);

        let ma = (T::one() + n + lit::<T>(1.25) * n2 + lit::<T>(1.25) * n3) * d;
        let mb = (three * n + three * n * n + lit::<T>(2.625) * n3) * d.sin() * s.cos();
        let mc = (lit::<T>(1.875) * n2 + lit::<T>(1.875) * n3) * (two * d).sin() * (two * s).cos();
        let md = lit::<T>(35.0 / 24.0) * n3 * (three * d).sin() * (three * s).cos();

        self.b * self.f0 * ((ma - mb) + (mc - md))
    }

    /// Transverse (`nu`) and meridional (`rho`) radii of curvature at `lat`,
    /// scaled by F0, and `eta² = nu / rho − 1`.
    fn radii(&self, sin_lat: T) -> (T, T, T) {
        let k = T::one() - self.e2 * sin_lat * sin_lat;
        let nu = self.a * self.f0 / k.sqrt();
        let rho = self.a * self.f0 * (T::one() - self.e2) / k.powf(lit(1.5));
        (nu, rho, nu / rho - T::one())
    }
}

/// Project a latitude and longitude (radians) onto a transverse Mercator grid.
///
/// The position must be on the projection's own ellipsoid; the height is copied
/// through unchanged.
///
/// ```
/// use os_coord::{LatLon, lat_lon_to_tm_eas_nor, data::TM_NATIONAL_GRID};
/// # use approx::assert_relative_eq;
///
/// // The true origin of the National Grid.
/// let origin = lat_lon_to_tm_eas_nor(LatLon::from_degrees(49.0, -2.0, 0.0), &TM_NATIONAL_GRID);
/// assert_relative_eq!(origin.e, 400_000.0, epsilon = 1e-6);
/// assert_relative_eq!(origin.n, -100_000.0, epsilon = 1e-6);
/// ```
pub fn lat_lon_to_tm_eas_nor<T: CoordinateType>(
    point: LatLon<T>,
    projection: &TmProjection<T>,
) -> EasNor<T> {
    let k = Constants::new(projection);
    let lat = point.lat;
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (nu, rho, eta2) = k.radii(sin_lat);
    let m = k.meridional_arc(lat);

    let cos3_lat = cos_lat * cos_lat * cos_lat;
    let cos5_lat = cos3_lat * cos_lat * cos_lat;
    let tan2_lat = lat.tan() * lat.tan();
    let tan4_lat = tan2_lat * tan2_lat;

    let i = m + projection.n0;
    let ii = nu / lit(2.0) * sin_lat * cos_lat;
    let iii = nu / lit(24.0) * sin_lat * cos3_lat * (lit::<T>(5.0) - tan2_lat + lit::<T>(9.0) * eta2);
    let iiia = nu / lit(720.0) * sin_lat * cos5_lat * (lit::<T>(61.0) - lit::<T>(58.0) * tan2_lat + tan4_lat);
    let iv = nu * cos_lat;
    let v = nu / lit(6.0) * cos3_lat * (nu / rho - tan2_lat);
    let vi = nu / lit(120.0)
        * cos5_lat
        * ((lit::<T>(5.0) - lit::<T>(18.0) * tan2_lat + tan4_lat)
            + (lit::<T>(14.0) * eta2 - lit::<T>(58.0) * tan2_lat * eta2));

    let d_lon = point.lon - k.lon0;
    let d_lon2 = d_lon * d_lon;
    let d_lon3 = d_lon2 * d_lon;
    let d_lon4 = d_lon3 * d_lon;
    let d_lon5 = d_lon4 * d_lon;
    let d_lon6 = d_lon5 * d_lon;

    EasNor {
        e: projection.e0 + iv * d_lon + v * d_lon3 + vi * d_lon5,
        n: i + ii * d_lon2 + iii * d_lon4 + iiia * d_lon6,
        h: point.eh,
    }
}

/// Convert transverse Mercator eastings and northings back into a latitude and
/// longitude (radians) on the projection's ellipsoid.
///
/// The latitude is refined until the meridional arc matches the northing to
/// within [`EAS_NOR_TO_LAT_LON_PRECISION`].
pub fn tm_eas_nor_to_lat_lon<T: CoordinateType>(
    point: EasNor<T>,
    projection: &TmProjection<T>,
) -> Result<LatLon<T>, Error> {
    let k = Constants::new(projection);
    let northing = point.n - projection.n0;
    // Never ask for more than the coordinate type can resolve.
    let precision = lit::<T>(EAS_NOR_TO_LAT_LON_PRECISION)
        .max(northing.abs() * T::epsilon() * lit(8.0));

    let mut lat = k.lat0;
    let mut m = T::zero();
    let mut iterations = 0;
    loop {
        if iterations == MAX_ITERATIONS {
            return Err(Error::NotConverged {
                routine: "tm_eas_nor_to_lat_lon",
                iterations,
            });
        }
        iterations += 1;

        lat = (northing - m) / (k.a * k.f0) + lat;
        m = k.meridional_arc(lat);

        // The absolute residual is tested so that points south of the true
        // origin, where the arc is approached from above, also converge.
        if !((northing - m).abs() >= precision) {
            break;
        }
    }
    log::trace!("tm_eas_nor_to_lat_lon converged after {iterations} iterations");

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (nu, rho, eta2) = k.radii(sin_lat);

    let tan_lat = lat.tan();
    let tan2_lat = tan_lat * tan_lat;
    let tan4_lat = tan2_lat * tan2_lat;
    let tan6_lat = tan4_lat * tan2_lat;
    let sec_lat = T::one() / cos_lat;
    let nu3 = nu * nu * nu;
    let nu5 = nu3 * nu * nu;
    let nu7 = nu5 * nu * nu;

    let vii = tan_lat / (lit::<T>(2.0) * rho * nu);
    let viii = tan_lat / (lit::<T>(24.0) * rho * nu3)
        * (lit::<T>(5.0) + lit::<T>(3.0) * tan2_lat + eta2 - lit::<T>(9.0) * tan2_lat * eta2);
    let ix = tan_lat / (lit::<T>(720.0) * rho * nu5)
        * (lit::<T>(61.0) + lit::<T>(90.0) * tan2_lat + lit::<T>(45.0) * tan4_lat);
    let x = sec_lat / nu;
    let xi = sec_lat / (lit::<T>(6.0) * nu3) * (nu / rho + lit::<T>(2.0) * tan2_lat);
    let xii = sec_lat / (lit::<T>(120.0) * nu5)
        * (lit::<T>(5.0) + lit::<T>(28.0) * tan2_lat + lit::<T>(24.0) * tan4_lat);
    let xiia = sec_lat / (lit::<T>(5040.0) * nu7)
        * (lit::<T>(61.0)
            + lit::<T>(662.0) * tan2_lat
            + lit::<T>(1320.0) * tan4_lat
            + lit::<T>(720.0) * tan6_lat);

    let d_e = point.e - projection.e0;
    let d_e2 = d_e * d_e;
    let d_e3 = d_e2 * d_e;
    let d_e4 = d_e2 * d_e2;
    let d_e5 = d_e3 * d_e2;
    let d_e6 = d_e4 * d_e2;
    let d_e7 = d_e5 * d_e2;

    Ok(LatLon {
        lat: lat - vii * d_e2 + viii * d_e4 - ix * d_e6,
        lon: k.lon0 + x * d_e - xi * d_e3 + xii * d_e5 - xiia * d_e7,
        eh: point.h,
    })
}
