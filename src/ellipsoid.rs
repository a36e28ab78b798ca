//! Conversion between geographic and earth-centred cartesian coordinates on a
//! given ellipsoid ("A Guide to Coordinate Systems in Great Britain", B.1 – B.3).

use crate::MAX_ITERATIONS;
use crate::coord::{Cartesian, CoordinateType, LatLon, lit};
use crate::error::Error;
use crate::params::Ellipsoid;

/// Approximate precision, in metres on the ellipsoid surface, to which
/// [`cartesian_to_lat_lon`] iterates the latitude.
pub const CART_TO_LAT_LON_PRECISION: f64 = 4.0;

/// Convert a latitude, longitude and ellipsoidal height into cartesian coordinates.
///
/// ```
/// use os_coord::{LatLon, lat_lon_to_cartesian, data::AIRY_1830};
///
/// let c = lat_lon_to_cartesian(LatLon::new(0.0, 0.0, 0.0), &AIRY_1830);
/// assert_eq!(c.x, AIRY_1830.a);
/// assert_eq!(c.y, 0.0);
/// assert_eq!(c.z, 0.0);
/// ```
pub fn lat_lon_to_cartesian<T: CoordinateType>(
    point: LatLon<T>,
    ellipsoid: &Ellipsoid<T>,
) -> Cartesian<T> {
    let (sin_phi, cos_phi) = point.lat.sin_cos();
    let (sin_lambda, cos_lambda) = point.lon.sin_cos();
    let e2 = ellipsoid.e2();
    let nu = ellipsoid.a / (T::one() - e2 * sin_phi * sin_phi).sqrt();

    Cartesian {
        x: (nu + point.eh) * cos_phi * cos_lambda,
        y: (nu + point.eh) * cos_phi * sin_lambda,
        z: ((T::one() - e2) * nu + point.eh) * sin_phi,
    }
}

/// Convert cartesian coordinates back into latitude, longitude and ellipsoidal
/// height by fixed-point iteration on the latitude.
///
/// The longitude is degenerate at the poles and undefined at the geocentre.
pub fn cartesian_to_lat_lon<T: CoordinateType>(
    point: Cartesian<T>,
    ellipsoid: &Ellipsoid<T>,
) -> Result<LatLon<T>, Error> {
    let a = ellipsoid.a;
    let precision = lit::<T>(CART_TO_LAT_LON_PRECISION) / a;
    let e2 = ellipsoid.e2();
    let p = (point.x * point.x + point.y * point.y).sqrt();

    let mut phi = point.z.atan2(p * (T::one() - e2));
    let mut iterations = 0;

    // nu is taken from the last pass, not recomputed for the converged phi.
    let nu = loop {
        if iterations == MAX_ITERATIONS {
            return Err(Error::NotConverged {
                routine: "cartesian_to_lat_lon",
                iterations,
            });
        }
        iterations += 1;

        let sin_phi = phi.sin();
        let nu = a / (T::one() - e2 * sin_phi * sin_phi).sqrt();
        let phi_p = phi;
        phi = (point.z + e2 * nu * sin_phi).atan2(p);

        // Written negated so that a NaN stops the loop.
        if !((phi - phi_p).abs() > precision) {
            break nu;
        }
    };
    log::trace!("cartesian_to_lat_lon converged after {iterations} iterations");

    Ok(LatLon {
        lat: phi,
        lon: point.y.atan2(point.x),
        eh: p / phi.cos() - nu,
    })
}
