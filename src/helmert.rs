use crate::coord::{Cartesian, CoordinateType, arc_seconds_to_rad};
use crate::params::Helmert;

/// Approximate the parameters of the reverse datum shift by negating every
/// parameter.
///
/// This is only the inverse to first order in the rotations and scale, which
/// is the form the Ordnance Survey publishes for reverse transformations.
///
/// ```
/// use os_coord::{helmert_invert, data::WGS84_TO_OSGB36};
///
/// let osgb36_to_wgs84 = helmert_invert(&WGS84_TO_OSGB36);
/// assert_eq!(osgb36_to_wgs84.tx, 446.448);
/// assert_eq!(osgb36_to_wgs84.s, -20.4894);
/// assert_eq!(helmert_invert(&osgb36_to_wgs84), WGS84_TO_OSGB36);
/// ```
pub fn helmert_invert<T: CoordinateType>(helmert: &Helmert<T>) -> Helmert<T> {
    Helmert {
        tx: -helmert.tx,
        ty: -helmert.ty,
        tz: -helmert.tz,
        rx: -helmert.rx,
        ry: -helmert.ry,
        rz: -helmert.rz,
        s: -helmert.s,
    }
}

/// Apply a seven-parameter Helmert transformation to a cartesian point.
///
/// Uses the small-angle (linearised Bursa–Wolf) form of the rotation matrix.
pub fn helmert_transform<T: CoordinateType>(
    point: Cartesian<T>,
    helmert: &Helmert<T>,
) -> Cartesian<T> {
    let rx = arc_seconds_to_rad(helmert.rx);
    let ry = arc_seconds_to_rad(helmert.ry);
    let rz = arc_seconds_to_rad(helmert.rz);
    let s1 = helmert.scale_factor();

    Cartesian {
        x: helmert.tx + point.x * s1 - point.y * rz + point.z * ry,
        y: helmert.ty + point.x * rz + point.y * s1 - point.z * rx,
        z: helmert.tz - point.x * ry + point.y * rx + point.z * s1,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{ETRF89_TO_IRL1975, WGS84_TO_ED50, WGS84_TO_OSGB36};
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let zero = Helmert {
            tx: 0.0,
            ty: 0.0,
            tz: 0.0,
            rx: 0.0,
            ry: 0.0,
            rz: 0.0,
            s: 0.0,
        };
        let c = Cartesian::new(3_909_833.018, -147_097.1376, 5_020_322.478);
        assert_eq!(helmert_transform(c, &zero), c);
    }

    #[test]
    fn test_translation_only() {
        let shift = Helmert {
            tx: 1.0,
            ty: -2.0,
            tz: 3.5,
            rx: 0.0,
            ry: 0.0,
            rz: 0.0,
            s: 0.0,
        };
        let c = helmert_transform(Cartesian::new(10.0, 20.0, 30.0), &shift);
        assert_eq!(c, Cartesian::new(11.0, 18.0, 33.5));
    }

    #[test]
    fn test_wgs84_to_osgb36() {
        let c = Cartesian::new(3_909_833.018, -147_097.1376, 5_020_322.478);
        let shifted = helmert_transform(c, &WGS84_TO_OSGB36);
        assert_relative_eq!(shifted.x, 3_909_460.068, epsilon = 1e-3);
        assert_relative_eq!(shifted.y, -146_987.301, epsilon = 1e-3);
        assert_relative_eq!(shifted.z, 5_019_888.070, epsilon = 1e-3);
    }

    #[test]
    fn test_invert_is_an_involution() {
        for h in [WGS84_TO_OSGB36, WGS84_TO_ED50, ETRF89_TO_IRL1975] {
            assert_eq!(helmert_invert(&helmert_invert(&h)), h);
        }
    }

    #[test]
    fn test_round_trip() {
        // Negating the parameters is only a first order inverse; the residual for
        // the published shifts is under a centimetre.
        let c = Cartesian::new(3_909_833.018, -147_097.1376, 5_020_322.478);
        for h in [WGS84_TO_OSGB36, WGS84_TO_ED50, ETRF89_TO_IRL1975] {
            let back = helmert_transform(helmert_transform(c, &h), &helmert_invert(&h));
            assert_relative_eq!(back.x, c.x, epsilon = 1e-2);
            assert_relative_eq!(back.y, c.y, epsilon = 1e-2);
            assert_relative_eq!(back.z, c.z, epsilon = 1e-2);
        }
    }
}
