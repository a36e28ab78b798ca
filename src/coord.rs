use num_traits::{Float, FloatConst, FromPrimitive, NumCast};
use std::fmt::Debug;

/// The real-number type every record and transform is generic over.
///
/// Implemented for anything that behaves like a float, which in practice means
/// `f64` (the default throughout the crate) and `f32`.
pub trait CoordinateType: Float + FloatConst + FromPrimitive + Debug {}
impl<T: Float + FloatConst + FromPrimitive + Debug> CoordinateType for T {}

/// Convert an `f64` literal into `T`.
pub(crate) fn lit<T: CoordinateType>(v: f64) -> T {
    T::from_f64(v).unwrap_or_else(T::nan)
}

/// Convert between two coordinate types, yielding NaN if the value can't be represented.
pub(crate) fn cast<T: CoordinateType, U: CoordinateType>(v: T) -> U {
    <U as NumCast>::from(v).unwrap_or_else(U::nan)
}

/// π at precision `T`.
pub fn pi<T: CoordinateType>() -> T {
    T::PI()
}

/// Degrees to radians, computed as `deg / 180 * π`.
pub fn deg_to_rad<T: CoordinateType>(deg: T) -> T {
    deg / lit(180.0) * pi()
}

/// Radians to degrees, computed as `rad / π * 180`.
pub fn rad_to_deg<T: CoordinateType>(rad: T) -> T {
    rad / pi() * lit(180.0)
}

/// Seconds of arc to radians.
pub fn arc_seconds_to_rad<T: CoordinateType>(seconds: T) -> T {
    deg_to_rad(seconds / lit(3600.0))
}

/// Latitude/longitude with ellipsoidal height.
///
/// `lat` and `lon` are **radians**; `eh` is metres above the ellipsoid the
/// position refers to (which is not stored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon<T = f64> {
    pub lat: T,
    pub lon: T,
    pub eh: T,
}

impl<T: CoordinateType> LatLon<T> {
    pub fn new(lat: T, lon: T, eh: T) -> Self {
        LatLon { lat, lon, eh }
    }

    /// Build a position from latitude and longitude given in degrees.
    ///
    /// ```
    /// use os_coord::LatLon;
    /// # use approx::assert_relative_eq;
    ///
    /// let p = LatLon::from_degrees(90.0, -180.0, 10.0);
    /// assert_relative_eq!(p.lat, std::f64::consts::FRAC_PI_2);
    /// assert_relative_eq!(p.lon, -std::f64::consts::PI);
    /// assert_eq!(p.eh, 10.0);
    /// ```
    pub fn from_degrees(lat: T, lon: T, eh: T) -> Self {
        LatLon {
            lat: deg_to_rad(lat),
            lon: deg_to_rad(lon),
            eh,
        }
    }

    /// Latitude in degrees.
    pub fn lat_degrees(&self) -> T {
        rad_to_deg(self.lat)
    }

    /// Longitude in degrees.
    pub fn lon_degrees(&self) -> T {
        rad_to_deg(self.lon)
    }
}

/// Earth-centred, earth-fixed cartesian position in metres.
///
/// Tied to a particular ellipsoid; the caller is responsible for tracking which.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: CoordinateType> Cartesian<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Cartesian { x, y, z }
    }
}

/// Projected eastings and northings (metres), with the height carried through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasNor<T = f64> {
    pub e: T,
    pub n: T,
    pub h: T,
}

impl<T: CoordinateType> EasNor<T> {
    pub fn new(e: T, n: T, h: T) -> Self {
        EasNor { e, n, h }
    }
}
