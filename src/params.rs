//! Parameter records consumed by the transforms.
//!
//! All records default to `f64` so the constants in [`data`](crate::data) can be
//! used directly; call `cast` to obtain a record at another precision.

use crate::coord::{CoordinateType, cast, lit};

/// A biaxial ellipsoid, semi-axes in metres with `a >= b > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid<T = f64> {
    /// Semi-major axis (m)
    pub a: T,
    /// Semi-minor axis (m)
    pub b: T,
}

impl<T: CoordinateType> Ellipsoid<T> {
    pub fn new(a: T, b: T) -> Self {
        Ellipsoid { a, b }
    }

    /// First eccentricity squared, `(a² − b²) / a²`.
    pub fn e2(&self) -> T {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    pub fn cast<U: CoordinateType>(&self) -> Ellipsoid<U> {
        Ellipsoid {
            a: cast(self.a),
            b: cast(self.b),
        }
    }
}

/// Seven-parameter Helmert transformation between two datums.
///
/// Rotations are in **seconds of arc** and the scale is in **parts per million**.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helmert<T = f64> {
    /// Translation (m)
    pub tx: T,
    pub ty: T,
    pub tz: T,
    /// Rotation (seconds of arc)
    pub rx: T,
    pub ry: T,
    pub rz: T,
    /// Scale (ppm)
    pub s: T,
}

impl<T: CoordinateType> Helmert<T> {
    pub fn cast<U: CoordinateType>(&self) -> Helmert<U> {
        Helmert {
            tx: cast(self.tx),
            ty: cast(self.ty),
            tz: cast(self.tz),
            rx: cast(self.rx),
            ry: cast(self.ry),
            rz: cast(self.rz),
            s: cast(self.s),
        }
    }

    /// Scale expressed as the factor `1 + s·10⁻⁶`.
    pub(crate) fn scale_factor(&self) -> T {
        T::one() + self.s / lit(1_000_000.0)
    }
}

/// A transverse Mercator projection.
///
/// Note that unlike [`LatLon`](crate::LatLon), the true origin is given in **degrees**.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TmProjection<T = f64> {
    /// Easting of the true origin (m)
    pub e0: T,
    /// Northing of the true origin (m)
    pub n0: T,
    /// Central meridian scale factor
    pub f0: T,
    /// Latitude of the true origin (degrees)
    pub lat0: T,
    /// Longitude of the true origin and central meridian (degrees)
    pub lon0: T,
    /// The ellipsoid the projected latitudes and longitudes refer to
    pub ellipsoid: Ellipsoid<T>,
}

impl<T: CoordinateType> TmProjection<T> {
    pub fn cast<U: CoordinateType>(&self) -> TmProjection<U> {
        TmProjection {
            e0: cast(self.e0),
            n0: cast(self.n0),
            f0: cast(self.f0),
            lat0: cast(self.lat0),
            lon0: cast(self.lon0),
            ellipsoid: self.ellipsoid.cast(),
        }
    }
}

/// A National Grid style system of lettered 100 km squares.
///
/// Each letter picks a square from a 5×5 block laid out as below, with 'I'
/// omitted:
///
/// ```text
///  A B C D E
///  F G H J K
///  L M N O P
///  Q R S T U
///  V W X Y Z
/// ```
///
/// The first letter addresses a 500 km block of an outer 5×5 grid, offset so that
/// `bottom_left_first_char` labels the block containing the false origin. It
/// must be an upper-case ASCII letter other than 'I', and `width` and `height`
/// must not carry the first letter past the edge of its block; positions that
/// would are treated as off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of letters in a grid code, 1 or 2
    pub num_digits: usize,
    /// First letter of the bottom-left grid square
    pub bottom_left_first_char: char,
    /// Extent of the lettered area, in 100 km squares
    pub width: i64,
    pub height: i64,
}
