//! Conversions to and from [`geo-types`](https://docs.rs/geo-types) geometries.
//!
//! Geographic positions map to points with `x` = longitude and `y` = latitude,
//! both in radians; projected positions map to `x` = easting, `y` = northing.
//! Heights are dropped going to `geo-types` and set to zero coming back.

use crate::coord::{CoordinateType, EasNor, LatLon};

///```rust
/// use os_coord::EasNor;
///
/// let c: geo_types::Coord = EasNor::new(651_538.6, 313_138.4, 10.0).into();
/// assert_eq!((c.x, c.y), (651_538.6, 313_138.4));
/// ```
impl<T: CoordinateType> From<EasNor<T>> for geo_types::Coord<T> {
    fn from(p: EasNor<T>) -> Self {
        geo_types::Coord { x: p.e, y: p.n }
    }
}

impl<T: CoordinateType> From<EasNor<T>> for geo_types::Point<T> {
    fn from(p: EasNor<T>) -> Self {
        geo_types::Point::new(p.e, p.n)
    }
}

impl<T: CoordinateType> From<geo_types::Coord<T>> for EasNor<T> {
    fn from(c: geo_types::Coord<T>) -> Self {
        EasNor::new(c.x, c.y, T::zero())
    }
}

impl<T: CoordinateType> From<geo_types::Point<T>> for EasNor<T> {
    fn from(p: geo_types::Point<T>) -> Self {
        EasNor::new(p.x(), p.y(), T::zero())
    }
}

///```rust
/// use os_coord::LatLon;
/// use geo_types::point;
///
/// let p: geo_types::Point = LatLon::new(0.9, -0.03, 24.7).into();
/// assert_eq!(p, point!(x: -0.03, y: 0.9));
/// ```
impl<T: CoordinateType> From<LatLon<T>> for geo_types::Point<T> {
    fn from(p: LatLon<T>) -> Self {
        geo_types::Point::new(p.lon, p.lat)
    }
}

impl<T: CoordinateType> From<geo_types::Point<T>> for LatLon<T> {
    fn from(p: geo_types::Point<T>) -> Self {
        LatLon::new(p.y(), p.x(), T::zero())
    }
}
