//! Lettered 100 km square grid references.
//!
//! Letters are indexed 0–24 across a 5×5 block, left to right and top to bottom,
//! with 'I' skipped.

use std::fmt;
use std::str::FromStr;

use crate::coord::{CoordinateType, EasNor, lit};
use crate::error::Error;
use crate::params::Grid;

/// Side of a lettered grid square (m).
const SQUARE: f64 = 100_000.0;

/// Index within a 5×5 block of an upper-case letter.
fn c2i(c: u8) -> i64 {
    i64::from(c) - i64::from(b'A') - i64::from(c > b'I')
}

/// Upper-case letter for an index within a 5×5 block.
fn i2c(i: i64) -> Option<u8> {
    if !(0..25).contains(&i) {
        return None;
    }
    u8::try_from(i64::from(b'A') + i + i64::from(i >= 8)).ok()
}

fn i2x(i: i64) -> i64 {
    i % 5
}

fn i2y(i: i64) -> i64 {
    4 - i / 5
}

fn xy2i(x: i64, y: i64) -> i64 {
    x + (4 - y) * 5
}

/// Position of a letter within its 5×5 block, `(0, 0)` being 'V'.
fn letter_xy(c: u8) -> (i64, i64) {
    let i = c2i(c);
    (i2x(i), i2y(i))
}

/// Position of the grid's bottom-left first letter, if it is a usable letter.
fn first_letter_xy(grid: &Grid) -> Option<(i64, i64)> {
    let c = u8::try_from(grid.bottom_left_first_char).ok()?;
    if !c.is_ascii_uppercase() || c == b'I' {
        return None;
    }
    Some(letter_xy(c))
}

/// The letters of a grid reference: zero, one or two upper-case letters, never 'I'.
///
/// An empty code marks a position that is not covered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCode {
    letters: [u8; 2],
    len: u8,
}

impl GridCode {
    /// The code of a position outside the grid.
    pub const EMPTY: GridCode = GridCode {
        letters: [0; 2],
        len: 0,
    };

    /// Build a code from one or two upper-case letters other than 'I'.
    ///
    /// ```
    /// use os_coord::GridCode;
    ///
    /// assert_eq!(GridCode::new("TG").unwrap().as_str(), "TG");
    /// assert!(GridCode::new("TI").is_none());
    /// assert!(GridCode::new("tg").is_none());
    /// assert!(GridCode::new("TGA").is_none());
    /// ```
    pub fn new(code: &str) -> Option<GridCode> {
        let bytes = code.as_bytes();
        if bytes.is_empty() || bytes.len() > 2 {
            return None;
        }
        if !bytes.iter().all(|&c| c.is_ascii_uppercase() && c != b'I') {
            return None;
        }
        let mut letters = [0; 2];
        letters[..bytes.len()].copy_from_slice(bytes);
        Some(GridCode {
            letters,
            len: bytes.len() as u8,
        })
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.letters[..usize::from(self.len)]
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for GridCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid reference: the letters of a 100 km square plus the easting and
/// northing (m) within it, and a height carried through from the projection.
///
/// If `code` is empty the reference is invalid and the other fields are meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRef<T = f64> {
    pub code: GridCode,
    pub e: T,
    pub n: T,
    pub h: T,
}

impl<T: CoordinateType> GridRef<T> {
    pub fn new(code: GridCode, e: T, n: T, h: T) -> Self {
        GridRef { code, e, n, h }
    }

    fn invalid() -> Self {
        GridRef {
            code: GridCode::EMPTY,
            e: T::nan(),
            n: T::nan(),
            h: T::nan(),
        }
    }

    /// Whether the reference lies on the grid, i.e. has a non-empty code.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }
}

/// Formats as `"TG 51539 13138"`, rounding the easting and northing to the
/// metre. The alternate form `{:#}` appends the height, e.g. `"TG 51539 13138 (-20.0m)"`.
///
/// Residuals of 99 999.5 m or more round up to `100000`, one digit wider than
/// usual and naming the edge of the next square. Format the fields directly
/// if truncated digits are needed.
impl<T: CoordinateType> fmt::Display for GridRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.e.to_f64().unwrap_or(f64::NAN);
        let n = self.n.to_f64().unwrap_or(f64::NAN);
        write!(f, "{} {:05.0} {:05.0}", self.code, e, n)?;
        if f.alternate() {
            let h = self.h.to_f64().unwrap_or(f64::NAN);
            write!(f, " ({h:.1}m)")?;
        }
        Ok(())
    }
}

/// Parses references such as `"TG 51539 13138"`, `"TG5153913138"` or the
/// reduced precision `"TG 515 131"` (100 m squares). The height is zero.
///
/// ```
/// use os_coord::GridRef;
///
/// let r: GridRef = "TG 515 131".parse().unwrap();
/// assert_eq!(r.code.as_str(), "TG");
/// assert_eq!((r.e, r.n), (51_500.0, 13_100.0));
/// ```
impl<T: CoordinateType> FromStr for GridRef<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidGridRef(s.to_string());

        let s_trimmed = s.trim();
        let letters_end = s_trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s_trimmed.len());
        let code = GridCode::new(&s_trimmed[..letters_end]).ok_or_else(invalid)?;

        let digits: Vec<&str> = s_trimmed[letters_end..].split_whitespace().collect();
        // Checked before splitting so the split always lands on a char boundary.
        if !digits.iter().all(|d| d.bytes().all(|c| c.is_ascii_digit())) {
            return Err(invalid());
        }
        let (e, n) = match digits.as_slice() {
            [e, n] => (*e, *n),
            [en] if en.len() % 2 == 0 => en.split_at(en.len() / 2),
            _ => return Err(invalid()),
        };
        if e.len() != n.len() || e.is_empty() || e.len() > 5 {
            return Err(invalid());
        }

        let scale = 10_u32.pow(5 - e.len() as u32);
        let parse = |digits: &str| -> Result<T, Error> {
            let v: u32 = digits.parse().map_err(|_| invalid())?;
            Ok(lit(f64::from(v * scale)))
        };
        Ok(GridRef {
            code,
            e: parse(e)?,
            n: parse(n)?,
            h: T::zero(),
        })
    }
}

/// Convert projected eastings and northings into a grid reference.
///
/// Returns a reference with an empty code if the point lies outside the
/// `width × height` squares covered by the grid.
///
/// ```
/// use os_coord::{EasNor, eas_nor_to_grid_ref, data::GRID_NATIONAL_GRID};
///
/// let r = eas_nor_to_grid_ref(EasNor::new(651_538.6, 313_138.4, 0.0), &GRID_NATIONAL_GRID);
/// assert_eq!(r.code.as_str(), "TG");
/// assert_eq!(r.to_string(), "TG 51539 13138");
///
/// let off_grid = eas_nor_to_grid_ref(EasNor::new(-1.0, 0.0, 0.0), &GRID_NATIONAL_GRID);
/// assert!(!off_grid.is_valid());
/// ```
pub fn eas_nor_to_grid_ref<T: CoordinateType>(point: EasNor<T>, grid: &Grid) -> GridRef<T> {
    let Some((first_x, first_y)) = first_letter_xy(grid) else {
        return GridRef::invalid();
    };
    if !(1..=2).contains(&grid.num_digits) {
        return GridRef::invalid();
    }
    if point.e < T::zero() || point.n < T::zero() {
        return GridRef::invalid();
    }

    // Square indices are derived from the residuals so that decoding adds back
    // exactly what was taken off.
    let square = lit::<T>(SQUARE);
    let e = point.e % square;
    let n = point.n % square;
    let (Some(mut sq_x), Some(mut sq_y)) = (
        ((point.e - e) / square).to_i64(),
        ((point.n - n) / square).to_i64(),
    ) else {
        return GridRef::invalid();
    };
    if sq_x >= grid.width || sq_y >= grid.height {
        return GridRef::invalid();
    }

    let mut letters = [0; 2];
    for i in (0..grid.num_digits).rev() {
        // Only the outermost letter is offset within its block.
        let (off_x, off_y) = if i == 0 { (first_x, first_y) } else { (0, 0) };
        let (x, y) = (off_x + sq_x % 5, off_y + sq_y % 5);
        if x > 4 || y > 4 {
            return GridRef::invalid();
        }
        let Some(letter) = i2c(xy2i(x, y)) else {
            return GridRef::invalid();
        };
        letters[i] = letter;
        sq_x /= 5;
        sq_y /= 5;
    }

    GridRef {
        code: GridCode {
            letters,
            len: grid.num_digits as u8,
        },
        e,
        n,
        h: point.h,
    }
}

/// Convert a grid reference back into projected eastings and northings.
///
/// The code must consist of `grid.num_digits` letters valid for the grid;
/// otherwise the result is meaningless. A grid whose first letter is not an
/// upper-case ASCII letter other than 'I' yields NaN.
pub fn grid_ref_to_eas_nor<T: CoordinateType>(grid_ref: &GridRef<T>, grid: &Grid) -> EasNor<T> {
    let Some((first_x, first_y)) = first_letter_xy(grid) else {
        return EasNor::new(T::nan(), T::nan(), T::nan());
    };
    let mut sq_x: i64 = 0;
    let mut sq_y: i64 = 0;
    for (i, &c) in grid_ref.code.as_bytes().iter().take(grid.num_digits).enumerate() {
        sq_x *= 5;
        sq_y *= 5;
        let (off_x, off_y) = if i == 0 { (first_x, first_y) } else { (0, 0) };
        let (x, y) = letter_xy(c);
        sq_x += x - off_x;
        sq_y += y - off_y;
    }

    let square = lit::<T>(SQUARE);
    EasNor {
        e: grid_ref.e + square * lit(sq_x as f64),
        n: grid_ref.n + square * lit(sq_y as f64),
        h: grid_ref.h,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{GRID_IRISH_NATIONAL_GRID, GRID_NATIONAL_GRID};

    #[test]
    fn test_letter_helpers() {
        assert_eq!(c2i(b'A'), 0);
        assert_eq!(c2i(b'H'), 7);
        assert_eq!(c2i(b'J'), 8);
        assert_eq!(c2i(b'Z'), 24);
        for i in 0..25 {
            let c = i2c(i).unwrap();
            assert_ne!(c, b'I');
            assert_eq!(c2i(c), i);
            assert_eq!(xy2i(i2x(i), i2y(i)), i);
        }
        assert_eq!(i2c(25), None);
        assert_eq!(i2c(-1), None);
        assert_eq!(letter_xy(b'V'), (0, 0));
        assert_eq!(letter_xy(b'S'), (2, 1));
        assert_eq!(letter_xy(b'E'), (4, 4));
    }

    #[test]
    fn test_national_grid_squares() {
        let cases = [
            (0.0, 0.0, "SV"),
            (651_538.6, 313_138.4, "TG"),
            (385_460.0, 396_729.0, "SJ"),
            (187_345.3, 70_989.1, "SW"),
            (530_000.0, 180_000.0, "TQ"),
            (325_000.0, 673_000.0, "NT"),
            (465_000.0, 1_210_000.0, "HP"),
            (445_000.0, 1_140_000.0, "HU"),
            (699_999.0, 1_299_999.0, "JM"),
        ];
        for (e, n, code) in cases {
            let r = eas_nor_to_grid_ref(EasNor::new(e, n, 0.0), &GRID_NATIONAL_GRID);
            assert_eq!(r.code.as_str(), code, "({e}, {n})");
        }
    }

    #[test]
    fn test_irish_origin() {
        let r = eas_nor_to_grid_ref(EasNor::new(0.0, 0.0, 0.0), &GRID_IRISH_NATIONAL_GRID);
        assert_eq!(r.code.as_str(), "V");
        assert_eq!((r.e, r.n), (0.0, 0.0));

        let r = eas_nor_to_grid_ref(EasNor::new(315_904.0, 234_671.0, 0.0), &GRID_IRISH_NATIONAL_GRID);
        assert_eq!(r.code.as_str(), "O");
        assert_eq!((r.e, r.n), (15_904.0, 34_671.0));
    }

    #[test]
    fn test_out_of_grid() {
        let outside = [
            (-0.5, 10.0),
            (10.0, -0.5),
            (700_000.0, 10.0),
            (10.0, 1_300_000.0),
            (f64::NAN, 0.0),
            (f64::INFINITY, 0.0),
        ];
        for (e, n) in outside {
            let r = eas_nor_to_grid_ref(EasNor::new(e, n, 0.0), &GRID_NATIONAL_GRID);
            assert!(!r.is_valid(), "({e}, {n})");
            assert_eq!(r.code.as_str(), "");
        }
        let r = eas_nor_to_grid_ref(EasNor::new(500_000.0, 10.0, 0.0), &GRID_IRISH_NATIONAL_GRID);
        assert!(!r.is_valid());
    }

    #[test]
    fn test_unusable_grids() {
        // The outer letter would run off the right of its 5x5 block.
        let wide = Grid {
            num_digits: 2,
            bottom_left_first_char: 'S',
            width: 20,
            height: 5,
        };
        let r = eas_nor_to_grid_ref(EasNor::new(1_450_000.0, 0.0, 0.0), &wide);
        assert_eq!(r.code.as_str(), "UZ");
        let r = eas_nor_to_grid_ref(EasNor::new(1_550_000.0, 0.0, 0.0), &wide);
        assert!(!r.is_valid());

        for first in ['I', 'é', 's'] {
            let grid = Grid {
                bottom_left_first_char: first,
                ..GRID_NATIONAL_GRID
            };
            let r = eas_nor_to_grid_ref(EasNor::new(10.0, 10.0, 0.0), &grid);
            assert!(!r.is_valid(), "{first:?}");

            let code = GridRef::<f64>::new(GridCode::new("SV").unwrap(), 1.0, 1.0, 0.0);
            assert!(grid_ref_to_eas_nor(&code, &grid).e.is_nan(), "{first:?}");
        }
    }

    #[test]
    fn test_lossless() {
        for grid in [GRID_NATIONAL_GRID, GRID_IRISH_NATIONAL_GRID] {
            let mut e = 0.123_456_789;
            while e < grid.width as f64 * SQUARE {
                let mut n = 0.987_654_321;
                while n < grid.height as f64 * SQUARE {
                    let p = EasNor::new(e, n, -20.25);
                    let r = eas_nor_to_grid_ref(p, &grid);
                    assert!(r.is_valid());
                    assert_eq!(r.code.len(), grid.num_digits);
                    assert!(!r.code.as_str().contains('I'));
                    assert!(r.e >= 0.0 && r.e < SQUARE);
                    assert!(r.n >= 0.0 && r.n < SQUARE);
                    assert_eq!(grid_ref_to_eas_nor(&r, &grid), p);
                    n += 37_337.77;
                }
                e += 41_113.31;
            }
        }
    }

    #[test]
    fn test_decode() {
        let r = GridRef::new(GridCode::new("TG").unwrap(), 51_539.0, 13_138.0, 1.5);
        assert_eq!(
            grid_ref_to_eas_nor(&r, &GRID_NATIONAL_GRID),
            EasNor::new(651_539.0, 313_138.0, 1.5)
        );
        let r = GridRef::new(GridCode::new("HP").unwrap(), 0.0, 0.0, 0.0);
        assert_eq!(
            grid_ref_to_eas_nor(&r, &GRID_NATIONAL_GRID),
            EasNor::new(400_000.0, 1_200_000.0, 0.0)
        );
    }

    #[test]
    fn test_display() {
        let r = GridRef::new(GridCode::new("TG").unwrap(), 51_538.642, 13_138.370, -19.988);
        assert_eq!(r.to_string(), "TG 51539 13138");
        assert_eq!(format!("{r:#}"), "TG 51539 13138 (-20.0m)");
        let r = GridRef::new(GridCode::new("SV").unwrap(), 12.4, 0.0, 0.0);
        assert_eq!(r.to_string(), "SV 00012 00000");

        // Rounding at the far edge of a square widens the field.
        let r = eas_nor_to_grid_ref(EasNor::new(99_999.6, 0.2, 0.0), &GRID_NATIONAL_GRID);
        assert_eq!(r.code.as_str(), "SV");
        assert_eq!(r.to_string(), "SV 100000 00000");
    }

    #[test]
    fn test_parse() {
        let r: GridRef = "TG 51539 13138".parse().unwrap();
        assert_eq!(r, GridRef::new(GridCode::new("TG").unwrap(), 51_539.0, 13_138.0, 0.0));
        let compact: GridRef = "TG5153913138".parse().unwrap();
        assert_eq!(compact, r);
        let irish: GridRef = " O 1590 3467 ".parse().unwrap();
        assert_eq!(irish.code.as_str(), "O");
        assert_eq!((irish.e, irish.n), (15_900.0, 34_670.0));

        for bad in [
            "",
            "TG",
            "TI 123 456",
            "tg 123 456",
            "TG 1234 567",
            "TG 123456 123456",
            "TG 12a 456",
            "TG 515391313",
            "TG 1é1",
            "TG 12é 345",
        ] {
            assert_eq!(
                bad.parse::<GridRef>(),
                Err(Error::InvalidGridRef(bad.to_string())),
                "{bad:?}"
            );
        }
    }
}
