use std::str::FromStr;

use crate::{
    geodetic::GeodeticPosition,
    ups::mgrs_to_ups,
    utm::{mgrs_to_utm, MAX_UTM_ZONE, MIN_UTM_ZONE},
    Error,
};

// An MGRS reference carries at most five digit pairs (1 m precision)
const MAX_DIGITS: usize = 10;

/// An MGRS reference broken into its parts: the UTM zone (`0` for a polar
/// reference), the three designator letters, and the easting and northing
/// remainders within the 100 km square in meters.
///
/// The remainders are scaled to the southwest corner of the cell the digit
/// run names, so `"18SUJ23"` yields an easting of 20,000 m and a northing
/// of 30,000 m.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedGrid {
    pub(crate) zone: i32,
    pub(crate) letters: [char; 3],
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl ParsedGrid {
    /// Returns the UTM zone, or `0` for a polar reference.
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns the three designator letters.
    pub fn letters(&self) -> [char; 3] {
        self.letters
    }

    /// Returns the easting remainder in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the northing remainder in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns `true` when this reference lies in a UTM zone rather than a
    /// polar region.
    pub fn is_utm(&self) -> bool {
        self.zone != 0
    }
}

impl FromStr for ParsedGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mgrs(s)
    }
}

/// Breaks an MGRS string into its zone, letters, and grid remainders.
///
/// ASCII whitespace is ignored anywhere in the string and letters may be in
/// either case. A reference with no leading zone digits is a polar (UPS)
/// reference. The digit run must have even length; `2k` digits place the
/// position at the southwest corner of a cell `10^(5-k)` meters on a side.
///
/// Letters are only checked for membership in the MGRS alphabet here; zone-
/// and band-specific validation happens during conversion.
///
/// # Errors
///
/// Returns [`Error::MalformedString`] when the string does not scan as
/// zone digits, three letters, and a digit run, [`Error::InvalidZone`] for
/// a zone outside `[1, 60]`, [`Error::InvalidLetter`] when a designator
/// letter is not in `A..Z` less `I` and `O`, and [`Error::OddDigitCount`]
/// when the digit run has odd length.
///
/// # Usage
///
/// ```
/// let grid = gridref::parse_mgrs("18S UJ 23487 06483").unwrap();
///
/// assert_eq!(grid.zone(), 18);
/// assert_eq!(grid.letters(), ['S', 'U', 'J']);
/// assert!((grid.easting() - 23_487.).abs() < 1e-9);
/// assert!((grid.northing() - 6_483.).abs() < 1e-9);
/// ```
pub fn parse_mgrs(value: &str) -> Result<ParsedGrid, Error> {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if compact.is_empty() {
        return Err(Error::MalformedString("empty MGRS string".to_string()));
    }

    let digit_count = compact.chars().take_while(char::is_ascii_digit).count();
    if digit_count > 2 {
        return Err(Error::MalformedString(format!(
            "zone prefix of {value} is longer than two digits"
        )));
    }

    let zone = if digit_count == 0 {
        0
    } else {
        let zone: i32 = compact[..digit_count]
            .parse()
            .map_err(|_| Error::MalformedString(format!("unreadable zone in {value}")))?;
        if !(MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(&zone) {
            return Err(Error::InvalidZone(format!("zone {zone} not in [1,60]")));
        }
        zone
    };

    let rest = &compact[digit_count..];
    if rest.len() < 3 {
        return Err(Error::MalformedString(format!(
            "{value} is missing its designator letters"
        )));
    }

    let mut letters = ['\0'; 3];
    for (slot, c) in letters.iter_mut().zip(rest.chars()) {
        if !c.is_ascii_uppercase() || c == 'I' || c == 'O' {
            return Err(Error::InvalidLetter(format!(
                "{c} is not an MGRS designator letter"
            )));
        }
        *slot = c;
    }

    let digits = &rest[3..];
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::MalformedString(format!(
            "trailing characters of {value} are not grid digits"
        )));
    }
    if digits.len() % 2 != 0 {
        return Err(Error::OddDigitCount(format!(
            "{value} has {} grid digits",
            digits.len()
        )));
    }
    if digits.len() > MAX_DIGITS {
        return Err(Error::MalformedString(format!(
            "{value} has {} grid digits, more than {MAX_DIGITS}",
            digits.len()
        )));
    }

    let half = digits.len() / 2;
    let (easting, northing) = if half == 0 {
        (0., 0.)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let scale = 10_f64.powi(5 - half as i32);
        let east: f64 = digits[..half]
            .parse()
            .map_err(|_| Error::MalformedString(format!("unreadable easting in {value}")))?;
        let north: f64 = digits[half..]
            .parse()
            .map_err(|_| Error::MalformedString(format!("unreadable northing in {value}")))?;
        (east * scale, north * scale)
    };

    Ok(ParsedGrid {
        zone,
        letters,
        easting,
        northing,
    })
}

/// Converts an MGRS reference to a WGS-84 geodetic position.
///
/// References with a leading zone number resolve through UTM and the
/// inverse transverse Mercator projection; references without one are
/// polar and resolve through UPS and the inverse polar stereographic
/// projection.
///
/// # Errors
///
/// Returns any parse error from [`parse_mgrs`], the letter and band errors
/// of [`mgrs_to_utm`](crate::mgrs_to_utm) and
/// [`mgrs_to_ups`](crate::mgrs_to_ups), and [`Error::OutOfRange`] when the
/// resolved grid coordinate cannot be projected.
///
/// # Usage
///
/// ```
/// // The Washington Monument
/// let coord = gridref::mgrs_to_geodetic("18SUJ2348706483").unwrap();
///
/// assert!((coord.latitude_degrees() - 38.8895).abs() < 1e-3);
/// assert!((coord.longitude_degrees() + 77.0352).abs() < 1e-3);
/// ```
pub fn mgrs_to_geodetic(value: &str) -> Result<GeodeticPosition, Error> {
    let grid = parse_mgrs(value)?;

    if grid.is_utm() {
        mgrs_to_utm(grid.zone, grid.letters, grid.easting, grid.northing)?.to_geodetic()
    } else {
        mgrs_to_ups(grid.letters, grid.easting, grid.northing)?.to_geodetic()
    }
}
