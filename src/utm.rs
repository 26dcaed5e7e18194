use std::fmt::Display;

use num::Integer;

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_FALSE_NORTHING},
    geodetic::GeodeticPosition,
    projections::transverse_mercator,
    Error, Hemisphere,
};

pub(crate) const MIN_UTM_ZONE: i32 = 1;
pub(crate) const MAX_UTM_ZONE: i32 = 60;

/// Side of one MGRS 100 km grid square in meters.
pub(crate) const TILE: f64 = 100_000.;
// The 20-row letter cycle repeats every 2,000 km of northing
const ROW_CYCLE: f64 = 2_000_000.;
// Even-numbered zones shift their row letters by half the cycle
const PATTERN_OFFSET: f64 = 500_000.;

// Latitude-band letters C..X (I and O are never used)
const LAT_BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";
// 100 km column letters repeat in three sets across each six zones
const COLUMN_SETS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];
// 100 km row letters, one 2,000 km cycle
const ROWS: &str = "ABCDEFGHJKLMNPQRSTUV";

struct BandRow {
    // Minimum northing of the band; southern bands carry the 10,000 km
    // false northing, so these are standard UTM values throughout
    min_northing: f64,
    // Whole 2,000 km cycles below min_northing - 100 km
    northing_offset: f64,
}

// Indexed by position in LAT_BANDS. Derived from the WGS-84 meridian arc at
// each band edge, floored to 100 km (the GEOTRANS latitude-band table).
const BAND_TABLE: [BandRow; 20] = [
    BandRow { min_northing: 1_100_000., northing_offset: 0. }, // C  80.5S..72S
    BandRow { min_northing: 2_000_000., northing_offset: 0. }, // D  72S..64S
    BandRow { min_northing: 2_800_000., northing_offset: 2_000_000. }, // E  64S..56S
    BandRow { min_northing: 3_700_000., northing_offset: 2_000_000. }, // F  56S..48S
    BandRow { min_northing: 4_600_000., northing_offset: 4_000_000. }, // G  48S..40S
    BandRow { min_northing: 5_500_000., northing_offset: 4_000_000. }, // H  40S..32S
    BandRow { min_northing: 6_400_000., northing_offset: 6_000_000. }, // J  32S..24S
    BandRow { min_northing: 7_300_000., northing_offset: 6_000_000. }, // K  24S..16S
    BandRow { min_northing: 8_200_000., northing_offset: 8_000_000. }, // L  16S..8S
    BandRow { min_northing: 9_100_000., northing_offset: 8_000_000. }, // M  8S..0
    BandRow { min_northing: 0., northing_offset: 0. },         // N  0..8N
    BandRow { min_northing: 800_000., northing_offset: 0. },   // P  8N..16N
    BandRow { min_northing: 1_700_000., northing_offset: 0. }, // Q  16N..24N
    BandRow { min_northing: 2_600_000., northing_offset: 2_000_000. }, // R  24N..32N
    BandRow { min_northing: 3_500_000., northing_offset: 2_000_000. }, // S  32N..40N
    BandRow { min_northing: 4_400_000., northing_offset: 4_000_000. }, // T  40N..48N
    BandRow { min_northing: 5_300_000., northing_offset: 4_000_000. }, // U  48N..56N
    BandRow { min_northing: 6_200_000., northing_offset: 6_000_000. }, // V  56N..64N
    BandRow { min_northing: 7_000_000., northing_offset: 6_000_000. }, // W  64N..72N
    BandRow { min_northing: 7_900_000., northing_offset: 6_000_000. }, // X  72N..84N
];

/// A WGS-84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// coordinate. Southern-hemisphere northings carry the standard
/// 10,000,000 m false northing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmCoordinate {
    pub(crate) zone: i32,
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UtmCoordinate {
    /// Returns the UTM zone.
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns the hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Returns the easting in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the northing in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts this coordinate to a geodetic position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the coordinate falls outside the
    /// UTM validity band, and [`Error::InvalidZone`] for a zone outside
    /// `[1, 60]`.
    pub fn to_geodetic(&self) -> Result<GeodeticPosition, Error> {
        utm_to_geodetic(self.zone, self.hemisphere, self.easting, self.northing)
    }
}

impl Display for UtmCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.zone, self.hemisphere, self.easting, self.northing
        )
    }
}

/// Central meridian of a UTM zone in radians.
pub(crate) fn central_meridian(zone: i32) -> f64 {
    (6.0 * f64::from(zone) - 183.).to_radians()
}

/// Resolves the MGRS letters and grid remainders of a UTM-band reference
/// into a full UTM coordinate.
///
/// `letters` are the three grid-zone-designator letters (latitude band,
/// 100 km column, 100 km row); `easting` and `northing` are the remainders
/// within the 100 km square in meters.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] for a zone outside `[1, 60]`,
/// [`Error::InvalidBand`] when the first letter is not a latitude band, and
/// [`Error::InvalidLetter`] when the column or row letter is outside the
/// ranges valid for the zone.
///
/// # Usage
///
/// ```
/// use gridref::{mgrs_to_utm, Hemisphere};
///
/// // The Washington Monument, 18SUJ2348706483
/// let coord = mgrs_to_utm(18, ['S', 'U', 'J'], 23487., 6483.).unwrap();
///
/// assert_eq!(coord.zone(), 18);
/// assert_eq!(coord.hemisphere(), Hemisphere::North);
/// assert!((coord.easting() - 323_487.).abs() < 1e-9);
/// assert!((coord.northing() - 4_306_483.).abs() < 1e-9);
/// ```
pub fn mgrs_to_utm(
    zone: i32,
    letters: [char; 3],
    easting: f64,
    northing: f64,
) -> Result<UtmCoordinate, Error> {
    if !(MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(&zone) {
        return Err(Error::InvalidZone(format!("zone {zone} not in [1,60]")));
    }

    let band_idx = LAT_BANDS.find(letters[0]).ok_or_else(|| {
        Error::InvalidBand(format!(
            "band letter {} not in set {LAT_BANDS}",
            letters[0]
        ))
    })?;

    // N..X lie at or above the equator
    let hemisphere = if band_idx >= 10 {
        Hemisphere::North
    } else {
        Hemisphere::South
    };

    #[allow(clippy::cast_sign_loss)]
    let columns = COLUMN_SETS[((zone - 1) % 3) as usize];
    let col_idx = columns.find(letters[1]).ok_or_else(|| {
        Error::InvalidLetter(format!(
            "column letter {} not in zone {zone} set {columns}",
            letters[1]
        ))
    })?;

    let row_idx = ROWS.find(letters[2]).ok_or_else(|| {
        Error::InvalidLetter(format!(
            "row letter {} not in UTM set {ROWS}",
            letters[2]
        ))
    })?;

    #[allow(clippy::cast_precision_loss)]
    let utm_easting = (col_idx as f64 + 1.) * TILE + easting;

    #[allow(clippy::cast_precision_loss)]
    let mut grid_northing = row_idx as f64 * TILE;
    if zone.is_even() {
        grid_northing -= PATTERN_OFFSET;
        if grid_northing < 0. {
            grid_northing += ROW_CYCLE;
        }
    }
    grid_northing += northing;
    if grid_northing >= ROW_CYCLE {
        grid_northing -= ROW_CYCLE;
    }

    // Pick the 2,000 km cycle that lands the row at or just above the
    // band's minimum northing, with 100 km of slack for band overlap
    let band = &BAND_TABLE[band_idx];
    let mut utm_northing = band.northing_offset + grid_northing;
    while utm_northing < band.min_northing - TILE {
        utm_northing += ROW_CYCLE;
    }

    Ok(UtmCoordinate {
        zone,
        hemisphere,
        easting: utm_easting,
        northing: utm_northing,
    })
}

/// Converts a UTM coordinate to a geodetic position via the inverse
/// transverse Mercator projection.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] for a zone outside `[1, 60]` and
/// [`Error::OutOfRange`] when the easting leaves `[0, 1,000,000]`, the
/// northing leaves `[0, 10,000,000]`, or the resulting latitude escapes
/// the UTM band `[-80.5, 84.5]` degrees.
///
/// # Usage
///
/// ```
/// use gridref::{utm_to_geodetic, Hemisphere};
///
/// // UTM 31N 166021.44E 0.00N is the intersection of the equator and the
/// // prime meridian
/// let coord = utm_to_geodetic(31, Hemisphere::North, 166_021.44, 0.).unwrap();
///
/// assert!(coord.latitude_degrees().abs() < 1e-5);
/// assert!(coord.longitude_degrees().abs() < 1e-5);
/// ```
pub fn utm_to_geodetic(
    zone: i32,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
) -> Result<GeodeticPosition, Error> {
    if !(MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(&zone) {
        return Err(Error::InvalidZone(format!("zone {zone} not in [1,60]")));
    }

    if !(0.0..=1_000_000.0).contains(&easting) {
        return Err(Error::OutOfRange(format!(
            "easting {easting} not in [0m, 1,000,000m]"
        )));
    }

    if !(0.0..=10_000_000.0).contains(&northing) {
        return Err(Error::OutOfRange(format!(
            "northing {northing} not in [0m, 10,000,000m]"
        )));
    }

    let x = easting - UTM_FALSE_EASTING;
    let y = match hemisphere {
        Hemisphere::North => northing,
        Hemisphere::South => northing - UTM_FALSE_NORTHING,
    };

    let coord = transverse_mercator::UTM.to_geodetic(central_meridian(zone), x, y)?;

    let lat = coord.latitude_degrees();
    if !(-80.5..=84.5).contains(&lat) {
        return Err(Error::OutOfRange(format!(
            "latitude {lat:.4} deg outside the UTM band [-80.5, 84.5]"
        )));
    }

    Ok(coord)
}
