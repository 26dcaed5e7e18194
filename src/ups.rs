use std::fmt::Display;

use crate::{
    constants::UPS_FALSE_ORIGIN, geodetic::GeodeticPosition, projections::polar_stereographic,
    utm::TILE, Error, Hemisphere,
};

// Polar zone letters: A and B straddle the south pole, Y and Z the north
const UPS_ZONES: &str = "ABYZ";

// UPS easting and northing are valid within 1,200 km of either pole
const MIN_UPS_COORD: f64 = 800_000.;
const MAX_UPS_COORD: f64 = 3_200_000.;

struct UpsZone {
    // 100 km column letters valid in this zone; D, E, I, M, N, O, V and W
    // never appear as polar columns
    columns: &'static str,
    // 100 km row letters; I and O are skipped
    rows: &'static str,
    // Easting of column index 0 and northing of row index 0
    false_easting: f64,
    false_northing: f64,
}

// Indexed by position in UPS_ZONES (the GEOTRANS UPS constant table). A and
// Y cover the western half-plane, B and Z the eastern.
const ZONE_TABLE: [UpsZone; 4] = [
    UpsZone {
        columns: "JKLPQRSTUXYZ",
        rows: "ABCDEFGHJKLMNPQRSTUVWXYZ",
        false_easting: 800_000.,
        false_northing: 800_000.,
    },
    UpsZone {
        columns: "ABCFGHJKLPQR",
        rows: "ABCDEFGHJKLMNPQRSTUVWXYZ",
        false_easting: 2_000_000.,
        false_northing: 800_000.,
    },
    UpsZone {
        columns: "JKLPQRSTUXYZ",
        rows: "ABCDEFGHJKLMNP",
        false_easting: 800_000.,
        false_northing: 1_300_000.,
    },
    UpsZone {
        columns: "ABCFGHJ",
        rows: "ABCDEFGHJKLMNP",
        false_easting: 2_000_000.,
        false_northing: 1_300_000.,
    },
];

/// A WGS-84
/// [UPS](https://en.wikipedia.org/wiki/Universal_polar_stereographic_coordinate_system)
/// coordinate. Both axes carry a 2,000,000 m false origin at the pole.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpsCoordinate {
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UpsCoordinate {
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
    /// Returns [`Error::OutOfRange`] when either axis falls outside
    /// `[800,000, 3,200,000]` meters.
    pub fn to_geodetic(&self) -> Result<GeodeticPosition, Error> {
        ups_to_geodetic(self.hemisphere, self.easting, self.northing)
    }
}

impl Display for UpsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.hemisphere, self.easting, self.northing)
    }
}

/// Resolves the MGRS letters and grid remainders of a polar reference into
/// a full UPS coordinate.
///
/// `letters` are the polar zone letter (`A`, `B`, `Y` or `Z`) followed by
/// the 100 km column and row letters; `easting` and `northing` are the
/// remainders within the 100 km square in meters.
///
/// # Errors
///
/// Returns [`Error::InvalidUpsZone`] when the first letter is not a polar
/// zone and [`Error::InvalidLetter`] when the column or row letter is
/// outside the ranges valid for that zone.
///
/// # Usage
///
/// ```
/// use gridref::{mgrs_to_ups, Hemisphere};
///
/// // ZAH00000 00000, just east of the north pole
/// let coord = mgrs_to_ups(['Z', 'A', 'H'], 0., 0.).unwrap();
///
/// assert_eq!(coord.hemisphere(), Hemisphere::North);
/// assert!((coord.easting() - 2_000_000.).abs() < 1e-9);
/// assert!((coord.northing() - 2_000_000.).abs() < 1e-9);
/// ```
pub fn mgrs_to_ups(letters: [char; 3], easting: f64, northing: f64) -> Result<UpsCoordinate, Error> {
    let zone_idx = UPS_ZONES.find(letters[0]).ok_or_else(|| {
        Error::InvalidUpsZone(format!(
            "polar zone letter {} not in set {UPS_ZONES}",
            letters[0]
        ))
    })?;
    let zone = &ZONE_TABLE[zone_idx];

    let hemisphere = if zone_idx < 2 {
        Hemisphere::South
    } else {
        Hemisphere::North
    };

    let col_idx = zone.columns.find(letters[1]).ok_or_else(|| {
        Error::InvalidLetter(format!(
            "column letter {} not in zone {} set {}",
            letters[1], letters[0], zone.columns
        ))
    })?;

    let row_idx = zone.rows.find(letters[2]).ok_or_else(|| {
        Error::InvalidLetter(format!(
            "row letter {} not in zone {} set {}",
            letters[2], letters[0], zone.rows
        ))
    })?;

    #[allow(clippy::cast_precision_loss)]
    let ups_easting = zone.false_easting + col_idx as f64 * TILE + easting;
    #[allow(clippy::cast_precision_loss)]
    let ups_northing = zone.false_northing + row_idx as f64 * TILE + northing;

    Ok(UpsCoordinate {
        hemisphere,
        easting: ups_easting,
        northing: ups_northing,
    })
}

/// Converts a UPS coordinate to a geodetic position via the inverse polar
/// stereographic projection.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when the easting or the northing falls
/// outside `[800,000, 3,200,000]` meters.
///
/// # Usage
///
/// ```
/// use gridref::{ups_to_geodetic, Hemisphere};
///
/// // The exact north pole
/// let coord = ups_to_geodetic(Hemisphere::North, 2_000_000., 2_000_000.).unwrap();
///
/// assert!((coord.latitude_degrees() - 90.).abs() < 1e-9);
/// ```
pub fn ups_to_geodetic(
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
) -> Result<GeodeticPosition, Error> {
    if !(MIN_UPS_COORD..=MAX_UPS_COORD).contains(&easting) {
        return Err(Error::OutOfRange(format!(
            "easting {easting} not in [800,000m, 3,200,000m]"
        )));
    }

    if !(MIN_UPS_COORD..=MAX_UPS_COORD).contains(&northing) {
        return Err(Error::OutOfRange(format!(
            "northing {northing} not in [800,000m, 3,200,000m]"
        )));
    }

    let x = easting - UPS_FALSE_ORIGIN;
    let y = northing - UPS_FALSE_ORIGIN;

    Ok(polar_stereographic::UPS.to_geodetic(hemisphere, x, y))
}

#[cfg(test)]
mod tests {
    use super::{mgrs_to_ups, ups_to_geodetic};
    use crate::{Error, Hemisphere};

    #[test]
    fn squares_adjacent_to_the_north_pole() {
        // Z covers the eastern half of the north polar region; column A and
        // row H meet at the pole itself
        let coord = mgrs_to_ups(['Z', 'A', 'H'], 0., 0.).unwrap();
        assert_eq!(coord.hemisphere(), Hemisphere::North);
        assert!((coord.easting() - 2_000_000.).abs() < 1e-9);
        assert!((coord.northing() - 2_000_000.).abs() < 1e-9);

        // Y covers the western half; its columns end one square west
        let coord = mgrs_to_ups(['Y', 'Z', 'H'], 99_999., 0.).unwrap();
        assert!((coord.easting() - 1_999_999.).abs() < 1e-9);
    }

    #[test]
    fn squares_adjacent_to_the_south_pole() {
        let coord = mgrs_to_ups(['B', 'A', 'N'], 0., 0.).unwrap();
        assert_eq!(coord.hemisphere(), Hemisphere::South);
        assert!((coord.easting() - 2_000_000.).abs() < 1e-9);
        assert!((coord.northing() - 2_000_000.).abs() < 1e-9);
    }

    #[test]
    fn polar_zone_letter_is_validated() {
        // C is a UTM latitude band, not a polar zone
        let err = mgrs_to_ups(['C', 'A', 'N'], 0., 0.).unwrap_err();
        assert!(matches!(err, Error::InvalidUpsZone(_)));
    }

    #[test]
    fn column_letters_skip_the_polar_gaps() {
        // D is never a polar column letter
        let err = mgrs_to_ups(['B', 'D', 'N'], 0., 0.).unwrap_err();
        assert!(matches!(err, Error::InvalidLetter(_)));

        // A is a valid column in B but not in A
        let err = mgrs_to_ups(['A', 'A', 'N'], 0., 0.).unwrap_err();
        assert!(matches!(err, Error::InvalidLetter(_)));
    }

    #[test]
    fn northern_rows_stop_at_p() {
        let err = mgrs_to_ups(['Z', 'A', 'Q'], 0., 0.).unwrap_err();
        assert!(matches!(err, Error::InvalidLetter(_)));

        // The south extends through Z
        assert!(mgrs_to_ups(['B', 'A', 'Z'], 0., 0.).is_ok());
    }

    #[test]
    fn projector_rejects_out_of_range_inputs() {
        assert!(matches!(
            ups_to_geodetic(Hemisphere::North, 799_999., 2_000_000.),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            ups_to_geodetic(Hemisphere::North, 2_000_000., 3_200_001.),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn south_pole_latitude() {
        let coord = ups_to_geodetic(Hemisphere::South, 2_000_000., 2_000_000.).unwrap();
        assert!((coord.latitude_degrees() + 90.).abs() < 1e-9);
    }

    #[test]
    fn west_of_the_south_pole() {
        // 4 km due west of the south pole lies on the 90W meridian
        let coord = ups_to_geodetic(Hemisphere::South, 1_996_000., 2_000_000.).unwrap();
        assert!((coord.longitude_degrees() + 90.).abs() < 1e-9);
        assert!(coord.latitude_degrees() < -89.9);
    }
}
