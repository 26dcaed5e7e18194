#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use std::fmt::Display;

use thiserror::Error;

pub mod geodetic;
pub mod mgrs;
pub mod ups;
pub mod utm;

pub use geodetic::GeodeticPosition;
pub use mgrs::{mgrs_to_geodetic, parse_mgrs, ParsedGrid};
pub use ups::{mgrs_to_ups, ups_to_geodetic, UpsCoordinate};
pub use utm::{mgrs_to_utm, utm_to_geodetic, UtmCoordinate};

pub(crate) mod projections {
    pub mod polar_stereographic;
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

/// Failure kinds for grid-reference parsing and conversion. Every variant
/// carries a human-readable description of what was wrong with the input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("MGRS string is malformed: {0}")]
    MalformedString(String),
    #[error("UTM zone is invalid: {0}")]
    InvalidZone(String),
    #[error("Grid letter is invalid: {0}")]
    InvalidLetter(String),
    #[error("UPS zone letter is invalid: {0}")]
    InvalidUpsZone(String),
    #[error("Latitude band letter is invalid: {0}")]
    InvalidBand(String),
    #[error("MGRS digits are invalid: {0}")]
    OddDigitCount(String),
    #[error("Coordinate outside projection validity range: {0}")]
    OutOfRange(String),
}

/// Hemisphere of a UTM or UPS coordinate.
///
/// For UTM the hemisphere follows from the latitude-band letter
/// (`N`..`X` north, `C`..`M` south); for UPS it follows from the zone
/// letter (`A`/`B` south, `Y`/`Z` north).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn is_north(self) -> bool {
        matches!(self, Hemisphere::North)
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::North => write!(f, "N"),
            Hemisphere::South => write!(f, "S"),
        }
    }
}
