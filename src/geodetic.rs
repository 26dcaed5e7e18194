use std::fmt::Display;

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A WGS-84 geodetic position in radians. Latitude is in `[-pi/2, pi/2]`,
/// longitude in `(-pi, pi]`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticPosition {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl GeodeticPosition {
    /// Creates a position from a latitude and a longitude in radians.
    pub fn new(latitude: f64, longitude: f64) -> GeodeticPosition {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a position from a latitude and a longitude in degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> GeodeticPosition {
        Self::new(latitude.to_radians(), longitude.to_radians())
    }

    /// Returns the latitude in radians.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in radians.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude in degrees.
    ///
    /// # Example
    /// ```
    /// let coord = gridref::mgrs_to_geodetic("31NAA6602100000").unwrap();
    /// assert!(coord.latitude_degrees().abs() < 1e-4);
    /// ```
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    /// Returns the longitude in degrees.
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// Returns the distance in meters between two positions using the
    /// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
    /// on a sphere of the
    /// [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius).
    pub fn haversine(&self, other: &GeodeticPosition) -> f64 {
        2.0 * EARTH_MEAN_RADIUS_M
            * (((other.latitude - self.latitude) / 2.0).sin().powi(2)
                + self.latitude.cos()
                    * other.latitude.cos()
                    * ((other.longitude - self.longitude) / 2.0).sin().powi(2))
            .sqrt()
            .asin()
    }
}

impl Display for GeodeticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(f, "{lat} {lon}")
    }
}
