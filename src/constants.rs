// WGS-84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;
// First eccentricity squared, e^2 = f(2 - f)
pub(crate) const WGS84_E2: f64 = WGS84_F * (2. - WGS84_F);
// Second eccentricity squared, e'^2 = e^2 / (1 - e^2)
pub(crate) const WGS84_EP2: f64 = WGS84_E2 / (1. - WGS84_E2);

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// UPS central scale factor
pub(crate) const UPS_K0: f64 = 994.0 / 1000.;

// UTM false easting on the central meridian
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// UTM false northing applied in the southern hemisphere
pub(crate) const UTM_FALSE_NORTHING: f64 = 10_000_000.;
// UPS false easting and northing (the pole sits at this offset on both axes)
pub(crate) const UPS_FALSE_ORIGIN: f64 = 2_000_000.;
