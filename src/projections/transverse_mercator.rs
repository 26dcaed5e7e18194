use lazy_static::lazy_static;

use crate::{
    constants::{UTM_K0, WGS84_A, WGS84_E2, WGS84_EP2, WGS84_F},
    geodetic::GeodeticPosition,
    utility::GeoMath,
    Error,
};

// Third flattening, n = f / (2 - f)
const N: f64 = WGS84_F / (2. - WGS84_F);

lazy_static! {
    pub(crate) static ref UTM: TransverseMercator = TransverseMercator::wgs84();
}

pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e2: f64,
    ep2: f64,
    // Rectifying radius, a * (1 - e2/4 - 3 e2^2/64 - 5 e2^3/256)
    rect: f64,
    // Footpoint-latitude series coefficients, polynomials in n
    j1: f64,
    j2: f64,
    j3: f64,
    j4: f64,
}

impl TransverseMercator {
    pub fn wgs84() -> TransverseMercator {
        let rect = WGS84_A
            * (1. - WGS84_E2 / 4. - 3. * WGS84_E2.powi(2) / 64. - 5. * WGS84_E2.powi(3) / 256.);

        Self {
            a: WGS84_A,
            k0: UTM_K0,
            e2: WGS84_E2,
            ep2: WGS84_EP2,
            rect,
            j1: 3. * N / 2. - 27. * N.powi(3) / 32.,
            j2: 21. * N.powi(2) / 16. - 55. * N.powi(4) / 32.,
            j3: 151. * N.powi(3) / 96.,
            j4: 1097. * N.powi(4) / 512.,
        }
    }

    /// Inverse projection. `lon0` is the central meridian in radians; `x` and
    /// `y` are grid coordinates in meters with the false origin removed.
    pub fn to_geodetic(&self, lon0: f64, x: f64, y: f64) -> Result<GeodeticPosition, Error> {
        // Footpoint latitude from the rectifying latitude mu
        let mu = y / (self.k0 * self.rect);
        let phi1 = mu
            + self.j1 * (2. * mu).sin()
            + self.j2 * (4. * mu).sin()
            + self.j3 * (6. * mu).sin()
            + self.j4 * (8. * mu).sin();

        let cos_phi1 = phi1.cos();
        // The correction series divides by cos(phi1); a footpoint this close
        // to a pole means the input escaped UTM bounds.
        if cos_phi1 < 0.08 {
            return Err(Error::OutOfRange(format!(
                "footpoint latitude {:.4} deg is too close to the pole for transverse Mercator",
                phi1.to_degrees(),
            )));
        }

        let sin2 = phi1.sin().powi(2);
        let denom = 1. - self.e2 * sin2;
        // Radii of curvature in the prime vertical and the meridian
        let nu = self.a / denom.sqrt();
        let rho = self.a * (1. - self.e2) / denom.powf(1.5);

        let tan_phi1 = phi1.tan();
        let t = tan_phi1.powi(2);
        let c = self.ep2 * cos_phi1.powi(2);
        let d = x / (nu * self.k0);

        let lat = phi1
            - (nu * tan_phi1 / rho)
                * (d.powi(2) / 2.
                    - (5. + 3. * t + 10. * c - 4. * c.powi(2) - 9. * self.ep2) * d.powi(4) / 24.
                    + (61. + 90. * t + 298. * c + 45. * t.powi(2)
                        - 252. * self.ep2
                        - 3. * c.powi(2))
                        * d.powi(6)
                        / 720.);

        let dlon = (d - (1. + 2. * t + c) * d.powi(3) / 6.
            + (5. - 2. * c + 28. * t - 3. * c.powi(2) + 8. * self.ep2 + 24. * t.powi(2))
                * d.powi(5)
                / 120.)
            / cos_phi1;

        Ok(GeodeticPosition::new(lat, (lon0 + dlon).ang_normalize()))
    }
}
