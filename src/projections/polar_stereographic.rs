use std::f64::consts::FRAC_PI_2;

use lazy_static::lazy_static;

use crate::{
    constants::{UPS_K0, WGS84_A, WGS84_E2, WGS84_F},
    geodetic::GeodeticPosition,
    utility::GeoMath,
    Hemisphere,
};

const CONVERGENCE: f64 = 1e-12;
const MAX_ITERATIONS: usize = 10;

lazy_static! {
    pub(crate) static ref UPS: PolarStereographic = PolarStereographic::ups();
}

pub(crate) struct PolarStereographic {
    a: f64,
    k0: f64,
    e: f64,
    // (1 + e)^((1+e)/2) * (1 - e)^((1-e)/2), the polar-stereographic constant
    c: f64,
}

impl PolarStereographic {
    pub fn ups() -> PolarStereographic {
        let e = WGS84_E2.sqrt();
        let c = (1. - WGS84_F) * 1_f64.eatanhe(e).exp();

        Self {
            a: WGS84_A,
            k0: UPS_K0,
            e,
            c,
        }
    }

    /// Inverse projection. `x` and `y` are stereographic coordinates in
    /// meters with the false origin removed; the pole sits at the origin.
    pub fn to_geodetic(&self, hemisphere: Hemisphere, x: f64, y: f64) -> GeodeticPosition {
        let r = x.hypot(y);
        if r.is_zero() {
            let lat = match hemisphere {
                Hemisphere::North => FRAC_PI_2,
                Hemisphere::South => -FRAC_PI_2,
            };
            return GeodeticPosition::new(lat, 0.);
        }

        // The prime meridian runs along -y in the north and +y in the south
        let lon = match hemisphere {
            Hemisphere::North => x.atan2(-y),
            Hemisphere::South => x.atan2(y),
        };

        // tan(pi/4 - phi/2) = t * exp(-e * atanh(e * sin(phi))); start from
        // the conformal (spherical) solution and iterate the ellipsoidal term
        let t = r * self.c / (2. * self.k0 * self.a);
        let mut phi = FRAC_PI_2 - 2. * t.atan();
        for _ in 0..MAX_ITERATIONS {
            let next =
                FRAC_PI_2 - 2. * (t * (-self.e * (self.e * phi.sin()).atanh()).exp()).atan();
            let delta = (next - phi).abs();
            phi = next;
            if delta < CONVERGENCE {
                break;
            }
        }

        let lat = match hemisphere {
            Hemisphere::North => phi,
            Hemisphere::South => -phi,
        };

        GeodeticPosition::new(lat, lon)
    }
}
