use std::f64::consts::{PI, TAU};

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn remainder(&self, denom: Self) -> Self;
    /// Normalize an angle in radians to the range `(-pi, pi]`.
    fn ang_normalize(&self) -> Self;
    /// `e * atanh(e * x)`, the eccentricity term of the isometric latitude.
    fn eatanhe(&self, es: Self) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn remainder(&self, denom: f64) -> f64 {
        *self - (*self / denom).round() * denom
    }

    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(TAU);
        if value <= -PI {
            value + TAU
        } else if value > PI {
            value - TAU
        } else {
            value
        }
    }

    fn eatanhe(&self, es: f64) -> f64 {
        es * (es * *self).atanh()
    }
}
