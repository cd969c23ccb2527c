//! Track geometry. The ramp is a pure height function over the horizontal
//! coordinate; the integrator only ever asks for height and local slope.

use crate::constants::RAMP_COEFFICIENT;

/// Horizontal extent of the track. Positions are clamped into this range.
pub const TRACK_MIN: f64 = -1.0;
pub const TRACK_MAX: f64 = 1.0;

/// Parabolic track y = a * x^2
#[derive(Clone, Copy, Debug)]
pub struct Ramp {
    coefficient: f64,
}

impl Ramp {
    pub fn parabola() -> Self {
        Self { coefficient: RAMP_COEFFICIENT }
    }

    /// Height of the track at horizontal position `x`.
    #[inline]
    pub fn height(&self, x: f64) -> f64 {
        self.coefficient * x * x
    }

    /// Analytic derivative dy/dx at `x`.
    #[inline]
    pub fn slope(&self, x: f64) -> f64 {
        2.0 * self.coefficient * x
    }

    #[inline]
    pub fn clamp_position(x: f64) -> f64 {
        x.clamp(TRACK_MIN, TRACK_MAX)
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::parabola()
    }
}
