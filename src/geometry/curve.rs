//! Parametric heart curve.
//!
//! `y = (x²)^(1/3) + 0.9 · sin(k·x) · sqrt(3 - x²)` on `x ∈ [-√3, √3]`. The first term is
//! the cardioid-like lobe, the second adds `k`-controlled ripples that taper to zero at the
//! edges.

/// Half-width of the curve's domain, `√3`.
pub const X_EXTENT: f64 = 1.732_050_807_568_877_2;

/// Vertical midpoint of the curve, `3^(1/3) / 2`. Subtract it to center the lobe on a baseline.
pub const Y_MID: f64 = 0.721_124_785_153_704_2;

const RIPPLE_GAIN: f64 = 0.9;

/// Evaluate the heart curve at `x` for shape parameter `k`.
///
/// Outside the open domain (`3 - x² <= 0`) the curve is clamped flat to `0`.
pub fn heart_y(x: f64, k: f64) -> f64 {
    let x2 = x * x;
    let radicand = 3.0 - x2;
    if radicand <= 0.0 || x.abs() >= X_EXTENT {
        return 0.0;
    }
    x2.cbrt() + RIPPLE_GAIN * (k * x).sin() * radicand.sqrt()
}

/// The heart curve for a fixed shape parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartCurve {
    pub k: f64,
}

impl HeartCurve {
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    pub fn eval(self, x: f64) -> f64 {
        heart_y(x, self.k)
    }

    /// Map `t ∈ [0, 1]` across the domain and return `(x, y - Y_MID)`.
    pub fn sample_centered(self, t: f64) -> (f64, f64) {
        let x = -X_EXTENT + t * (2.0 * X_EXTENT);
        (x, self.eval(x) - Y_MID)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
