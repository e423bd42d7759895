use crate::foundation::error::{HeartlineError, HeartlineResult};

pub use kurbo::{BezPath, PathEl, Point};

/// Monotonic host timestamp in milliseconds, as handed to a frame callback.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Millis(pub f64);

impl Millis {
    /// Timestamp zero.
    pub const ZERO: Self = Self(0.0);

    /// Milliseconds elapsed since `earlier`. Negative when the clock runs backwards.
    pub fn since(self, earlier: Millis) -> f64 {
        self.0 - earlier.0
    }

    /// Shift this timestamp forward by `ms`.
    pub fn offset(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// Horizontal extent of the sampled strip and the height of its baseline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Strip {
    /// Strip width in render coordinates.
    pub width: f64,
    /// Strip height; only used to size rendered documents.
    pub height: f64,
    /// Y coordinate of the flat baseline.
    pub baseline_y: f64,
}

impl Strip {
    /// Create a validated strip.
    pub fn new(width: f64, height: f64, baseline_y: f64) -> HeartlineResult<Self> {
        let strip = Self {
            width,
            height,
            baseline_y,
        };
        strip.validate()?;
        Ok(strip)
    }

    /// Check that the strip has a positive, finite size.
    pub fn validate(&self) -> HeartlineResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(HeartlineError::validation(format!(
                "strip width must be > 0 (got {})",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(HeartlineError::validation(format!(
                "strip height must be > 0 (got {})",
                self.height
            )));
        }
        if !self.baseline_y.is_finite() {
            return Err(HeartlineError::validation("strip baseline_y must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
