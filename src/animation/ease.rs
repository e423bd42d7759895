/// Progress curve of one phase.
///
/// Phases default to `InOutCubic`; `Linear` suits constant-rate sweeps and `Smoothstep` matches
/// the profile used to blend glyph ends into the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// `4t³` below the midpoint, `1 - (2 - 2t)³ / 2` above it.
    #[default]
    InOutCubic,
    /// Hermite `t²(3 - 2t)`.
    Smoothstep,
}

impl Ease {
    /// Eased value of `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            Self::Smoothstep => smoothstep(t),
        }
    }
}

/// `b²(3 - 2b)` on `b` clamped to `[0, 1]`.
pub fn smoothstep(b: f64) -> f64 {
    let b = b.clamp(0.0, 1.0);
    b * b * (3.0 - 2.0 * b)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
