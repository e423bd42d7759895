use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    animation::{anim::Tween, ease::Ease},
    foundation::error::{HeartlineError, HeartlineResult},
};

/// Sinusoidal sweep between `min` and `max` that starts at `min`.
///
/// `value(t) = min + (max - min) * (0.5 + 0.5 * sin(2π t / period - π/2))`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub min: f64,
    pub max: f64,
    pub period_ms: f64,
}

impl Oscillation {
    pub fn new(min: f64, max: f64, period_ms: f64) -> HeartlineResult<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(HeartlineError::validation(format!(
                "oscillation bounds must satisfy min <= max (got {min}..{max})"
            )));
        }
        if !period_ms.is_finite() || period_ms <= 0.0 {
            return Err(HeartlineError::validation(format!(
                "oscillation period must be > 0ms (got {period_ms})"
            )));
        }
        Ok(Self {
            min,
            max,
            period_ms,
        })
    }

    pub fn sample(&self, t_ms: f64) -> f64 {
        let phase = TAU * t_ms / self.period_ms - FRAC_PI_2;
        let unit = 0.5 + 0.5 * phase.sin();
        // sin can overshoot its range by an ulp once scaled
        (self.min + (self.max - self.min) * unit).clamp(self.min, self.max)
    }
}

/// Endless flatten/restore cycle of the glyph amplitude.
///
/// Each cycle runs `1 → 0` over `to_flat_ms`, then `0 → 1` over `to_glyph_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseCycle {
    pub to_flat_ms: f64,
    pub to_glyph_ms: f64,
    pub ease: Ease,
}

impl PulseCycle {
    pub fn cycle_ms(&self) -> f64 {
        self.to_flat_ms + self.to_glyph_ms
    }

    /// Amplitude `t_ms` after the cycle started; sub-phase boundaries stay on a fixed schedule.
    pub fn sample(&self, t_ms: f64) -> f64 {
        let cycle = self.cycle_ms();
        if cycle <= 0.0 {
            return 1.0;
        }
        let local = t_ms.max(0.0) % cycle;
        if local <= self.to_flat_ms {
            Tween::new(1.0, 0.0, self.ease).sample_at(local, self.to_flat_ms)
        } else {
            Tween::new(0.0, 1.0, self.ease).sample_at(local - self.to_flat_ms, self.to_glyph_ms)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/osc.rs"]
mod tests;
