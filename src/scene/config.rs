use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::foundation::core::Strip;
use crate::foundation::error::{HeartlineError, HeartlineResult};
use crate::geometry::layout::{Breakpoint, LayoutBuilder, SampleBudget};
use crate::geometry::sample::{DEFAULT_BLEND_PTS, GlyphStyle};

/// Complete engine configuration: geometry, gap, shape bounds, phases and terminal policy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphConfig {
    pub strip: Strip,
    pub glyph: GlyphConfig,
    pub budget: SampleBudget,
    /// Responsive glyph widths, sorted by `max_viewport_width`.
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
    pub gap: GapConfig,
    pub shape: ShapeBounds,
    /// Phases in run order. The first must close the gap.
    pub phases: Vec<PhaseSpec>,
    pub terminal: TerminalPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphConfig {
    pub count: usize,
    /// Default glyph width, used when no breakpoint applies.
    pub width: f64,
    #[serde(flatten)]
    pub style: GlyphStyle,
}

/// Initial gap of the idle line and the point it closes onto.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GapConfig {
    pub initial_left: f64,
    pub initial_right: f64,
    pub close_x: f64,
}

impl GapConfig {
    pub fn validate(&self, strip_width: f64) -> HeartlineResult<()> {
        let Self {
            initial_left: l,
            initial_right: r,
            close_x: c,
        } = *self;
        if !(l.is_finite() && r.is_finite() && c.is_finite()) {
            return Err(HeartlineError::validation("gap values must be finite"));
        }
        if l > r {
            return Err(HeartlineError::validation(format!(
                "gap initial_left ({l}) must be <= initial_right ({r})"
            )));
        }
        if l < 0.0 || r > strip_width {
            return Err(HeartlineError::validation(format!(
                "gap [{l}, {r}] must lie within the strip [0, {strip_width}]"
            )));
        }
        if c < l || c > r {
            return Err(HeartlineError::validation(format!(
                "gap close_x ({c}) must lie within [{l}, {r}]"
            )));
        }
        Ok(())
    }
}

/// Range of the shape parameter `k`. Non-oscillating phases render at `k_min`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeBounds {
    pub k_min: f64,
    pub k_max: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseSpec {
    pub name: String,
    pub duration_ms: f64,
    #[serde(default)]
    pub ease: Ease,
    pub target: PhaseTarget,
}

/// Quantity a phase interpolates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseTarget {
    /// Move both gap edges onto `close_x`; renders the gapped line.
    CloseGap,
    /// Interpolate glyph amplitude; renders the glyph strip.
    Ramp { from: f64, to: f64 },
}

/// Behaviour once every phase has completed. Runs until the viewer is stopped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Sweep `k` between the shape bounds at full amplitude.
    OscillateK { period_ms: f64 },
    /// Alternate the amplitude between 1 and 0 at fixed `k`.
    Pulse {
        to_flat_ms: f64,
        to_glyph_ms: f64,
        #[serde(default)]
        ease: Ease,
    },
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::normalized()
    }
}

impl MorphConfig {
    /// Unit-width strip with a sweeping shape parameter.
    pub fn normalized() -> Self {
        Self {
            strip: Strip {
                width: 1.0,
                height: 1.2,
                baseline_y: 0.6,
            },
            glyph: GlyphConfig {
                count: 1,
                width: 0.176,
                style: GlyphStyle {
                    amplitude: 0.14,
                    blend_window: DEFAULT_BLEND_PTS,
                },
            },
            budget: SampleBudget {
                baseline_samples: 25,
                glyph_samples: 80,
            },
            breakpoints: vec![Breakpoint {
                max_viewport_width: 640.0,
                glyph_width: 0.24,
            }],
            gap: GapConfig {
                initial_left: 0.433,
                initial_right: 0.567,
                close_x: 0.5,
            },
            shape: ShapeBounds {
                k_min: 4.0,
                k_max: 18.0,
            },
            phases: default_phases(),
            terminal: TerminalPolicy::OscillateK { period_ms: 6000.0 },
        }
    }

    /// 500px strip with a fixed `k` and a flatten/restore pulse.
    pub fn pixel_strip() -> Self {
        Self {
            strip: Strip {
                width: 500.0,
                height: 600.0,
                baseline_y: 300.0,
            },
            glyph: GlyphConfig {
                count: 1,
                width: 88.0,
                style: GlyphStyle {
                    amplitude: 70.0,
                    blend_window: DEFAULT_BLEND_PTS,
                },
            },
            budget: SampleBudget {
                baseline_samples: 25,
                glyph_samples: 80,
            },
            breakpoints: vec![],
            gap: GapConfig {
                initial_left: 220.0,
                initial_right: 280.0,
                close_x: 250.0,
            },
            shape: ShapeBounds {
                k_min: 18.0,
                k_max: 18.0,
            },
            phases: default_phases(),
            terminal: TerminalPolicy::Pulse {
                to_flat_ms: 350.0,
                to_glyph_ms: 700.0,
                ease: Ease::InOutCubic,
            },
        }
    }

    pub fn validate(&self) -> HeartlineResult<()> {
        self.layout_builder()?;
        self.glyph.style.validate()?;
        self.gap.validate(self.strip.width)?;

        let ShapeBounds { k_min, k_max } = self.shape;
        if !(k_min.is_finite() && k_max.is_finite()) || k_min > k_max {
            return Err(HeartlineError::validation(format!(
                "shape bounds must satisfy k_min <= k_max (got {k_min}..{k_max})"
            )));
        }

        self.validate_phases()?;

        match self.terminal {
            TerminalPolicy::OscillateK { period_ms } => {
                if !period_ms.is_finite() || period_ms <= 0.0 {
                    return Err(HeartlineError::validation(format!(
                        "oscillation period must be > 0ms (got {period_ms})"
                    )));
                }
            }
            TerminalPolicy::Pulse {
                to_flat_ms,
                to_glyph_ms,
                ..
            } => {
                for (label, ms) in [("to_flat_ms", to_flat_ms), ("to_glyph_ms", to_glyph_ms)] {
                    if !ms.is_finite() || ms <= 0.0 {
                        return Err(HeartlineError::validation(format!(
                            "pulse {label} must be > 0ms (got {ms})"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_phases(&self) -> HeartlineResult<()> {
        match self.phases.first() {
            Some(p) if p.target == PhaseTarget::CloseGap => {}
            Some(p) => {
                return Err(HeartlineError::validation(format!(
                    "first phase '{}' must be close_gap",
                    p.name
                )));
            }
            None => return Err(HeartlineError::validation("at least one phase is required")),
        }

        for phase in &self.phases[1..] {
            match phase.target {
                PhaseTarget::CloseGap => {
                    return Err(HeartlineError::validation(format!(
                        "phase '{}': only the first phase may close the gap",
                        phase.name
                    )));
                }
                PhaseTarget::Ramp { from, to } => {
                    if !(0.0..=1.0).contains(&from) || !(0.0..=1.0).contains(&to) {
                        return Err(HeartlineError::validation(format!(
                            "phase '{}': ramp amplitudes must lie in [0, 1]",
                            phase.name
                        )));
                    }
                }
            }
        }

        for phase in &self.phases {
            if !phase.duration_ms.is_finite() || phase.duration_ms <= 0.0 {
                return Err(HeartlineError::validation(format!(
                    "phase '{}' duration must be > 0ms (got {})",
                    phase.name, phase.duration_ms
                )));
            }
        }
        Ok(())
    }

    /// Layout builder for this configuration's strip, glyphs and budget.
    pub fn layout_builder(&self) -> HeartlineResult<LayoutBuilder> {
        LayoutBuilder::new(
            self.strip,
            self.glyph.count,
            self.glyph.width,
            self.budget,
            self.breakpoints.clone(),
        )
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> HeartlineResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| HeartlineError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_json_path(path: &Path) -> HeartlineResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> HeartlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HeartlineError::serde(e.to_string()))
    }
}

fn default_phases() -> Vec<PhaseSpec> {
    vec![
        PhaseSpec {
            name: "closing_gap".to_owned(),
            duration_ms: 450.0,
            ease: Ease::InOutCubic,
            target: PhaseTarget::CloseGap,
        },
        PhaseSpec {
            name: "ramp".to_owned(),
            duration_ms: 900.0,
            ease: Ease::InOutCubic,
            target: PhaseTarget::Ramp { from: 0.0, to: 1.0 },
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
