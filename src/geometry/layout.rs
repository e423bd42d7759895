use crate::foundation::core::Strip;
use crate::foundation::error::{HeartlineError, HeartlineResult};

/// Horizontal span occupied by one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRegion {
    pub start_x: f64,
    pub end_x: f64,
    pub center_x: f64,
}

impl GlyphRegion {
    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }
}

/// Fixed per-run point counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SampleBudget {
    /// Points in every flat baseline run.
    pub baseline_samples: usize,
    /// Points in every curved glyph run.
    pub glyph_samples: usize,
}

impl SampleBudget {
    /// Total points of a strip carrying `glyph_count` glyphs: a baseline run before, between,
    /// and after the glyphs.
    pub fn total(&self, glyph_count: usize) -> usize {
        let baseline_runs = glyph_count + 1;
        baseline_runs * self.baseline_samples + glyph_count * self.glyph_samples
    }

    pub fn validate(&self) -> HeartlineResult<()> {
        if self.baseline_samples == 0 {
            return Err(HeartlineError::validation("baseline_samples must be > 0"));
        }
        if self.glyph_samples == 0 {
            return Err(HeartlineError::validation("glyph_samples must be > 0"));
        }
        Ok(())
    }
}

/// Responsive glyph size: applies when the viewport is at most `max_viewport_width` wide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    pub max_viewport_width: f64,
    pub glyph_width: f64,
}

/// Resolved placement of every glyph inside the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    pub strip: Strip,
    pub glyph_width: f64,
    /// Uniform space before, between, and after glyphs.
    pub gap: f64,
    pub regions: Vec<GlyphRegion>,
    pub budget: SampleBudget,
}

impl StripLayout {
    pub fn glyph_count(&self) -> usize {
        self.regions.len()
    }

    pub fn total_points(&self) -> usize {
        self.budget.total(self.glyph_count())
    }

    /// Point counts of the left and right runs of the gapped line.
    pub fn gapped_split(&self) -> (usize, usize) {
        let total = self.total_points();
        let left = total / 2;
        (left, total - left)
    }
}

/// Evenly distribute `count` glyphs of `glyph_width` so that
/// `count * glyph_width + (count + 1) * gap == strip_width`.
pub fn place_glyphs(
    strip_width: f64,
    glyph_width: f64,
    count: usize,
) -> HeartlineResult<(f64, Vec<GlyphRegion>)> {
    if !strip_width.is_finite() || strip_width <= 0.0 {
        return Err(HeartlineError::validation(format!(
            "strip width must be > 0 (got {strip_width})"
        )));
    }
    if !glyph_width.is_finite() || glyph_width <= 0.0 {
        return Err(HeartlineError::validation(format!(
            "glyph width must be > 0 (got {glyph_width})"
        )));
    }
    if count == 0 {
        return Err(HeartlineError::validation("glyph count must be >= 1"));
    }

    let n = count as f64;
    let gap = (strip_width - n * glyph_width) / (n + 1.0);
    if gap < 0.0 {
        return Err(HeartlineError::validation(format!(
            "{count} glyphs of width {glyph_width} do not fit in a strip of width {strip_width}"
        )));
    }

    let regions = (0..count)
        .map(|i| {
            let start_x = gap + (i as f64) * (glyph_width + gap);
            GlyphRegion {
                start_x,
                end_x: start_x + glyph_width,
                center_x: start_x + glyph_width / 2.0,
            }
        })
        .collect();
    Ok((gap, regions))
}

/// Computes [`StripLayout`]s for a fixed strip, glyph count, and point budget.
///
/// Only the glyph width varies between builds (through the breakpoint table), so every layout a
/// builder produces has the same total point count.
#[derive(Clone, Debug)]
pub struct LayoutBuilder {
    strip: Strip,
    glyph_count: usize,
    glyph_width: f64,
    budget: SampleBudget,
    breakpoints: Vec<Breakpoint>,
}

impl LayoutBuilder {
    /// Validate inputs up front; `breakpoints` must be sorted by `max_viewport_width`.
    pub fn new(
        strip: Strip,
        glyph_count: usize,
        glyph_width: f64,
        budget: SampleBudget,
        breakpoints: Vec<Breakpoint>,
    ) -> HeartlineResult<Self> {
        strip.validate()?;
        budget.validate()?;
        place_glyphs(strip.width, glyph_width, glyph_count)?;
        for bp in &breakpoints {
            if !bp.max_viewport_width.is_finite() || bp.max_viewport_width <= 0.0 {
                return Err(HeartlineError::validation(format!(
                    "breakpoint max_viewport_width must be > 0 (got {})",
                    bp.max_viewport_width
                )));
            }
            place_glyphs(strip.width, bp.glyph_width, glyph_count)?;
        }
        if !breakpoints
            .windows(2)
            .all(|w| w[0].max_viewport_width <= w[1].max_viewport_width)
        {
            return Err(HeartlineError::validation(
                "breakpoints must be sorted by max_viewport_width",
            ));
        }

        Ok(Self {
            strip,
            glyph_count,
            glyph_width,
            budget,
            breakpoints,
        })
    }

    pub fn strip(&self) -> Strip {
        self.strip
    }

    pub fn total_points(&self) -> usize {
        self.budget.total(self.glyph_count)
    }

    /// Glyph width for a viewport: the first breakpoint wide enough, else the default width.
    pub fn glyph_width_for_viewport(&self, viewport_width: f64) -> f64 {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width <= bp.max_viewport_width)
            .map(|bp| bp.glyph_width)
            .unwrap_or(self.glyph_width)
    }

    /// Layout with the default glyph width.
    pub fn build(&self) -> HeartlineResult<StripLayout> {
        self.build_with_glyph_width(self.glyph_width)
    }

    #[tracing::instrument(skip(self))]
    pub fn build_for_viewport(&self, viewport_width: f64) -> HeartlineResult<StripLayout> {
        self.build_with_glyph_width(self.glyph_width_for_viewport(viewport_width))
    }

    /// Recompute for a new viewport, checking the point budget did not change.
    pub fn rebuild(
        &self,
        previous: &StripLayout,
        viewport_width: f64,
    ) -> HeartlineResult<StripLayout> {
        let next = self.build_for_viewport(viewport_width)?;
        if next.total_points() != previous.total_points() {
            return Err(HeartlineError::validation(format!(
                "layout change altered the point budget ({} -> {})",
                previous.total_points(),
                next.total_points()
            )));
        }
        Ok(next)
    }

    fn build_with_glyph_width(&self, glyph_width: f64) -> HeartlineResult<StripLayout> {
        let (gap, regions) = place_glyphs(self.strip.width, glyph_width, self.glyph_count)?;
        tracing::debug!(glyph_width, gap, glyphs = regions.len(), "strip layout built");
        Ok(StripLayout {
            strip: self.strip,
            glyph_width,
            gap,
            regions,
            budget: self.budget,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
