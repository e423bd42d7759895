//! Point sequences for the two strip configurations.
//!
//! Both configurations produce exactly [`StripLayout::total_points`] points, so index `i` of the
//! gapped line and index `i` of the glyph strip can be blended against each other.

use std::ops::Range;

use crate::animation::anim::Lerp;
use crate::animation::ease::smoothstep;
use crate::foundation::core::Point;
use crate::foundation::error::{HeartlineError, HeartlineResult};
use crate::geometry::curve::{HeartCurve, X_EXTENT};
use crate::geometry::layout::{GlyphRegion, StripLayout};

/// Blend window used when none is configured.
pub const DEFAULT_BLEND_PTS: usize = 10;

/// Vertical styling of glyph runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphStyle {
    /// Vertical scale applied to the centered curve.
    pub amplitude: f64,
    /// Samples at each end of a glyph run eased toward the baseline.
    #[serde(default = "default_blend_window")]
    pub blend_window: usize,
}

fn default_blend_window() -> usize {
    DEFAULT_BLEND_PTS
}

impl GlyphStyle {
    pub fn validate(&self) -> HeartlineResult<()> {
        if !self.amplitude.is_finite() {
            return Err(HeartlineError::validation("glyph amplitude must be finite"));
        }
        if self.blend_window == 0 {
            return Err(HeartlineError::validation("glyph blend_window must be >= 1"));
        }
        Ok(())
    }
}

/// The two disjoint runs of the gapped line.
#[derive(Clone, Debug, PartialEq)]
pub struct GappedRuns {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

impl GappedRuns {
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn runs(&self) -> [&[Point]; 2] {
        [self.left.as_slice(), self.right.as_slice()]
    }

    /// Both runs in strip order.
    pub fn points(&self) -> Vec<Point> {
        self.left.iter().chain(self.right.iter()).copied().collect()
    }
}

/// `n` points evenly spaced from `x0` to `x1` at height `y`.
///
/// Both ends land exactly on `x0` and `x1`; a single-point run sits at `x0`.
pub fn linspace_run(x0: f64, x1: f64, y: f64, n: usize) -> Vec<Point> {
    let denom = if n < 2 { 1.0 } else { (n - 1) as f64 };
    (0..n)
        .map(|i| Point::new(<f64 as Lerp>::lerp(&x0, &x1, i as f64 / denom), y))
        .collect()
}

/// Weight of sample `i` of an `n`-point glyph run: `0` at either end, `1` once `window` samples
/// in, smoothstep in between. A zero window is treated as one sample.
pub fn blend_weight(i: usize, n: usize, window: usize) -> f64 {
    let w = window.max(1) as f64;
    let from_start = i as f64 / w;
    let from_end = n.saturating_sub(1).saturating_sub(i) as f64 / w;
    smoothstep(from_start.min(from_end).min(1.0))
}

/// Samples a [`StripLayout`] into point sequences.
#[derive(Clone, Debug)]
pub struct PointSampler {
    layout: StripLayout,
    style: GlyphStyle,
}

impl PointSampler {
    pub fn new(layout: StripLayout, style: GlyphStyle) -> HeartlineResult<Self> {
        style.validate()?;
        Ok(Self { layout, style })
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn style(&self) -> GlyphStyle {
        self.style
    }

    pub fn baseline_y(&self) -> f64 {
        self.layout.strip.baseline_y
    }

    /// Line from `0` to `gap_left` and from `gap_right` to the strip end.
    ///
    /// Per-frame inputs are clamped into the strip; a crossed gap collapses to its left edge.
    pub fn gapped_line(&self, gap_left: f64, gap_right: f64) -> GappedRuns {
        let width = self.layout.strip.width;
        let y = self.baseline_y();
        let gap_left = gap_left.clamp(0.0, width);
        let gap_right = gap_right.clamp(gap_left, width);
        let (n_left, n_right) = self.layout.gapped_split();

        GappedRuns {
            left: linspace_run(0.0, gap_left, y, n_left),
            right: linspace_run(gap_right, width, y, n_right),
        }
    }

    /// One glyph run at full amplitude, blended into the baseline at both ends.
    pub fn glyph_run(&self, region: &GlyphRegion, k: f64) -> Vec<Point> {
        self.glyph_run_scaled(region, k, 1.0)
    }

    /// Baseline runs with every glyph embedded, glyph offsets scaled by `amplitude` in `[0, 1]`.
    pub fn glyph_strip(&self, k: f64, amplitude: f64) -> Vec<Point> {
        let amplitude = amplitude.clamp(0.0, 1.0);
        let y = self.baseline_y();
        let width = self.layout.strip.width;
        let n_base = self.layout.budget.baseline_samples;
        let regions = &self.layout.regions;

        let mut pts = Vec::with_capacity(self.layout.total_points());
        let mut cursor = 0.0;
        for region in regions {
            pts.extend(linspace_run(cursor, region.start_x, y, n_base));
            pts.extend(self.glyph_run_scaled(region, k, amplitude));
            cursor = region.end_x;
        }
        pts.extend(linspace_run(cursor, width, y, n_base));
        pts
    }

    /// Index ranges of the glyph runs inside [`PointSampler::glyph_strip`] output.
    pub fn glyph_ranges(&self) -> Vec<Range<usize>> {
        let n_base = self.layout.budget.baseline_samples;
        let n_glyph = self.layout.budget.glyph_samples;
        (0..self.layout.glyph_count())
            .map(|i| {
                let start = (i + 1) * n_base + i * n_glyph;
                start..start + n_glyph
            })
            .collect()
    }

    fn glyph_run_scaled(&self, region: &GlyphRegion, k: f64, amplitude: f64) -> Vec<Point> {
        let n = self.layout.budget.glyph_samples;
        let y = self.baseline_y();
        let x_scale = (region.width() / 2.0) / X_EXTENT;
        let curve = HeartCurve::new(k);
        let denom = if n < 2 { 1.0 } else { (n - 1) as f64 };

        (0..n)
            .map(|i| {
                let (x_math, y_centered) = curve.sample_centered(i as f64 / denom);
                let offset = -y_centered * self.style.amplitude;
                let blended = blend_weight(i, n, self.style.blend_window) * offset;
                Point::new(region.center_x + x_math * x_scale, y + amplitude * blended)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sample.rs"]
mod tests;
