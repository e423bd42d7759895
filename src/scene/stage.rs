use crate::foundation::error::HeartlineResult;
use crate::geometry::layout::{LayoutBuilder, StripLayout};
use crate::geometry::sample::PointSampler;
use crate::scene::config::MorphConfig;

/// Per-viewer static geometry: the current layout and a sampler over it.
///
/// The director borrows the stage every frame, so a resize between frames is picked up on the
/// next resample without restarting the run.
#[derive(Clone, Debug)]
pub struct Stage {
    builder: LayoutBuilder,
    sampler: PointSampler,
    viewport_width: f64,
}

impl Stage {
    pub fn new(config: &MorphConfig, viewport_width: f64) -> HeartlineResult<Self> {
        config.validate()?;
        let builder = config.layout_builder()?;
        let layout = builder.build_for_viewport(viewport_width)?;
        let sampler = PointSampler::new(layout, config.glyph.style)?;
        Ok(Self {
            builder,
            sampler,
            viewport_width,
        })
    }

    pub fn sampler(&self) -> &PointSampler {
        &self.sampler
    }

    pub fn layout(&self) -> &StripLayout {
        self.sampler.layout()
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Recompute the layout for a new viewport. Returns `true` when the glyph placement changed.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport_width: f64) -> HeartlineResult<bool> {
        let next = self.builder.rebuild(self.sampler.layout(), viewport_width)?;
        self.viewport_width = viewport_width;
        if next == *self.sampler.layout() {
            return Ok(false);
        }
        tracing::debug!(
            glyph_width = next.glyph_width,
            "layout changed on resize"
        );
        self.sampler = PointSampler::new(next, self.sampler.style())?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
