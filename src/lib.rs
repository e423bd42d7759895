//! heartline renders a line-to-heart morph.
//!
//! A straight line with a central gap closes, a parametric heart glyph grows out of the line, and
//! the glyph then keeps deforming (sweeping its shape parameter `k`, or pulsing flat and back).
//!
//! - Build a [`MorphConfig`] (or load one from JSON)
//! - Create a [`Viewer`] with a [`PathSink`] that presents path strings
//! - Call [`Viewer::start`] on the trigger and [`Viewer::frame`] from every frame callback
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod director;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{BezPath, Millis, Point, Strip};
pub use crate::foundation::error::{HeartlineError, HeartlineResult};

pub use crate::animation::ease::Ease;
pub use crate::director::machine::{AnimationDirector, DirectorPhase, Frame, StopToken};
pub use crate::encode::path::{PathDescription, encode};
pub use crate::encode::sink::{InMemorySink, PathSink, ReadoutSink, format_k_readout};
pub use crate::encode::svg::{FrameFormat, SvgFrameSink, SvgStyle, rasterize_svg, svg_document};
pub use crate::geometry::curve::{HeartCurve, X_EXTENT, Y_MID, heart_y};
pub use crate::geometry::layout::{
    Breakpoint, GlyphRegion, LayoutBuilder, SampleBudget, StripLayout, place_glyphs,
};
pub use crate::geometry::sample::{
    DEFAULT_BLEND_PTS, GappedRuns, GlyphStyle, PointSampler, blend_weight, linspace_run,
};
pub use crate::scene::config::{
    GapConfig, GlyphConfig, MorphConfig, PhaseSpec, PhaseTarget, ShapeBounds, TerminalPolicy,
};
pub use crate::scene::stage::Stage;
pub use crate::session::viewer::{NoReadout, Viewer};
