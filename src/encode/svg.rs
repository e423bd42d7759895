//! Standalone SVG documents and PNG rasterization for offline frame output.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::path::PathDescription;
use crate::encode::sink::PathSink;
use crate::foundation::core::Strip;
use crate::foundation::error::{HeartlineError, HeartlineResult};

/// Presentation attributes of a rendered frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvgStyle {
    pub stroke: String,
    /// Stroke width as a fraction of the strip width.
    pub stroke_width_frac: f64,
    pub background: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#f2f2f7".to_owned(),
            stroke_width_frac: 0.006,
            background: "#12141c".to_owned(),
        }
    }
}

/// Wrap `path` in an SVG document whose view box is the strip.
pub fn svg_document(path: &PathDescription, strip: &Strip, style: &SvgStyle) -> String {
    let (w, h) = (strip.width, strip.height);
    let stroke_width = strip.width * style.stroke_width_frac;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}">"#,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{bg}"/>"#,
            r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{sw}" "#,
            r#"stroke-linecap="round" stroke-linejoin="round"/>"#,
            "</svg>"
        ),
        w = w,
        h = h,
        bg = style.background,
        d = path,
        stroke = style.stroke,
        sw = stroke_width,
    )
}

/// Rasterize an SVG document into opaque RGBA8 pixels of `width`×`height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> HeartlineResult<Vec<u8>> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| HeartlineError::render(format!("parse svg frame: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| HeartlineError::render("failed to allocate frame pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Output encoding of [`SvgFrameSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameFormat {
    Svg,
    /// PNG at the given pixel width; height follows the strip aspect ratio.
    Png { width: u32 },
}

/// Writes every submitted path as a numbered frame file (`frame_00000.svg`, ...).
#[derive(Debug)]
pub struct SvgFrameSink {
    dir: PathBuf,
    strip: Strip,
    style: SvgStyle,
    format: FrameFormat,
    next_index: u64,
}

impl SvgFrameSink {
    pub fn new(
        dir: impl Into<PathBuf>,
        strip: Strip,
        style: SvgStyle,
        format: FrameFormat,
    ) -> HeartlineResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create frame dir '{}'", dir.display()))?;
        Ok(Self {
            dir,
            strip,
            style,
            format,
            next_index: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.next_index
    }

    fn frame_path(&self, ext: &str) -> PathBuf {
        self.dir.join(format!("frame_{:05}.{ext}", self.next_index))
    }

    fn write_png(&self, svg: &str, width: u32, out: &Path) -> HeartlineResult<()> {
        let height = ((width as f64) * self.strip.height / self.strip.width)
            .round()
            .max(1.0) as u32;
        let data = rasterize_svg(svg, width, height)?;
        image::save_buffer_with_format(
            out,
            &data,
            width,
            height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out.display()))?;
        Ok(())
    }
}

impl PathSink for SvgFrameSink {
    fn submit(&mut self, path: &PathDescription) -> HeartlineResult<()> {
        let svg = svg_document(path, &self.strip, &self.style);
        match self.format {
            FrameFormat::Svg => {
                let out = self.frame_path("svg");
                std::fs::write(&out, svg.as_bytes())
                    .with_context(|| format!("write svg '{}'", out.display()))?;
            }
            FrameFormat::Png { width } => {
                let out = self.frame_path("png");
                self.write_png(&svg, width, &out)?;
            }
        }
        self.next_index += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/svg.rs"]
mod tests;
