use std::fmt;

use crate::foundation::core::{BezPath, PathEl, Point};

/// Renderer-agnostic path: one `M` per run followed by `L` segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDescription {
    path: BezPath,
}

impl PathDescription {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bez_path(&self) -> &BezPath {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Number of disconnected sub-paths.
    pub fn move_count(&self) -> usize {
        self.count(|el| matches!(el, PathEl::MoveTo(_)))
    }

    pub fn line_count(&self) -> usize {
        self.count(|el| matches!(el, PathEl::LineTo(_)))
    }

    fn count(&self, f: impl Fn(&PathEl) -> bool) -> usize {
        self.path.elements().iter().filter(|el| f(*el)).count()
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.path.elements().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match el {
                PathEl::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                // encode only emits moves and lines
                PathEl::QuadTo(..) | PathEl::CurveTo(..) | PathEl::ClosePath => {}
            }
        }
        Ok(())
    }
}

/// Encode point runs as disconnected sub-paths. Empty runs are skipped; runs are never joined.
pub fn encode<R>(runs: impl IntoIterator<Item = R>) -> PathDescription
where
    R: AsRef<[Point]>,
{
    let mut path = BezPath::new();
    for run in runs {
        let run = run.as_ref();
        let Some((first, rest)) = run.split_first() else {
            continue;
        };
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    PathDescription { path }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/path.rs"]
mod tests;
