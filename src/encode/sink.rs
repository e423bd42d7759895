use crate::encode::path::PathDescription;
use crate::foundation::error::HeartlineResult;

/// Consumer of one encoded path per frame.
///
/// Errors are propagated to whoever drove the frame; a sink must not swallow its own failures.
pub trait PathSink {
    /// Replace the presented path with `path`.
    fn submit(&mut self, path: &PathDescription) -> HeartlineResult<()>;
}

/// Consumer of the per-frame shape parameter readout.
pub trait ReadoutSink {
    /// Show `text` (formatted by [`format_k_readout`]).
    fn show(&mut self, text: &str) -> HeartlineResult<()>;
}

/// `k = 4.00`-style readout text.
pub fn format_k_readout(k: f64) -> String {
    format!("k = {k:.2}")
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Submitted paths in order.
    pub(crate) paths: Vec<String>,
    /// Readout texts in order.
    pub(crate) readouts: Vec<String>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the submitted paths.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Most recently submitted path, if any.
    pub fn last(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }

    /// Borrow the shown readouts.
    pub fn readouts(&self) -> &[String] {
        &self.readouts
    }

    /// Most recently shown readout, if any.
    pub fn last_readout(&self) -> Option<&str> {
        self.readouts.last().map(String::as_str)
    }
}

impl PathSink for InMemorySink {
    fn submit(&mut self, path: &PathDescription) -> HeartlineResult<()> {
        self.paths.push(path.to_string());
        Ok(())
    }
}

impl ReadoutSink for InMemorySink {
    fn show(&mut self, text: &str) -> HeartlineResult<()> {
        self.readouts.push(text.to_owned());
        Ok(())
    }
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn submit(&mut self, path: &PathDescription) -> HeartlineResult<()> {
        (**self).submit(path)
    }
}

impl<S: ReadoutSink + ?Sized> ReadoutSink for &mut S {
    fn show(&mut self, text: &str) -> HeartlineResult<()> {
        (**self).show(text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
