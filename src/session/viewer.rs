use crate::director::machine::{AnimationDirector, DirectorPhase, Frame, StopToken};
use crate::encode::sink::{PathSink, ReadoutSink, format_k_readout};
use crate::foundation::core::Millis;
use crate::foundation::error::{HeartlineError, HeartlineResult};
use crate::scene::config::MorphConfig;
use crate::scene::stage::Stage;

/// Readout sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReadout;

impl ReadoutSink for NoReadout {
    fn show(&mut self, _text: &str) -> HeartlineResult<()> {
        Ok(())
    }
}

/// One morph viewer: static geometry, the animation director, and the sinks they feed.
///
/// Hosts forward their events here: [`Viewer::start`] on the trigger, [`Viewer::frame`] from
/// every frame callback, [`Viewer::resize`] on viewport changes.
#[derive(Debug)]
pub struct Viewer<P, R = NoReadout> {
    stage: Stage,
    director: AnimationDirector,
    sink: P,
    readout: R,
}

impl<P: PathSink> Viewer<P, NoReadout> {
    /// Build the viewer and present the idle gapped line.
    pub fn new(config: &MorphConfig, viewport_width: f64, sink: P) -> HeartlineResult<Self> {
        let stage = Stage::new(config, viewport_width)?;
        let director = AnimationDirector::new(config)?;
        let mut viewer = Self {
            stage,
            director,
            sink,
            readout: NoReadout,
        };
        viewer.present_idle()?;
        Ok(viewer)
    }
}

impl<P: PathSink, R: ReadoutSink> Viewer<P, R> {
    /// Attach a readout sink that receives `k = ..` once per frame.
    pub fn with_readout<R2: ReadoutSink>(self, readout: R2) -> Viewer<P, R2> {
        Viewer {
            stage: self.stage,
            director: self.director,
            sink: self.sink,
            readout,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn director(&self) -> &AnimationDirector {
        &self.director
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn readout(&self) -> &R {
        &self.readout
    }

    pub fn into_sink(self) -> P {
        self.sink
    }

    pub fn stop_token(&self) -> StopToken {
        self.director.stop_token()
    }

    /// Trigger a run. Returns `false` when one is already in flight.
    pub fn start(&mut self, now: Millis) -> bool {
        self.director.trigger(now)
    }

    /// Frame callback: advance the director and push its output to the sinks.
    ///
    /// A non-finite timestamp is an animation error while a run is in flight.
    pub fn frame(&mut self, now: Millis) -> HeartlineResult<Option<Frame>> {
        if self.director.is_running() && !now.0.is_finite() {
            return Err(HeartlineError::animation(format!(
                "frame timestamp must be finite (got {})",
                now.0
            )));
        }
        let Some(frame) = self.director.advance(&self.stage, now) else {
            return Ok(None);
        };
        self.sink.submit(&frame.path)?;
        self.readout.show(&format_k_readout(frame.k))?;
        Ok(Some(frame))
    }

    /// Recompute layout now. The idle line is re-presented immediately; a running animation picks
    /// up the new layout on its next frame. A stopped viewer stays silent.
    pub fn resize(&mut self, viewport_width: f64) -> HeartlineResult<bool> {
        let changed = self.stage.resize(viewport_width)?;
        if changed && self.director.phase() == DirectorPhase::Idle {
            self.present_idle()?;
        }
        Ok(changed)
    }

    fn present_idle(&mut self) -> HeartlineResult<()> {
        let path = self.director.idle_path(&self.stage);
        self.sink.submit(&path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/viewer.rs"]
mod tests;
