//! Phase-sequenced morph state machine.
//!
//! The host calls [`AnimationDirector::advance`] once per frame with a monotonic timestamp. All
//! timing derives from wall-clock elapsed time, so irregular frame intervals (or a single late
//! frame spanning several phases) land on the same output as a steady frame rate would.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::animation::anim::{Tween, progress};
use crate::animation::osc::{Oscillation, PulseCycle};
use crate::encode::path::{PathDescription, encode};
use crate::foundation::core::Millis;
use crate::foundation::error::HeartlineResult;
use crate::scene::config::{
    GapConfig, MorphConfig, PhaseSpec, PhaseTarget, ShapeBounds, TerminalPolicy,
};
use crate::scene::stage::Stage;

/// Where the director is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectorPhase {
    /// Not started; the host shows the idle gapped line.
    Idle,
    /// Running the configured phase at this index.
    Phase(usize),
    /// All phases done; the terminal policy runs until stopped.
    Terminal,
    /// Cancelled through a [`StopToken`].
    Stopped,
}

/// Cancels a running director. Checked at the top of every [`AnimationDirector::advance`].
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Output of one [`AnimationDirector::advance`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub phase: DirectorPhase,
    pub path: PathDescription,
    pub k: f64,
    pub amplitude: f64,
    /// Gap edges while the line is still open.
    pub gap: Option<(f64, f64)>,
}

#[derive(Clone, Copy, Debug)]
enum TerminalMotion {
    OscillateK(Oscillation),
    Pulse(PulseCycle),
}

#[derive(Clone, Copy, Debug)]
struct AnimationState {
    phase: DirectorPhase,
    phase_start: Millis,
    amplitude: f64,
    k: f64,
}

impl AnimationState {
    fn idle(k: f64) -> Self {
        Self {
            phase: DirectorPhase::Idle,
            phase_start: Millis::ZERO,
            amplitude: 0.0,
            k,
        }
    }
}

/// Drives one morph run: closing gap, amplitude ramp(s), then the terminal policy.
#[derive(Debug)]
pub struct AnimationDirector {
    phases: Vec<PhaseSpec>,
    gap: GapConfig,
    shape: ShapeBounds,
    terminal: TerminalMotion,
    state: AnimationState,
    stop: StopToken,
}

impl AnimationDirector {
    pub fn new(config: &MorphConfig) -> HeartlineResult<Self> {
        config.validate()?;
        let terminal = match config.terminal {
            TerminalPolicy::OscillateK { period_ms } => TerminalMotion::OscillateK(
                Oscillation::new(config.shape.k_min, config.shape.k_max, period_ms)?,
            ),
            TerminalPolicy::Pulse {
                to_flat_ms,
                to_glyph_ms,
                ease,
            } => TerminalMotion::Pulse(PulseCycle {
                to_flat_ms,
                to_glyph_ms,
                ease,
            }),
        };

        Ok(Self {
            phases: config.phases.clone(),
            gap: config.gap,
            shape: config.shape,
            terminal,
            state: AnimationState::idle(config.shape.k_min),
            stop: StopToken::default(),
        })
    }

    pub fn phase(&self) -> DirectorPhase {
        self.state.phase
    }

    /// Name of the running phase, if a configured phase is active.
    pub fn phase_name(&self) -> Option<&str> {
        match self.state.phase {
            DirectorPhase::Phase(i) => self.phases.get(i).map(|p| p.name.as_str()),
            _ => None,
        }
    }

    /// Shape parameter of the last produced frame.
    pub fn k(&self) -> f64 {
        self.state.k
    }

    /// Glyph amplitude of the last produced frame.
    pub fn amplitude(&self) -> f64 {
        self.state.amplitude
    }

    /// `true` from a successful trigger until the run is stopped.
    pub fn is_running(&self) -> bool {
        matches!(
            self.state.phase,
            DirectorPhase::Phase(_) | DirectorPhase::Terminal
        )
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Start a run at `now`. Ignored (returns `false`) while a run is in flight.
    pub fn trigger(&mut self, now: Millis) -> bool {
        if self.is_running() && !self.stop.is_stopped() {
            tracing::debug!(now = now.0, "trigger ignored: run in flight");
            return false;
        }
        self.stop.reset();
        self.state = AnimationState {
            phase: DirectorPhase::Phase(0),
            phase_start: now,
            amplitude: 0.0,
            k: self.shape.k_min,
        };
        tracing::debug!(now = now.0, "morph run triggered");
        true
    }

    /// The open line shown before a run starts.
    pub fn idle_path(&self, stage: &Stage) -> PathDescription {
        let runs = stage
            .sampler()
            .gapped_line(self.gap.initial_left, self.gap.initial_right);
        encode(runs.runs())
    }

    /// Produce the frame for `now`, or `None` when idle or stopped.
    pub fn advance(&mut self, stage: &Stage, now: Millis) -> Option<Frame> {
        if self.stop.is_stopped() && self.is_running() {
            tracing::debug!(now = now.0, "morph run stopped");
            self.state.phase = DirectorPhase::Stopped;
        }
        if !self.is_running() {
            return None;
        }

        self.catch_up(now);
        let elapsed = now.since(self.state.phase_start);
        let sampler = stage.sampler();

        let frame = match self.state.phase {
            DirectorPhase::Phase(i) => {
                let spec = &self.phases[i];
                let t = progress(elapsed, spec.duration_ms);
                match spec.target {
                    PhaseTarget::CloseGap => {
                        let left = Tween::new(self.gap.initial_left, self.gap.close_x, spec.ease)
                            .sample(t);
                        let right =
                            Tween::new(self.gap.initial_right, self.gap.close_x, spec.ease)
                                .sample(t);
                        let runs = sampler.gapped_line(left, right);
                        Frame {
                            phase: self.state.phase,
                            path: encode(runs.runs()),
                            k: self.shape.k_min,
                            amplitude: 0.0,
                            gap: Some((left, right)),
                        }
                    }
                    PhaseTarget::Ramp { from, to } => {
                        let amplitude = Tween::new(from, to, spec.ease).sample(t);
                        self.glyph_frame(stage, self.shape.k_min, amplitude)
                    }
                }
            }
            DirectorPhase::Terminal => match self.terminal {
                TerminalMotion::OscillateK(osc) => {
                    self.glyph_frame(stage, osc.sample(elapsed), 1.0)
                }
                TerminalMotion::Pulse(pulse) => {
                    self.glyph_frame(stage, self.shape.k_min, pulse.sample(elapsed))
                }
            },
            DirectorPhase::Idle | DirectorPhase::Stopped => return None,
        };

        self.state.k = frame.k;
        self.state.amplitude = frame.amplitude;
        Some(frame)
    }

    /// Step past every phase whose duration `now` has strictly exceeded. Phase boundaries stay on
    /// the nominal schedule regardless of when frames arrive.
    fn catch_up(&mut self, now: Millis) {
        while let DirectorPhase::Phase(i) = self.state.phase {
            let duration = self.phases[i].duration_ms;
            if now.since(self.state.phase_start) <= duration {
                break;
            }
            self.state.phase_start = self.state.phase_start.offset(duration);
            self.state.phase = if i + 1 < self.phases.len() {
                DirectorPhase::Phase(i + 1)
            } else {
                DirectorPhase::Terminal
            };
            tracing::debug!(
                from = %self.phases[i].name,
                to = ?self.state.phase,
                at_ms = self.state.phase_start.0,
                "phase complete"
            );
        }
    }

    fn glyph_frame(&self, stage: &Stage, k: f64, amplitude: f64) -> Frame {
        let pts = stage.sampler().glyph_strip(k, amplitude);
        Frame {
            phase: self.state.phase,
            path: encode([pts]),
            k,
            amplitude,
            gap: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/director/machine.rs"]
mod tests;
