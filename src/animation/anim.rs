use crate::{animation::ease::Ease, foundation::core::Point};

/// Linear interpolation between two values of the same type.
///
/// Implementations return `a` exactly at `t = 0` and `b` exactly at `t = 1`.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

/// Normalized progress of `elapsed_ms` through a span of `duration_ms`, clamped to `[0, 1]`.
///
/// Zero-length spans are complete immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// An eased transition between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, ease: Ease) -> Self {
        Self { from, to, ease }
    }

    /// Value at normalized progress `t`.
    pub fn sample(&self, t: f64) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Value after `elapsed_ms` of a `duration_ms` transition.
    pub fn sample_at(&self, elapsed_ms: f64, duration_ms: f64) -> T {
        self.sample(progress(elapsed_ms, duration_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
