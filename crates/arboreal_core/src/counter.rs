//! Eased numeric counter for stat figures.
//!
//! The animation itself is host-driven: the host calls [`CounterAnimation::frame`]
//! once per animation frame with the frame timestamp and stops re-queueing
//! after the first finished frame. Frames reach the page as `Effect::SetText`.

use crate::host::{HostResult, PageHost};
use crate::model::effect::{Effect, ElementId};

/// Ease-out quadratic curve over `progress` in `[0, 1]`.
pub fn ease_out_quad(progress: f64) -> f64 {
    1.0 - (1.0 - progress) * (1.0 - progress)
}

/// One running counter animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    start: f64,
    end: f64,
    duration_ms: f64,
    started_at_ms: f64,
}

/// Value displayed for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

impl CounterFrame {
    pub fn text(self) -> String {
        self.value.to_string()
    }

    pub fn effect(self, target: ElementId) -> Effect {
        Effect::text(target, self.text())
    }
}

impl CounterAnimation {
    /// Starts an animation at `started_at_ms` (host clock, milliseconds).
    pub fn new(start: f64, end: f64, duration_ms: f64, started_at_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            started_at_ms,
        }
    }

    /// Progress in `[0, 1]` at host time `now_ms`.
    ///
    /// A non-positive duration completes immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Computes the displayed value at host time `now_ms`.
    pub fn frame(&self, now_ms: f64) -> CounterFrame {
        let progress = self.progress(now_ms);
        let eased = ease_out_quad(progress);
        let value = (eased * (self.end - self.start) + self.start).floor();
        CounterFrame {
            value: value as i64,
            finished: progress >= 1.0,
        }
    }

    /// Writes the frame at `now_ms` into `target` through `host`.
    ///
    /// Returns whether the animation has finished and must not be re-queued.
    pub fn render(
        &self,
        host: &mut impl PageHost,
        target: ElementId,
        now_ms: f64,
    ) -> HostResult<bool> {
        let frame = self.frame(now_ms);
        host.apply(&frame.effect(target))?;
        Ok(frame.finished)
    }
}
