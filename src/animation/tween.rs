use std::iter::FusedIterator;

use crate::animation::pose::RenderPose;
use crate::foundation::core::TimeMs;
use crate::foundation::error::{EmbusenError, EmbusenResult};
use crate::foundation::math::{Lerp, shortest_delta_deg};
use crate::sequence::step::Step;

/// Default time to travel from one step to the next.
pub const DEFAULT_STEP_DURATION_MS: u64 = 500;
/// Default number of frames emitted per step transition.
pub const DEFAULT_FRAME_COUNT: u32 = 20;

/// Timing of a single step transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TweenOpts {
    /// Total transition time.
    pub step_duration_ms: u64,
    /// Frames emitted per transition (`> 0`).
    pub frame_count: u32,
}

impl Default for TweenOpts {
    fn default() -> Self {
        Self {
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }
}

impl TweenOpts {
    /// Reject option combinations that cannot drive a timer.
    pub fn validate(&self) -> EmbusenResult<()> {
        if self.frame_count == 0 {
            return Err(EmbusenError::validation("frame_count must be > 0"));
        }
        if self.step_duration_ms < u64::from(self.frame_count) {
            return Err(EmbusenError::validation(format!(
                "step_duration_ms ({}) must be >= frame_count ({})",
                self.step_duration_ms, self.frame_count
            )));
        }
        if self.step_duration_ms % u64::from(self.frame_count) != 0 {
            return Err(EmbusenError::validation(format!(
                "step_duration_ms ({}) must be a multiple of frame_count ({})",
                self.step_duration_ms, self.frame_count
            )));
        }
        Ok(())
    }

    /// Timer period between emitted frames (at least 1ms).
    pub fn frame_interval_ms(&self) -> u64 {
        (self.step_duration_ms / u64::from(self.frame_count.max(1))).max(1)
    }
}

/// One emitted frame of a step transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TweenFrame {
    /// 1-based frame number; the last frame equals the frame count.
    pub frame: u32,
    /// Offset from the start of the transition: `frame` whole timer periods.
    pub at: TimeMs,
    /// Interpolated pose.
    pub pose: RenderPose,
}

/// Lazy, finite transition from a rendered pose to a target step.
///
/// Heading is interpolated along the shorter arc: the start heading is re-expressed so that
/// `target.heading - start.heading` lies in `(-180, 180]`, then all three components are
/// interpolated linearly. The final frame is exactly the target pose.
#[derive(Clone, Debug)]
pub struct StepTween {
    start: RenderPose,
    target: RenderPose,
    emitted: u32,
    total: u32,
    interval_ms: u64,
}

impl StepTween {
    /// Plan a transition from `from` toward `step`.
    ///
    /// A step without a position keeps `from`'s position. A zero frame count is treated as one
    /// frame so the transition always lands on the target.
    pub fn new(from: RenderPose, step: &Step, opts: TweenOpts) -> Self {
        let target_heading = step.heading_deg();
        let (tx, ty) = step.position.map_or((from.x, from.y), |p| (p.x, p.y));
        let delta = shortest_delta_deg(from.heading, target_heading);

        Self {
            start: RenderPose::new(from.x, from.y, target_heading - delta),
            target: RenderPose::new(tx, ty, target_heading),
            emitted: 0,
            total: opts.frame_count.max(1),
            interval_ms: opts.frame_interval_ms(),
        }
    }

    /// Wrap-corrected start pose.
    pub fn start(&self) -> RenderPose {
        self.start
    }

    /// Pose the transition settles on.
    pub fn target(&self) -> RenderPose {
        self.target
    }

    /// Signed rotation this transition performs; always within `(-180, 180]`.
    pub fn turn_deg(&self) -> f64 {
        self.target.heading - self.start.heading
    }

    /// Total frames this transition emits.
    pub fn frame_count(&self) -> u32 {
        self.total
    }

    /// Whether every frame has been emitted.
    pub fn is_finished(&self) -> bool {
        self.emitted >= self.total
    }

    /// Pose at 1-based `frame`, clamped to the transition.
    pub fn pose_at(&self, frame: u32) -> RenderPose {
        let frame = frame.min(self.total);
        if frame == self.total {
            return self.target;
        }
        let t = f64::from(frame) / f64::from(self.total);
        RenderPose::lerp(&self.start, &self.target, t)
    }

    /// Time of the tick that delivers `frame`, one timer period apart.
    fn time_of(&self, frame: u32) -> TimeMs {
        TimeMs(self.interval_ms.saturating_mul(u64::from(frame)))
    }
}

impl Iterator for StepTween {
    type Item = TweenFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        self.emitted += 1;
        Some(TweenFrame {
            frame: self.emitted,
            at: self.time_of(self.emitted),
            pose: self.pose_at(self.emitted),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.emitted) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StepTween {}

impl FusedIterator for StepTween {}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
