use crate::animation::pose::RenderPose;
use crate::animation::scheduler::{Scheduler, TimerId, VirtualScheduler};
use crate::animation::tween::{StepTween, TweenFrame, TweenOpts};
use crate::foundation::core::TimeMs;
use crate::sequence::step::Step;

/// Where the marker animation currently is.
#[derive(Clone, Debug)]
pub enum AnimState {
    /// Nothing in flight; `pose` is what is on screen.
    Idle {
        /// Last rendered pose.
        pose: RenderPose,
    },
    /// A transition is running on `timer`.
    Animating {
        /// Remaining frames.
        tween: StepTween,
        /// The single live timer driving `tween`.
        timer: TimerId,
        /// Last rendered pose (the tween's start until the first frame lands).
        last: RenderPose,
    },
}

impl AnimState {
    /// Last rendered pose in either state.
    pub fn pose(&self) -> RenderPose {
        match self {
            Self::Idle { pose } => *pose,
            Self::Animating { last, .. } => *last,
        }
    }
}

/// Drives the marker from step to step.
///
/// The timer lives inside [`AnimState::Animating`], so there is never more than one per
/// animator: every transition into `Animating` first cancels the previous timer, and the
/// animator cancels whatever is pending when it is torn down or dropped.
pub struct Animator<S: Scheduler> {
    scheduler: S,
    opts: TweenOpts,
    state: AnimState,
}

impl<S: Scheduler> Animator<S> {
    /// An idle animator resting on `initial`.
    pub fn new(scheduler: S, opts: TweenOpts, initial: &Step) -> Self {
        Self::with_pose(scheduler, opts, RenderPose::from_step(initial))
    }

    /// An idle animator resting on an explicit pose.
    pub fn with_pose(scheduler: S, opts: TweenOpts, pose: RenderPose) -> Self {
        Self {
            scheduler,
            opts,
            state: AnimState::Idle { pose },
        }
    }

    /// Last rendered pose.
    pub fn pose(&self) -> RenderPose {
        self.state.pose()
    }

    /// Current state.
    pub fn state(&self) -> &AnimState {
        &self.state
    }

    /// Whether a timer is live.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimState::Animating { .. })
    }

    /// Timing used for the next transition.
    pub fn opts(&self) -> TweenOpts {
        self.opts
    }

    /// Change timing; applies from the next [`Animator::retarget`].
    pub fn set_opts(&mut self, opts: TweenOpts) {
        self.opts = opts;
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Start moving toward `step` from whatever pose was last rendered.
    ///
    /// Any running transition is cancelled first, so a rapid sequence of retargets stays
    /// continuous and never leaves two timers alive.
    pub fn retarget(&mut self, step: &Step) {
        let from = self.pose();
        let restarted = self.cancel_pending();
        let tween = StepTween::new(from, step, self.opts);
        let timer = self
            .scheduler
            .start_repeating(self.opts.frame_interval_ms());
        tracing::debug!(
            ?timer,
            restarted,
            turn_deg = tween.turn_deg(),
            "animation started"
        );
        self.state = AnimState::Animating {
            tween,
            timer,
            last: from,
        };
    }

    /// React to a timer tick. Ticks from any timer other than the live one are ignored.
    ///
    /// Returns the frame rendered by this tick. After the last frame the timer is cancelled and
    /// the animator settles on the exact target pose.
    pub fn on_timer(&mut self, id: TimerId) -> Option<TweenFrame> {
        let AnimState::Animating { tween, timer, last } = &mut self.state else {
            tracing::trace!(?id, "tick while idle");
            return None;
        };
        if *timer != id {
            tracing::trace!(?id, live = ?timer, "stale tick");
            return None;
        }

        let frame = tween.next()?;
        *last = frame.pose;
        tracing::trace!(
            frame = frame.frame,
            x = frame.pose.x,
            y = frame.pose.y,
            heading = frame.pose.heading,
            "frame"
        );

        if tween.is_finished() {
            let timer = *timer;
            self.scheduler.cancel(timer);
            self.state = AnimState::Idle { pose: frame.pose };
            tracing::debug!(?timer, "animation settled");
        }
        Some(frame)
    }

    /// Place the marker on `step` immediately, without a transition.
    ///
    /// A step without a position keeps the current position, as a transition would.
    pub fn snap_to(&mut self, step: &Step) {
        self.cancel_pending();
        let pose = StepTween::new(self.pose(), step, self.opts).target();
        self.state = AnimState::Idle { pose };
        tracing::debug!(?pose, "snapped");
    }

    /// Cancel any pending timer and hold the last rendered pose.
    pub fn teardown(&mut self) {
        if self.cancel_pending() {
            tracing::debug!("animation torn down mid-flight");
        }
    }

    /// Cancel the live timer (if any) and fall back to `Idle` at the last rendered pose.
    fn cancel_pending(&mut self) -> bool {
        let AnimState::Animating { timer, last, .. } = self.state else {
            return false;
        };
        self.scheduler.cancel(timer);
        self.state = AnimState::Idle { pose: last };
        true
    }
}

impl<S: Scheduler> Drop for Animator<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Animator<VirtualScheduler> {
    /// Advance the virtual clock by `ms`, delivering every tick that falls due.
    pub fn advance(&mut self, ms: u64) -> Vec<TweenFrame> {
        let deadline = self.scheduler.now().saturating_add(ms);
        self.advance_until(deadline)
    }

    /// Deliver every tick due up to `deadline`.
    pub fn advance_until(&mut self, deadline: TimeMs) -> Vec<TweenFrame> {
        let mut out = Vec::new();
        while let Some(tick) = self.scheduler.pop_due(deadline) {
            if let Some(frame) = self.on_timer(tick.timer) {
                out.push(frame);
            }
        }
        self.scheduler.advance_to(deadline);
        out
    }

    /// Run the current transition to completion.
    pub fn finish(&mut self) -> Vec<TweenFrame> {
        let mut out = Vec::new();
        while let AnimState::Animating { tween, .. } = &self.state {
            let remaining = tween.len() as u64;
            let step_ms = self.opts.frame_interval_ms();
            let batch = self.advance(remaining.max(1) * step_ms);
            if batch.is_empty() {
                break;
            }
            out.extend(batch);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
