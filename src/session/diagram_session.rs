use std::sync::Arc;

use crate::animation::animator::Animator;
use crate::animation::pose::RenderPose;
use crate::animation::scheduler::{Scheduler, VirtualScheduler};
use crate::animation::tween::TweenFrame;
use crate::foundation::error::{EmbusenError, EmbusenResult};
use crate::framing::view::ViewRegion;
use crate::render::scene::DiagramScene;
use crate::sequence::step::Step;
use crate::session::opts::PlaybackOpts;

/// One diagram instance: a step list, the selected step, its framing, and the marker animation.
///
/// The session reframes when the step list changes and retargets the animator when the
/// selected index changes. It is the only place that validates indices; the animator assumes
/// it is always handed an existing step.
pub struct DiagramSession<S: Scheduler = VirtualScheduler> {
    steps: Arc<[Step]>,
    current: usize,
    region: ViewRegion,
    opts: PlaybackOpts,
    animator: Animator<S>,
}

impl<S: Scheduler> DiagramSession<S> {
    /// Mount a diagram resting on the first step (or the origin for an empty list).
    pub fn new(steps: Arc<[Step]>, scheduler: S, opts: PlaybackOpts) -> EmbusenResult<Self> {
        opts.validate()?;
        let initial = steps.first().map(RenderPose::from_step).unwrap_or_default();
        let region = ViewRegion::from_steps(&steps, opts.padding);
        tracing::debug!(steps = steps.len(), viewbox = %region.viewbox(), "session mounted");
        Ok(Self {
            animator: Animator::with_pose(scheduler, opts.tween_opts(), initial),
            steps,
            current: 0,
            region,
            opts,
        })
    }

    /// All steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Selected step index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected step, if the list is non-empty.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    /// Framing of the whole list.
    pub fn region(&self) -> ViewRegion {
        self.region
    }

    /// Playback configuration.
    pub fn opts(&self) -> PlaybackOpts {
        self.opts
    }

    /// Last rendered marker pose.
    pub fn pose(&self) -> RenderPose {
        self.animator.pose()
    }

    /// Whether the marker is moving.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The underlying animator.
    pub fn animator(&self) -> &Animator<S> {
        &self.animator
    }

    /// Mutable access, for delivering ticks from an external scheduler.
    pub fn animator_mut(&mut self) -> &mut Animator<S> {
        &mut self.animator
    }

    /// Select a step. Re-selecting the current step does nothing.
    #[tracing::instrument(skip(self), fields(len = self.steps.len()))]
    pub fn set_current_index(&mut self, index: usize) -> EmbusenResult<()> {
        let step = step_at(&self.steps, index)?.clone();
        if index == self.current {
            return Ok(());
        }
        self.current = index;
        self.animator.retarget(&step);
        Ok(())
    }

    /// Select a step and place the marker on it without animating.
    #[tracing::instrument(skip(self), fields(len = self.steps.len()))]
    pub fn jump_to(&mut self, index: usize) -> EmbusenResult<()> {
        let step = step_at(&self.steps, index)?.clone();
        self.current = index;
        self.animator.snap_to(&step);
        Ok(())
    }

    /// Move to the next step, if there is one. Returns whether the index changed.
    pub fn next_step(&mut self) -> EmbusenResult<bool> {
        if self.current + 1 >= self.steps.len() {
            return Ok(false);
        }
        self.set_current_index(self.current + 1)?;
        Ok(true)
    }

    /// Move to the previous step, if there is one. Returns whether the index changed.
    pub fn prev_step(&mut self) -> EmbusenResult<bool> {
        if self.current == 0 || self.steps.is_empty() {
            return Ok(false);
        }
        self.set_current_index(self.current - 1)?;
        Ok(true)
    }

    /// Swap in a new step list and selection.
    ///
    /// Passing the same list (same allocation) with the same index is a no-op. Otherwise the
    /// region is recomputed and the marker retargets to `index`. An empty list only accepts
    /// index `0` and leaves the marker idle where it is.
    #[tracing::instrument(skip(self, steps), fields(len = steps.len()))]
    pub fn replace_steps(&mut self, steps: Arc<[Step]>, index: usize) -> EmbusenResult<()> {
        if Arc::ptr_eq(&self.steps, &steps) {
            return self.set_current_index(index);
        }

        if steps.is_empty() {
            if index != 0 {
                return Err(EmbusenError::validation(format!(
                    "step index {index} out of range for empty sequence"
                )));
            }
            self.animator.teardown();
        } else {
            let step = step_at(&steps, index)?.clone();
            self.animator.retarget(&step);
        }

        self.region = ViewRegion::from_steps(&steps, self.opts.padding);
        self.steps = steps;
        self.current = index;
        tracing::debug!(viewbox = %self.region.viewbox(), "reframed");
        Ok(())
    }

    /// Snapshot for drawing.
    pub fn scene(&self) -> DiagramScene<'_> {
        DiagramScene {
            steps: &self.steps,
            region: self.region,
            current: self.current_step().map(|_| self.current),
            pose: Some(self.pose()),
        }
    }

    /// Stop any in-flight animation (unmount).
    pub fn teardown(&mut self) {
        self.animator.teardown();
    }
}

fn step_at(steps: &[Step], index: usize) -> EmbusenResult<&Step> {
    steps.get(index).ok_or_else(|| {
        EmbusenError::validation(format!(
            "step index {index} out of range for {} steps",
            steps.len()
        ))
    })
}

impl DiagramSession<VirtualScheduler> {
    /// Mount on a fresh virtual clock.
    pub fn with_virtual_clock(steps: Arc<[Step]>, opts: PlaybackOpts) -> EmbusenResult<Self> {
        Self::new(steps, VirtualScheduler::new(), opts)
    }

    /// Advance the virtual clock, returning every frame rendered meanwhile.
    pub fn advance(&mut self, ms: u64) -> Vec<TweenFrame> {
        self.animator.advance(ms)
    }

    /// Run the in-flight transition to completion.
    pub fn settle(&mut self) -> Vec<TweenFrame> {
        self.animator.finish()
    }

    /// Select `index` and play the whole transition.
    pub fn play_to(&mut self, index: usize) -> EmbusenResult<Vec<TweenFrame>> {
        self.set_current_index(index)?;
        Ok(self.settle())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/diagram_session.rs"]
mod tests;
