use crate::animation::pose::RenderPose;
use crate::framing::view::ViewRegion;
use crate::sequence::step::Step;

/// Everything needed to draw one diagram frame.
#[derive(Clone, Copy, Debug)]
pub struct DiagramScene<'a> {
    /// All steps, in order.
    pub steps: &'a [Step],
    /// Framing computed from `steps`.
    pub region: ViewRegion,
    /// Highlighted step, if any.
    pub current: Option<usize>,
    /// Marker pose, if the marker should be drawn.
    pub pose: Option<RenderPose>,
}

impl<'a> DiagramScene<'a> {
    /// A static scene with no highlight and no marker.
    pub fn still(steps: &'a [Step], padding: f64) -> Self {
        Self {
            steps,
            region: ViewRegion::from_steps(steps, padding),
            current: None,
            pose: None,
        }
    }
}
