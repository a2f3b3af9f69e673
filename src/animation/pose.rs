use crate::foundation::core::Point;
use crate::foundation::math::{Lerp, normalize_deg};
use crate::sequence::step::Step;

/// The marker's rendered position and heading.
///
/// `heading` is unbounded: while a tween is running it may leave `[0, 360)` so rotation stays
/// continuous. Settled poses always come back inside the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderPose {
    /// Floor x.
    pub x: f64,
    /// Floor y, stored convention (up-positive).
    pub y: f64,
    /// Heading in degrees, clockwise from north.
    pub heading: f64,
}

impl RenderPose {
    /// Build a pose from components.
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Initial pose for a step: its position (origin if absent) and its heading.
    pub fn from_step(step: &Step) -> Self {
        let p = step.position.unwrap_or(Point::ORIGIN);
        Self::new(p.x, p.y, step.heading_deg())
    }

    /// The floor position.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Heading wrapped into `[0, 360)`.
    pub fn heading_normalized(&self) -> f64 {
        normalize_deg(self.heading)
    }
}

impl Lerp for RenderPose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: <f64 as Lerp>::lerp(&a.x, &b.x, t),
            y: <f64 as Lerp>::lerp(&a.y, &b.y, t),
            heading: <f64 as Lerp>::lerp(&a.heading, &b.heading, t),
        }
    }
}
