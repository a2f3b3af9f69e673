use crate::foundation::core::{Point, Rect};
use crate::sequence::step::Step;

/// Margin added on every side of the plotted points.
pub const DEFAULT_PADDING: f64 = 5.0;

/// Map a stored (up-positive) y to the drawing convention (down-positive).
///
/// Applied to every plotted point and to the marker pose before drawing. It is its own inverse.
pub fn flip_y(y: f64) -> f64 {
    -y
}

/// [`flip_y`] applied to a point.
pub fn flip_point(p: Point) -> Point {
    Point::new(p.x, flip_y(p.y))
}

/// Bounds of every positioned step, plus padding.
///
/// Bounds are in the stored convention; [`ViewRegion::view_rect`] produces the flipped drawing
/// rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewRegion {
    /// Smallest x over positioned steps.
    pub min_x: f64,
    /// Largest x over positioned steps.
    pub max_x: f64,
    /// Smallest y over positioned steps.
    pub min_y: f64,
    /// Largest y over positioned steps.
    pub max_y: f64,
    /// Margin applied uniformly on each side.
    pub padding: f64,
}

impl Default for ViewRegion {
    fn default() -> Self {
        Self::degenerate(DEFAULT_PADDING)
    }
}

impl ViewRegion {
    /// The square of half-size `padding` centred on the origin, used when nothing is plotted.
    pub fn degenerate(padding: f64) -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            padding,
        }
    }

    /// Frame every step that has a position. Steps without one are ignored.
    pub fn from_steps(steps: &[Step], padding: f64) -> Self {
        Self::from_points(steps.iter().filter_map(|s| s.position), padding)
    }

    /// Frame an arbitrary set of points.
    pub fn from_points(points: impl IntoIterator<Item = Point>, padding: f64) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::degenerate(padding);
        };

        points.fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
                padding,
            },
            |r, p| Self {
                min_x: r.min_x.min(p.x),
                max_x: r.max_x.max(p.x),
                min_y: r.min_y.min(p.y),
                max_y: r.max_y.max(p.y),
                padding,
            },
        )
    }

    /// Padded bounds in the stored convention.
    pub fn padded_bounds(&self) -> Rect {
        Rect::new(
            self.min_x - self.padding,
            self.min_y - self.padding,
            self.max_x + self.padding,
            self.max_y + self.padding,
        )
    }

    /// Whether a stored-convention point lies inside the padded bounds.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.padded_bounds();
        r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
    }

    /// Drawing rectangle: `[min_x-p, max_x+p] × [-(max_y+p), -(min_y-p)]`.
    pub fn view_rect(&self) -> Rect {
        Rect::new(
            self.min_x - self.padding,
            flip_y(self.max_y + self.padding),
            self.max_x + self.padding,
            flip_y(self.min_y - self.padding),
        )
    }

    /// SVG `viewBox` attribute value (`"x y width height"`) for [`ViewRegion::view_rect`].
    pub fn viewbox(&self) -> String {
        viewbox_of(self.view_rect())
    }
}

/// `"x y width height"` for an already-flipped drawing rectangle.
pub(crate) fn viewbox_of(r: Rect) -> String {
    format!(
        "{} {} {} {}",
        fmt_num(r.x0),
        fmt_num(r.y0),
        fmt_num(r.width()),
        fmt_num(r.height())
    )
}

/// Shortest decimal text for a coordinate, without a trailing `.0` or a negative zero.
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/framing/view.rs"]
mod tests;
