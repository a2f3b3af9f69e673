use crate::foundation::core::Point;

pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = 180.0;

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Wrap any heading into `[0, 360)`.
pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid may round up to the modulus for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Signed rotation from `from` to `to` along the shorter arc, in `(-180, 180]`.
///
/// A half-turn tie resolves to `+180` (clockwise).
pub(crate) fn shortest_delta_deg(from: f64, to: f64) -> f64 {
    let d = normalize_deg(to - from);
    if d > HALF_TURN_DEG {
        d - FULL_TURN_DEG
    } else {
        d
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
