use crate::foundation::core::Point;
use crate::orientation::compass::{Facing, heading_of_facing};

/// One beat of a performed form: where the performer stands and which way they face.
///
/// Every field is optional upstream. A step without a position keeps the marker where it is;
/// a step without a recognized facing turns it to heading `0`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step {
    /// Floor position, `y` increasing away from the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Body facing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
    /// Accented beat (kiai). Styling only.
    pub emphasis_marker: bool,
    /// Technique performed on this beat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    /// Stance name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stance: Option<String>,
    /// Guard level label, see [`crate::glyph_of`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    /// Spoken count for this beat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl Step {
    /// A positioned step facing `facing`.
    pub fn at(x: f64, y: f64, facing: impl Into<Facing>) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            facing: Some(facing.into()),
            ..Self::default()
        }
    }

    /// Mark this step as accented.
    pub fn emphasized(mut self) -> Self {
        self.emphasis_marker = true;
        self
    }

    /// Heading this step asks for (`0` when facing is missing or unrecognized).
    pub fn heading_deg(&self) -> f64 {
        heading_of_facing(self.facing.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/step.rs"]
mod tests;
