use std::fmt;
use std::str::FromStr;

use crate::foundation::error::EmbusenError;

/// One of the eight floor directions a performer can face.
///
/// Labels follow the upstream record vocabulary, where west is `O` (oeste).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassLabel {
    /// North, the reference forward direction.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SO,
    /// West.
    O,
    /// North-west.
    NO,
}

struct CompassEntry {
    label: CompassLabel,
    text: &'static str,
    alias: Option<&'static str>,
    heading_deg: f64,
}

// Clockwise from north, 45 degrees apart.
static COMPASS_TABLE: [CompassEntry; 8] = [
    CompassEntry { label: CompassLabel::N, text: "N", alias: None, heading_deg: 0.0 },
    CompassEntry { label: CompassLabel::NE, text: "NE", alias: None, heading_deg: 45.0 },
    CompassEntry { label: CompassLabel::E, text: "E", alias: None, heading_deg: 90.0 },
    CompassEntry { label: CompassLabel::SE, text: "SE", alias: None, heading_deg: 135.0 },
    CompassEntry { label: CompassLabel::S, text: "S", alias: None, heading_deg: 180.0 },
    CompassEntry { label: CompassLabel::SO, text: "SO", alias: Some("SW"), heading_deg: 225.0 },
    CompassEntry { label: CompassLabel::O, text: "O", alias: Some("W"), heading_deg: 270.0 },
    CompassEntry { label: CompassLabel::NO, text: "NO", alias: Some("NW"), heading_deg: 315.0 },
];

impl CompassLabel {
    /// All labels in clockwise order starting at north.
    pub const ALL: [CompassLabel; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SO,
        Self::O,
        Self::NO,
    ];

    fn entry(self) -> &'static CompassEntry {
        &COMPASS_TABLE[self as usize]
    }

    /// Heading in degrees, `N = 0` and increasing clockwise. Always in `[0, 360)`.
    pub fn heading_deg(self) -> f64 {
        self.entry().heading_deg
    }

    /// Canonical upstream text for this label.
    pub fn as_str(self) -> &'static str {
        self.entry().text
    }

    /// Case-insensitive lookup that also accepts the English `W`, `SW`, `NW` spellings.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        COMPASS_TABLE
            .iter()
            .find(|e| {
                e.text.eq_ignore_ascii_case(text)
                    || e.alias.is_some_and(|a| a.eq_ignore_ascii_case(text))
            })
            .map(|e| e.label)
    }
}

/// Heading in degrees for a compass label.
pub fn heading_of(label: CompassLabel) -> f64 {
    label.heading_deg()
}

impl fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompassLabel {
    type Err = EmbusenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| EmbusenError::validation(format!("unknown compass label '{s}'")))
    }
}

impl serde::Serialize for CompassLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for CompassLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown compass label '{raw}'")))
    }
}

/// The facing carried by a step, as received from upstream.
///
/// Unknown labels are kept verbatim instead of failing the whole record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    /// A recognized compass label.
    Compass(CompassLabel),
    /// Text that does not name any compass label.
    Unrecognized(String),
}

impl Facing {
    /// Parse upstream text, never failing.
    pub fn from_text(text: &str) -> Self {
        match CompassLabel::parse(text) {
            Some(label) => Self::Compass(label),
            None => Self::Unrecognized(text.to_owned()),
        }
    }

    /// The recognized label, if any.
    pub fn label(&self) -> Option<CompassLabel> {
        match self {
            Self::Compass(label) => Some(*label),
            Self::Unrecognized(_) => None,
        }
    }

    /// Heading in degrees; unrecognized text resolves to `0`.
    pub fn heading_deg(&self) -> f64 {
        self.label().map_or(0.0, heading_of)
    }
}

impl From<CompassLabel> for Facing {
    fn from(label: CompassLabel) -> Self {
        Self::Compass(label)
    }
}

/// Heading for an optional facing; missing or unrecognized facings resolve to `0`.
pub fn heading_of_facing(facing: Option<&Facing>) -> f64 {
    facing.map_or(0.0, Facing::heading_deg)
}

impl serde::Serialize for Facing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Compass(label) => serde::Serialize::serialize(label, serializer),
            Self::Unrecognized(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Facing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Any JSON value is accepted; only strings can name a compass point.
        let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(text) => Self::from_text(&text),
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orientation/compass.rs"]
mod tests;
