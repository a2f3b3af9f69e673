/// Guard height of a stance, drawn as a small symbol next to a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardLevel {
    /// Upper level (head).
    Jodan,
    /// Middle level (torso).
    Chudan,
    /// Lower level (below the belt).
    Gedan,
}

/// Symbol drawn for labels that do not name a guard level.
pub const PLACEHOLDER_GLYPH: &str = "◇";

static GUARD_TABLE: [(GuardLevel, &str, &[&str]); 3] = [
    (GuardLevel::Jodan, "▲", &["jodan", "jōdan", "high", "upper"]),
    (GuardLevel::Chudan, "●", &["chudan", "chūdan", "middle", "mid"]),
    (GuardLevel::Gedan, "▼", &["gedan", "low", "lower"]),
];

impl GuardLevel {
    /// Case-insensitive lookup over romanized and English names.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        GUARD_TABLE
            .iter()
            .find(|(_, _, names)| names.contains(&text.as_str()))
            .map(|(level, _, _)| *level)
    }

    /// The symbol for this guard level.
    pub fn glyph(self) -> &'static str {
        GUARD_TABLE
            .iter()
            .find(|(level, _, _)| *level == self)
            .map_or(PLACEHOLDER_GLYPH, |(_, glyph, _)| *glyph)
    }
}

/// Symbol for a stance/guard label; unknown labels get [`PLACEHOLDER_GLYPH`].
pub fn glyph_of(stance_label: &str) -> &'static str {
    GuardLevel::parse(stance_label).map_or(PLACEHOLDER_GLYPH, GuardLevel::glyph)
}

#[cfg(test)]
#[path = "../../tests/unit/orientation/glyph.rs"]
mod tests;
