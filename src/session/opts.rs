use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::animation::tween::{DEFAULT_FRAME_COUNT, DEFAULT_STEP_DURATION_MS, TweenOpts};
use crate::foundation::error::{EmbusenError, EmbusenResult};
use crate::framing::view::DEFAULT_PADDING;

/// Playback and framing configuration for a [`crate::DiagramSession`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackOpts {
    /// Time to travel between consecutive steps.
    pub step_duration_ms: u64,
    /// Frames emitted per step transition.
    pub frame_count: u32,
    /// Diagram margin on every side, in floor units.
    pub padding: f64,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
            frame_count: DEFAULT_FRAME_COUNT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl PlaybackOpts {
    /// Validate timing and framing values.
    pub fn validate(&self) -> EmbusenResult<()> {
        self.tween_opts().validate()?;
        if !self.padding.is_finite() || self.padding <= 0.0 {
            return Err(EmbusenError::validation(format!(
                "padding must be finite and > 0, got {}",
                self.padding
            )));
        }
        Ok(())
    }

    /// The timing subset used by the animator.
    pub fn tween_opts(&self) -> TweenOpts {
        TweenOpts {
            step_duration_ms: self.step_duration_ms,
            frame_count: self.frame_count,
        }
    }

    /// Load options from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> EmbusenResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open playback config '{}'", path.display()))?;
        let opts: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| EmbusenError::serde(format!("parse playback config JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
