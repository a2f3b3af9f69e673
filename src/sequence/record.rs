use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use serde::Deserialize as _;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};

use crate::foundation::error::{EmbusenError, EmbusenResult};
use crate::sequence::step::Step;

/// An ordered list of steps for one form, as returned by the reference service.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Sequence {
    /// Upstream record id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the form this sequence performs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    /// Steps in performance order.
    pub steps: Vec<Step>,
}

#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct SequenceRecord {
    id: Option<String>,
    name: Option<String>,
    form: Option<String>,
    steps: Vec<Step>,
}

/// Picks the shape from the top-level JSON type so field errors surface unchanged.
struct SequenceVisitor;

impl<'de> Visitor<'de> for SequenceVisitor {
    type Value = Sequence;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a step array or a sequence record object")
    }

    fn visit_seq<A>(self, seq: A) -> Result<Sequence, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let steps = Vec::<Step>::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(Sequence::from_steps(steps))
    }

    fn visit_map<A>(self, map: A) -> Result<Sequence, A::Error>
    where
        A: MapAccess<'de>,
    {
        let SequenceRecord {
            id,
            name,
            form,
            steps,
        } = SequenceRecord::deserialize(MapAccessDeserializer::new(map))?;
        Ok(Sequence {
            id,
            name,
            form,
            steps,
        })
    }
}

impl<'de> serde::Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(SequenceVisitor)
    }
}

impl Sequence {
    /// Wrap already-decoded steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    /// Parse a sequence (record object or bare step array) from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> EmbusenResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| EmbusenError::serde(format!("parse sequence JSON: {e}")))
    }

    /// Parse a sequence from a JSON string.
    pub fn from_json_str(json: &str) -> EmbusenResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| EmbusenError::serde(format!("parse sequence JSON: {e}")))
    }

    /// Parse a sequence from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> EmbusenResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open sequence JSON '{}'", path.display()))?;
        let seq = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(steps = seq.steps.len(), "loaded sequence");
        Ok(seq)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the steps into a shared, immutable list.
    pub fn shared_steps(&self) -> Arc<[Step]> {
        Arc::from(self.steps.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/record.rs"]
mod tests;
