//! Name-generation provider implementations

pub mod openai;

pub use openai::OpenAiProvider;

use crate::error::{NexirError, Result};
use crate::types::{NameCandidate, Tone};
use serde::Deserialize;

/// Raw candidate shape the model is asked to return
#[derive(Debug, Clone, Deserialize)]
struct RawName {
    name: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    why: String,
    rationale: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamesPayload {
    names: Vec<RawName>,
}

/// Parse name candidates out of a model reply.
///
/// Models occasionally wrap the JSON in prose or code fences, so the parser
/// slices from the first `{` to the last `}` before deserializing. Candidates
/// with an empty name are dropped; the request tone is attached to each.
pub fn parse_name_candidates(content: &str, tone: Tone) -> Result<Vec<NameCandidate>> {
    let json_start = content.find('{').unwrap_or(0);
    let json_end = content.rfind('}').map(|i| i + 1).unwrap_or(content.len());
    let json_content = &content[json_start..json_end];

    let payload: NamesPayload = serde_json::from_str(json_content).map_err(|e| {
        NexirError::parse(
            format!("Failed to parse model response as JSON: {}", e),
            Some(json_content.to_string()),
        )
    })?;

    Ok(payload
        .names
        .into_iter()
        .filter(|raw| !raw.name.trim().is_empty())
        .map(|raw| NameCandidate {
            name: raw.name,
            tagline: raw.tagline,
            why: raw.why,
            rationale: raw.rationale,
            tone,
        })
        .collect())
}
