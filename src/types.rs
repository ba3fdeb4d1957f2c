//! Core types and structures for nexir

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Brand-voice tone used to bias TLD choice and generation prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Luxury,
    Playful,
    Serious,
    Minimal,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Luxury, Tone::Playful, Tone::Serious, Tone::Minimal];
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Luxury => write!(f, "luxury"),
            Tone::Playful => write!(f, "playful"),
            Tone::Serious => write!(f, "serious"),
            Tone::Minimal => write!(f, "minimal"),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "luxury" => Ok(Tone::Luxury),
            "playful" => Ok(Tone::Playful),
            "serious" => Ok(Tone::Serious),
            "minimal" => Ok(Tone::Minimal),
            other => Err(format!("unknown tone: {}", other)),
        }
    }
}

/// Name generation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    Brandable,
    Real,
    Compound,
    Invented,
}

impl NameStyle {
    pub const ALL: [NameStyle; 4] = [
        NameStyle::Brandable,
        NameStyle::Real,
        NameStyle::Compound,
        NameStyle::Invented,
    ];
}

impl std::fmt::Display for NameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStyle::Brandable => write!(f, "brandable"),
            NameStyle::Real => write!(f, "real"),
            NameStyle::Compound => write!(f, "compound"),
            NameStyle::Invented => write!(f, "invented"),
        }
    }
}

impl FromStr for NameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brandable" => Ok(NameStyle::Brandable),
            "real" => Ok(NameStyle::Real),
            "compound" => Ok(NameStyle::Compound),
            "invented" => Ok(NameStyle::Invented),
            other => Err(format!("unknown style: {}", other)),
        }
    }
}

/// Target name length band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLength {
    Short,
    Medium,
    Long,
}

impl NameLength {
    pub const ALL: [NameLength; 3] = [NameLength::Short, NameLength::Medium, NameLength::Long];
}

impl std::fmt::Display for NameLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameLength::Short => write!(f, "short"),
            NameLength::Medium => write!(f, "medium"),
            NameLength::Long => write!(f, "long"),
        }
    }
}

impl FromStr for NameLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(NameLength::Short),
            "medium" => Ok(NameLength::Medium),
            "long" => Ok(NameLength::Long),
            other => Err(format!("unknown length: {}", other)),
        }
    }
}

/// A generated brand-name candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCandidate {
    pub name: String,
    pub tagline: String,
    pub why: String,
    pub rationale: Option<String>,
    pub tone: Tone,
}

/// Domain availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Taken,
    Unknown,
}

impl AvailabilityStatus {
    /// Best-effort boolean collapse: unknown is never reported as available.
    pub fn is_available(self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a domain's availability was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMethod {
    Rdap,
    Dns,
    Unknown,
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMethod::Rdap => write!(f, "rdap"),
            CheckMethod::Dns => write!(f, "dns"),
            CheckMethod::Unknown => write!(f, "unknown"),
        }
    }
}

/// Per-domain availability check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub status: AvailabilityStatus,
    pub method: CheckMethod,
    pub checked_at: DateTime<Utc>,
}

/// Request sent to the generation collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub keywords: String,
    pub style: NameStyle,
    pub length: NameLength,
    pub tone: Tone,
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            style: NameStyle::Brandable,
            length: NameLength::Short,
            tone: Tone::Minimal,
            count: 18,
        }
    }
}

/// Configuration for availability checking
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub concurrent_checks: usize,
    pub timeout: Duration,
    /// Hard cap per batch; extra domains are dropped before checking.
    pub max_batch: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            concurrent_checks: 8,
            timeout: Duration::from_secs(10),
            max_batch: 25,
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4.1-mini".to_string(),
            api_key: String::new(),
            base_url: None,
            temperature: 0.7,
        }
    }
}
