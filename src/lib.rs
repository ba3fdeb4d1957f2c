//! Nexir - AI brand-name generation with pronounceability scoring and
//! best-effort domain availability checking
//!
//! The core is two pure functions: [`phonetics::pronounceability_score`] and
//! [`domains::domain_candidates`]. Everything else is I/O glue around them:
//! an LLM provider for candidate names, an RDAP/DNS availability checker,
//! and a JSON-file store for saved names.

pub mod availability;
pub mod domains;
pub mod error;
pub mod llm;
pub mod phonetics;
pub mod prompts;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{NexirError, Result};
pub use types::{
    AvailabilityStatus, CheckConfig, CheckMethod, DomainAvailability, GenerationRequest,
    LlmConfig, NameCandidate, NameLength, NameStyle, Tone,
};

// Re-export main functionality
pub use availability::AvailabilityChecker;
pub use domains::domain_candidates;
pub use llm::NameGenerator;
pub use phonetics::pronounceability_score;
pub use storage::SavedStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
