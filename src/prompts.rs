//! Prompt construction for the name-generation provider
//!
//! Style, length, and tone rules are exhaustive mappings over the closed
//! enums in [`crate::types`], so a new tone or style cannot be added without
//! the compiler pointing here.

use crate::types::{GenerationRequest, NameLength, NameStyle, Tone};

fn length_rule(length: NameLength) -> &'static str {
    match length {
        NameLength::Short => "4-8 characters",
        NameLength::Medium => "6-12 characters",
        NameLength::Long => "10-18 characters",
    }
}

fn style_rule(style: NameStyle) -> &'static str {
    match style {
        NameStyle::Brandable => "Brandable, modern, startup-like",
        NameStyle::Real => "Real dictionary words (single words preferred)",
        NameStyle::Compound => "Compound words (two-word blends or fused compounds)",
        NameStyle::Invented => "Invented words that sound natural and pronounceable",
    }
}

fn tone_rule(tone: Tone) -> &'static str {
    match tone {
        Tone::Luxury => "Luxury: premium, elegant, upscale, refined (avoid silly words)",
        Tone::Playful => "Playful: fun, friendly, energetic, light (still pronounceable)",
        Tone::Serious => "Serious: trustworthy, professional, strong, credible",
        Tone::Minimal => "Minimal: clean, simple, modern, minimalistic (avoid extra syllables)",
    }
}

/// Build the full generation prompt for a request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are a naming expert. Generate {count} unique business/product names.

Constraints:
- Must be easy to pronounce in English
- Avoid offensive or sensitive terms
- Style: {style}
- Tone: {tone}
- Length: about {length}
- Based on these keywords: {keywords}

For each name, include:
- name
- tagline (2-6 words)
- why (<= 12 words)
- rationale (1-2 sentences explaining the choice)

Return ONLY valid JSON with this exact shape:
{{
  "names": [
    {{ "name": "Example", "tagline": "2-6 words", "why": "short reason", "rationale": "1-2 sentences" }}
  ]
}}
"#,
        count = request.count,
        style = style_rule(request.style),
        tone = tone_rule(request.tone),
        length = length_rule(request.length),
        keywords = request.keywords,
    )
}
