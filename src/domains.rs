//! Domain candidate generation
//!
//! Expands a brand name into an ordered, deduplicated list of `label.tld`
//! candidates. Tone-preferred TLDs come first so that consumers showing only
//! a prefix of the list still get tone-relevant suggestions.

use crate::types::Tone;
use std::collections::HashSet;

/// Full common-TLD reference list, appended after any tone preference.
pub const COMMON_TLDS: &[&str] = &[
    "com", "net", "org", "co", "io", "ai", "app", "dev", "me", "xyz", "site", "studio", "world",
    "online",
];

/// Tone-specific TLD priority lists. Same pool, different emphasis.
pub fn tlds_for_tone(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Luxury => &[
            "com", "co", "io", "ai", "me", "studio", "app", "net", "org", "online",
        ],
        Tone::Playful => &[
            "com", "xyz", "me", "site", "world", "co", "app", "io", "online", "studio",
        ],
        Tone::Serious => &[
            "com", "net", "org", "co", "io", "ai", "dev", "app", "online", "site",
        ],
        Tone::Minimal => &[
            "com", "io", "ai", "co", "app", "dev", "me", "net", "org", "studio",
        ],
    }
}

/// Derive a registrable label from a display name.
///
/// Quotes are stripped outright (so "Nexir's" becomes "nexirs" rather than
/// "nexir s"); every other non-alphanumeric run is removed.
pub fn base_label(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'))
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Generate domain candidates for a name, tone-preferred TLDs first.
///
/// Order: tone list, then `extra_tlds`, then [`COMMON_TLDS`], deduplicated
/// keeping first occurrence. Returns an empty list when the name has no
/// usable label.
pub fn domain_candidates(name: &str, tone: Tone, extra_tlds: &[String]) -> Vec<String> {
    let label = base_label(name);
    if label.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    let tlds = tlds_for_tone(tone)
        .iter()
        .copied()
        .chain(extra_tlds.iter().map(|s| s.as_str()))
        .chain(COMMON_TLDS.iter().copied());

    for tld in tlds {
        if seen.insert(tld) {
            candidates.push(format!("{}.{}", label, tld));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_label_strips_quotes_and_symbols() {
        assert_eq!(base_label("Nexir's 2.0"), "nexirs20");
        assert_eq!(base_label("  Acme Labs  "), "acmelabs");
        assert_eq!(base_label("\u{201C}Brio\u{201D}"), "brio");
        assert_eq!(base_label("cafe-au-lait"), "cafeaulait");
    }

    #[test]
    fn test_empty_label_guard() {
        for tone in [Tone::Luxury, Tone::Playful, Tone::Serious, Tone::Minimal] {
            assert!(domain_candidates("   ", tone, &[]).is_empty());
            assert!(domain_candidates("!!!", tone, &[]).is_empty());
        }
    }

    #[test]
    fn test_luxury_tone_ordering() {
        let candidates = domain_candidates("Acme", Tone::Luxury, &[]);
        let expected_prefix = [
            "acme.com",
            "acme.co",
            "acme.io",
            "acme.ai",
            "acme.me",
            "acme.studio",
            "acme.app",
            "acme.net",
            "acme.org",
            "acme.online",
        ];
        assert_eq!(&candidates[..10], &expected_prefix[..]);
        // Remaining common TLDs, first-seen order, no repeats
        assert_eq!(
            &candidates[10..],
            &["acme.dev", "acme.xyz", "acme.site", "acme.world"][..]
        );
    }

    #[test]
    fn test_no_duplicates_with_extra_tlds() {
        let extras = vec!["com".to_string(), "tech".to_string(), "io".to_string()];
        for tone in [Tone::Luxury, Tone::Playful, Tone::Serious, Tone::Minimal] {
            let candidates = domain_candidates("Brio", tone, &extras);
            let unique: HashSet<&String> = candidates.iter().collect();
            assert_eq!(unique.len(), candidates.len());
            assert!(candidates.contains(&"brio.tech".to_string()));
        }
    }

    #[test]
    fn test_extra_tlds_come_before_common_filler() {
        let extras = vec!["tech".to_string()];
        let candidates = domain_candidates("Brio", Tone::Minimal, &extras);
        // Right after the 10-entry tone list
        assert_eq!(candidates[10], "brio.tech");
    }

    #[test]
    fn test_tone_lists_are_ten_entries_from_the_common_pool() {
        for tone in [Tone::Luxury, Tone::Playful, Tone::Serious, Tone::Minimal] {
            let tlds = tlds_for_tone(tone);
            assert_eq!(tlds.len(), 10);
            for tld in tlds {
                assert!(COMMON_TLDS.contains(tld), "{} not in common pool", tld);
            }
        }
    }
}
