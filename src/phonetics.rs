//! Pronounceability scoring for candidate names
//!
//! A deterministic, rule-based heuristic: no I/O, no failure modes. The same
//! input always produces the same score, syllable estimate, and reasons.

/// Result of scoring a single candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounceabilityScore {
    /// Heuristic pronounceability, clamped to 0..=100.
    pub score: u8,
    /// Vowel-group count, floored at 1. Not true syllabification.
    pub syllable_estimate: usize,
    /// Up to 4 human-readable reasons, in rule-pipeline order.
    pub reasons: Vec<&'static str>,
}

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Awkward letter sequences penalized regardless of length or syllable count.
const HARD_CLUSTERS: &[&str] = &["xq", "qj", "jq", "ptk", "tzk", "gnl", "rtsc", "schz"];

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Letters-only projection of an already-lowercased word.
fn letters_only(word: &str) -> String {
    word.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Count maximal contiguous runs of vowel characters.
fn count_vowel_groups(word: &str) -> usize {
    let w = letters_only(word);

    let mut groups = 0;
    let mut in_group = false;
    for ch in w.chars() {
        if is_vowel(ch) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

/// 4+ consonants in a row, or any known-hard combo.
fn has_awkward_clusters(word: &str) -> bool {
    let w = letters_only(word);
    if w.is_empty() {
        return false;
    }

    let mut consonant_run = 0usize;
    for ch in w.chars() {
        if is_vowel(ch) {
            consonant_run = 0;
        } else {
            consonant_run += 1;
            if consonant_run >= 4 {
                return true;
            }
        }
    }

    HARD_CLUSTERS.iter().any(|c| w.contains(c))
}

/// Starts with a letter, then only letters and hyphens.
fn looks_like_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphabetic() || c == '-')
        }
        _ => false,
    }
}

/// Score a candidate name's pronounceability.
///
/// Total over all inputs: empty or symbol-laden text still yields a clamped
/// result. The rule pipeline runs in a fixed order (shape, length band,
/// syllable band, clusters, ending) so that reason truncation is stable.
pub fn pronounceability_score(name: &str) -> PronounceabilityScore {
    let word: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut reasons: Vec<&'static str> = Vec::new();
    let mut score: i32 = 70;

    if !looks_like_word(&word) {
        score -= 10;
        reasons.push("Contains unusual characters");
    }

    match word.chars().count() {
        0..=3 => {
            score -= 10;
            reasons.push("Very short (may be unclear)");
        }
        4..=8 => {
            score += 10;
            reasons.push("Short and snappy");
        }
        9..=12 => {
            score += 3;
            reasons.push("Moderate length");
        }
        _ => {
            score -= 8;
            reasons.push("Long (harder to say)");
        }
    }

    let syllables = count_vowel_groups(&word);
    match syllables {
        0 => {
            score -= 25;
            reasons.push("No clear vowel sounds");
        }
        1..=3 => {
            score += 8;
            reasons.push("Easy syllable rhythm");
        }
        4..=5 => {
            score -= 3;
            reasons.push("Many syllables");
        }
        _ => {
            score -= 10;
            reasons.push("Too many syllables");
        }
    }

    if has_awkward_clusters(&word) {
        score -= 12;
        reasons.push("Awkward consonant clusters");
    }

    // Names that end on a vowel tend to feel smoother
    if word.chars().last().is_some_and(is_vowel) {
        score += 3;
        reasons.push("Smooth ending sound");
    }

    reasons.truncate(4);

    PronounceabilityScore {
        score: score.clamp(0, 100) as u8,
        syllable_estimate: syllables.max(1),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_pronounceable_word() {
        let result = pronounceability_score("Zeno");
        // 70 +10 (short) +8 (easy rhythm) +3 (vowel ending)
        assert_eq!(result.score, 91);
        assert_eq!(result.syllable_estimate, 2);
        assert_eq!(
            result.reasons,
            vec![
                "Short and snappy",
                "Easy syllable rhythm",
                "Smooth ending sound"
            ]
        );
    }

    #[test]
    fn test_consonant_heavy_invented_word() {
        let result = pronounceability_score("Xqlmrfz");
        // 70 +10 (short) -25 (no vowels) -12 (cluster)
        assert_eq!(result.score, 43);
        assert_eq!(result.syllable_estimate, 1);
        assert_eq!(
            result.reasons,
            vec![
                "Short and snappy",
                "No clear vowel sounds",
                "Awkward consonant clusters"
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        for name in ["Zeno", "Nexir", "acme-labs", "!!!", "", "Überlieferung"] {
            assert_eq!(pronounceability_score(name), pronounceability_score(name));
        }
    }

    #[test]
    fn test_bounds_and_reason_cap() {
        for name in [
            "",
            "x",
            "zzzzzzzzzzzzzzzzzzzzzzzz",
            "a",
            "7-eleven!!!",
            "the quick brown fox jumps over the lazy dog",
            "aeiouyaeiouyaeiouy",
        ] {
            let result = pronounceability_score(name);
            assert!(result.score <= 100, "score out of range for {:?}", name);
            assert!(result.syllable_estimate >= 1);
            assert!(result.reasons.len() <= 4, "too many reasons for {:?}", name);
        }
    }

    #[test]
    fn test_unusual_characters_penalty() {
        let plain = pronounceability_score("brio");
        let symbols = pronounceability_score("br1o");
        assert!(symbols.reasons.contains(&"Contains unusual characters"));
        assert_eq!(plain.score - 10, symbols.score);
    }

    #[test]
    fn test_whitespace_is_collapsed_before_measuring() {
        // "neon light" measures as "neonlight": 9 chars, moderate band
        let result = pronounceability_score("  neon light ");
        assert!(result.reasons.contains(&"Moderate length"));
        assert!(result.reasons.contains(&"Contains unusual characters") == false);
    }

    #[test]
    fn test_hard_cluster_substrings() {
        for name in ["axqon", "batzko", "gnlova"] {
            let result = pronounceability_score(name);
            assert!(
                result.reasons.contains(&"Awkward consonant clusters"),
                "{} should trip the cluster penalty",
                name
            );
        }
        assert!(!pronounceability_score("brio")
            .reasons
            .contains(&"Awkward consonant clusters"));
    }

    #[test]
    fn test_syllable_bands() {
        // y counts as a vowel for grouping
        assert_eq!(pronounceability_score("rhythm").syllable_estimate, 1);
        // 4 groups: a-e-i-o
        let many = pronounceability_score("catenimoda");
        assert!(many.reasons.contains(&"Many syllables"));
        // 6 groups
        let too_many = pronounceability_score("abababababab");
        assert!(too_many.reasons.contains(&"Too many syllables"));
    }

    #[test]
    fn test_length_bands() {
        assert!(pronounceability_score("ze")
            .reasons
            .contains(&"Very short (may be unclear)"));
        assert!(pronounceability_score("zenith")
            .reasons
            .contains(&"Short and snappy"));
        assert!(pronounceability_score("hyperborean")
            .reasons
            .contains(&"Moderate length"));
        assert!(pronounceability_score("hyperboreanism")
            .reasons
            .contains(&"Long (harder to say)"));
    }
}
