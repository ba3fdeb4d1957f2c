//! Integration tests for nexir

use nexir::{
    availability::sanitize_batch,
    domain_candidates, pronounceability_score,
    storage::{SavedStore, SAVED_FILE_NAME},
    AvailabilityChecker, CheckConfig, GenerationRequest, NameLength, NameStyle, Tone,
};
use std::time::Duration;

#[test]
fn test_score_then_expand_pipeline() {
    // A candidate flows from the generator through scoring and expansion
    // without either core component touching the other.
    let name = "Zeno";

    let phonetics = pronounceability_score(name);
    assert_eq!(phonetics.score, 91);
    assert_eq!(phonetics.syllable_estimate, 2);

    let domains = domain_candidates(name, Tone::Minimal, &[]);
    assert_eq!(domains[0], "zeno.com");
    assert_eq!(domains.len(), 14);

    // Everything the generator emits passes the checker's input gate
    let clean = sanitize_batch(&domains, 25);
    assert_eq!(clean, domains);
}

#[test]
fn test_candidate_expansion_respects_batch_cap() {
    let domains = domain_candidates("Acme", Tone::Luxury, &[]);
    let capped: Vec<String> = domains.iter().take(20).cloned().collect();
    let clean = sanitize_batch(&capped, 25);
    assert!(clean.len() <= 25);
    // Truncating to a prefix still keeps the tone-preferred TLDs
    assert_eq!(clean[0], "acme.com");
    assert_eq!(clean[1], "acme.co");
}

#[test]
fn test_scoring_is_independent_of_expansion_order() {
    // Core components are stateless: interleaving calls changes nothing.
    let first = pronounceability_score("Nexir");
    let _ = domain_candidates("Nexir", Tone::Playful, &[]);
    let second = pronounceability_score("Nexir");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_checker_with_custom_config() {
    let config = CheckConfig {
        concurrent_checks: 2,
        timeout: Duration::from_secs(5),
        max_batch: 10,
    };
    let checker = AvailabilityChecker::with_config(config);
    assert_eq!(checker.config().max_batch, 10);

    // An all-invalid batch never reaches the network
    let garbage = vec!["???".to_string(), String::new()];
    assert!(checker.check_domains(&garbage).await.is_err());
}

#[test]
fn test_generation_request_defaults_match_web_form() {
    let request = GenerationRequest::default();
    assert_eq!(request.style, NameStyle::Brandable);
    assert_eq!(request.length, NameLength::Short);
    assert_eq!(request.tone, Tone::Minimal);
    assert_eq!(request.count, 18);
}

#[test]
fn test_saved_store_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(SAVED_FILE_NAME);

    let store = SavedStore::open(&path);
    store.toggle("Zeno", "Calm focus daily", "Short and calm").unwrap();
    store.toggle("Brio", "Energy in motion", "Lively sound").unwrap();
    store.toggle("zeno", "", "").unwrap(); // case-insensitive unsave

    let reopened = SavedStore::open(&path);
    let names: Vec<String> = reopened.list().into_iter().map(|x| x.name).collect();
    assert_eq!(names, vec!["Brio"]);
}
