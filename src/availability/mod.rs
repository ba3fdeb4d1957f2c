//! Best-effort domain availability checking
//!
//! RDAP first (via the rdap.org bootstrap), DNS-record presence as fallback.
//! Neither source is authoritative; anything ambiguous degrades to unknown,
//! and unknown is never reported as available.

pub mod checker;

pub use checker::AvailabilityChecker;

use regex::Regex;

/// Shape every checkable domain must match (`label.tld`).
pub const DOMAIN_PATTERN: &str = r"^[a-z0-9-]+\.[a-z]{2,}$";

/// Normalize and filter a raw domain batch.
///
/// Lowercases and trims, drops anything not matching [`DOMAIN_PATTERN`], and
/// caps the batch at `max_batch` preserving input order.
pub fn sanitize_batch(domains: &[String], max_batch: usize) -> Vec<String> {
    let pattern = Regex::new(DOMAIN_PATTERN).expect("domain pattern is valid");

    domains
        .iter()
        .map(|d| d.trim().to_lowercase())
        .filter(|d| pattern.is_match(d))
        .take(max_batch)
        .collect()
}
