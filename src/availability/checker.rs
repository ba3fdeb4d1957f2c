//! Domain availability checker

use crate::availability::sanitize_batch;
use crate::error::{NexirError, Result};
use crate::types::{AvailabilityStatus, CheckConfig, CheckMethod, DomainAvailability};
use chrono::Utc;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::time::timeout;

const RDAP_BOOTSTRAP: &str = "https://rdap.org/domain";
const DOH_RESOLVER: &str = "https://dns.google/resolve";

/// Best-effort availability checker: RDAP with DNS-over-HTTPS fallback
pub struct AvailabilityChecker {
    config: CheckConfig,
    client: Client,
    semaphore: Semaphore,
}

impl AvailabilityChecker {
    /// Create a checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a checker with custom configuration
    pub fn with_config(config: CheckConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("nexir/0.1.0 (domain-check)")
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create pooled HTTP client: {}. Using default.", e);
                Client::new()
            });

        let semaphore = Semaphore::new(config.concurrent_checks);

        Self {
            config,
            client,
            semaphore,
        }
    }

    /// Check a single domain.
    ///
    /// Never errors on an ambiguous lookup: anything RDAP and DNS cannot
    /// classify comes back as unknown.
    pub async fn check_domain(&self, domain: &str) -> Result<DomainAvailability> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| NexirError::internal(format!("Failed to acquire semaphore: {}", e)))?;

        let start_time = Instant::now();

        let (status, method) = match self.check_rdap(domain).await {
            Ok(status) => (status, CheckMethod::Rdap),
            Err(e) => {
                tracing::debug!(domain = %domain, method = "rdap", error = %e, "RDAP check failed");

                if e.suggests_available() {
                    (AvailabilityStatus::Available, CheckMethod::Rdap)
                } else {
                    match self.check_dns(domain).await {
                        Ok(status) => (status, CheckMethod::Dns),
                        Err(e) => {
                            tracing::debug!(domain = %domain, method = "dns", error = %e, "DNS check failed");
                            (AvailabilityStatus::Unknown, CheckMethod::Unknown)
                        }
                    }
                }
            }
        };

        tracing::debug!(
            domain = %domain,
            status = %status,
            method = %method,
            duration_ms = %start_time.elapsed().as_millis(),
            "Domain check completed"
        );

        Ok(DomainAvailability {
            domain: domain.to_string(),
            status,
            method,
            checked_at: Utc::now(),
        })
    }

    /// Check a batch of domains concurrently.
    ///
    /// The batch is sanitized and capped first; results are sorted
    /// available-first (ties keep check order).
    pub async fn check_domains(&self, domains: &[String]) -> Result<Vec<DomainAvailability>> {
        let clean = sanitize_batch(domains, self.config.max_batch);
        if clean.is_empty() {
            return Err(NexirError::validation("No valid domains provided"));
        }

        let batch_start = Instant::now();
        let futures = clean.iter().map(|domain| self.check_domain(domain));
        let outcomes = join_all(futures).await;

        let mut results = Vec::with_capacity(clean.len());
        let mut error_count = 0u32;
        for (domain, outcome) in clean.iter().zip(outcomes) {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => {
                    error_count += 1;
                    tracing::warn!(domain = %domain, error = %e, "Failed to check domain");
                }
            }
        }

        results.sort_by_key(|r| !r.status.is_available());

        tracing::info!(
            domains_requested = %domains.len(),
            domains_checked = %results.len(),
            errors = %error_count,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch domain check completed"
        );

        Ok(results)
    }

    /// Get checker configuration
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// RDAP query through the rdap.org bootstrap, which redirects to the
    /// authoritative server for the TLD. 404 means unregistered for most
    /// registries; other non-2xx codes are left to the DNS fallback.
    async fn check_rdap(&self, domain: &str) -> Result<AvailabilityStatus> {
        let url = format!("{}/{}", RDAP_BOOTSTRAP, domain);

        let response = timeout(self.config.timeout, self.client.get(&url).send())
            .await
            .map_err(|_| NexirError::timeout("RDAP request", self.config.timeout.as_secs()))?
            .map_err(|e| NexirError::network(e.to_string(), None, Some(url.clone())))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(AvailabilityStatus::Available);
        }
        if status.is_success() {
            return Ok(AvailabilityStatus::Taken);
        }

        // 400/403/429 and friends: ambiguous, not a verdict
        Err(NexirError::network(
            format!("RDAP request failed with status {}", status),
            Some(status.as_u16()),
            Some(url),
        ))
    }

    /// DNS-record presence over DNS-over-HTTPS. Records existing means the
    /// domain is in use; NXDOMAIN alone does not prove it is unregistered,
    /// so that case stays unknown.
    async fn check_dns(&self, domain: &str) -> Result<AvailabilityStatus> {
        let url = format!("{}?name={}&type=NS", DOH_RESOLVER, domain);

        let response = timeout(self.config.timeout, self.client.get(&url).send())
            .await
            .map_err(|_| NexirError::timeout("DNS request", self.config.timeout.as_secs()))?
            .map_err(|e| NexirError::network(e.to_string(), None, Some(url.clone())))?;

        if !response.status().is_success() {
            return Err(NexirError::network(
                format!("DNS request failed with status {}", response.status()),
                Some(response.status().as_u16()),
                Some(url),
            ));
        }

        let doh: DohResponse = response
            .json()
            .await
            .map_err(|e| NexirError::parse(e.to_string(), None))?;

        if doh.answer.as_ref().is_some_and(|a| !a.is_empty()) {
            Ok(AvailabilityStatus::Taken)
        } else {
            Ok(AvailabilityStatus::Unknown)
        }
    }
}

impl Default for AvailabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Subset of the DoH JSON response we care about
#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer")]
    answer: Option<Vec<DohAnswer>>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "data")]
    _data: String,
}
