//! Concurrent, all-settle credential aggregation.
//!
//! One lookup per referenced credential id, all issued concurrently; the
//! aggregate waits for every lookup to settle and keeps only the successes.
//! A missing record and a store fault are treated identically: the id is
//! dropped from the result set. Total latency is bounded by the slowest
//! single lookup, not the sum.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;

use acadex_core::{Credential, CredentialId};
use acadex_store::CredentialStore;

use crate::dashboard::Notice;
use crate::error::PortalError;

/// Outcome of a single credential lookup.
enum LookupOutcome {
    Found(Credential),
    Missing,
    Failed,
}

/// Result of an aggregate resolution. Order of `credentials` follows
/// lookup completion, not the input id sequence; callers that need a
/// stable order sort by an explicit field themselves.
#[derive(Debug, Clone, Default)]
pub struct AggregateReport {
    /// Successfully resolved credentials.
    pub credentials: Vec<Credential>,
    /// Ids whose record was absent from the store.
    pub missing: usize,
    /// Ids whose lookup faulted or timed out.
    pub failed: usize,
}

impl AggregateReport {
    /// Number of ids the aggregate was asked to resolve.
    pub fn requested(&self) -> usize {
        self.credentials.len() + self.missing + self.failed
    }

    /// Number of ids dropped from the result set.
    pub fn dropped(&self) -> usize {
        self.missing + self.failed
    }

    /// Whether every requested id resolved.
    pub fn is_complete(&self) -> bool {
        self.dropped() == 0
    }

    /// The resolved credential ids, in result order.
    pub fn resolved_ids(&self) -> Vec<CredentialId> {
        self.credentials.iter().map(|c| c.id.clone()).collect()
    }

    /// At most one cumulative notice for dropped lookups — never one per
    /// failed id. Missing records are expected data and stay silent.
    pub fn notice(&self) -> Option<Notice> {
        if self.failed > 0 {
            Some(Notice::CredentialsLoadFailed { count: self.failed })
        } else {
            None
        }
    }
}

/// Resolves a list of credential references into the subset of credentials
/// that exist and are reachable.
pub struct CredentialAggregator {
    store: Arc<dyn CredentialStore>,
    lookup_timeout: Duration,
}

impl CredentialAggregator {
    /// Create an aggregator over a credential store with a per-lookup
    /// timeout. A lookup exceeding the timeout counts as failed.
    pub fn new(store: Arc<dyn CredentialStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Resolve all referenced credentials, concurrently, waiting for every
    /// lookup to settle. Individual failures are absorbed into the report;
    /// the only error here is a structurally unusable id in the input.
    pub async fn resolve(&self, ids: &[CredentialId]) -> Result<AggregateReport, PortalError> {
        if let Some(bad) = ids.iter().find(|id| !id.is_valid()) {
            return Err(PortalError::InvalidCredentialRef(format!(
                "blank credential id in reference list: {:?}",
                bad.as_str()
            )));
        }

        if ids.is_empty() {
            return Ok(AggregateReport::default());
        }

        let outcomes = join_all(ids.iter().map(|id| self.lookup(id))).await;

        let mut report = AggregateReport::default();
        for outcome in outcomes {
            match outcome {
                LookupOutcome::Found(credential) => report.credentials.push(credential),
                LookupOutcome::Missing => report.missing += 1,
                LookupOutcome::Failed => report.failed += 1,
            }
        }

        tracing::debug!(
            requested = ids.len(),
            resolved = report.credentials.len(),
            missing = report.missing,
            failed = report.failed,
            "credential aggregation settled"
        );

        Ok(report)
    }

    /// Like [`resolve`](Self::resolve), but abandons in-flight lookups when
    /// the token fires — the enclosing view was torn down and no result
    /// should be reported.
    pub async fn resolve_cancellable(
        &self,
        ids: &[CredentialId],
        cancel: CancellationToken,
    ) -> Result<AggregateReport, PortalError> {
        tokio::select! {
            // Cancellation wins when both branches are ready
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(requested = ids.len(), "credential aggregation cancelled");
                Err(PortalError::Cancelled)
            }
            report = self.resolve(ids) => report,
        }
    }

    /// Single lookup with a three-way outcome. Faults and timeouts are
    /// absorbed here so the fan-out settles every future.
    async fn lookup(&self, id: &CredentialId) -> LookupOutcome {
        match tokio::time::timeout(self.lookup_timeout, self.store.fetch_credential(id)).await {
            Ok(Ok(Some(credential))) => LookupOutcome::Found(credential),
            Ok(Ok(None)) => {
                tracing::debug!(credential = %id, "credential record absent");
                LookupOutcome::Missing
            }
            Ok(Err(e)) => {
                tracing::warn!(credential = %id, error = %e, "credential lookup failed");
                LookupOutcome::Failed
            }
            Err(_) => {
                tracing::warn!(
                    credential = %id,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "credential lookup timed out"
                );
                LookupOutcome::Failed
            }
        }
    }
}
