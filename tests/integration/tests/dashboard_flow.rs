//! Integration test: dashboard resolution across crates.
//!
//! Drives the profile resolver and credential aggregator together through
//! `Portal`, with injected delays and faults from the store harness.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use acadex_core::UserId;
use acadex_integration_tests::{make_credential, make_profile, StoreHarness};
use acadex_portal::{
    AuthenticatedUser, Dashboard, Notice, Portal, PortalError, SessionContext,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_millis(200);

fn portal(store: Arc<StoreHarness>) -> Portal {
    Portal::new(store.clone(), store.clone(), store, LOOKUP_TIMEOUT)
}

fn session_for(user: &str) -> SessionContext {
    SessionContext::signed_in(AuthenticatedUser::new(UserId::new(user).unwrap()))
}

// =========================================================================
// Scenario A: partial resolution — missing ids drop, others resolve
// =========================================================================

#[tokio::test]
async fn test_missing_credential_excluded_others_resolve() {
    let store = Arc::new(StoreHarness::new());
    store.seed_credential(make_credential("c1", "degree", "u1")).await;
    store.seed_profile(make_profile("u1", &["c1", "c2"])).await;

    let dashboard = portal(store).load_dashboard(&session_for("u1")).await.unwrap();

    let resolved: Vec<&str> = dashboard
        .credentials()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(resolved, vec!["c1"]);
    // A missing record is expected data, not a failure
    assert!(dashboard.notices().is_empty());
}

#[tokio::test]
async fn test_partial_failure_isolation_many_ids() {
    let store = Arc::new(StoreHarness::new());
    for id in ["c1", "c2", "c3", "c4"] {
        store.seed_credential(make_credential(id, "certificate", "u1")).await;
    }
    store
        .seed_profile(make_profile("u1", &["c1", "c2", "ghost", "c3", "c4"]))
        .await;

    let dashboard = portal(store).load_dashboard(&session_for("u1")).await.unwrap();
    let resolved: HashSet<&str> = dashboard
        .credentials()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(resolved, HashSet::from(["c1", "c2", "c3", "c4"]));
}

// =========================================================================
// Scenario B: empty profile — empty, non-error view
// =========================================================================

#[tokio::test]
async fn test_empty_profile_yields_empty_dashboard() {
    let store = Arc::new(StoreHarness::new());
    store.seed_profile(make_profile("u2", &[])).await;

    let dashboard = portal(store).load_dashboard(&session_for("u2")).await.unwrap();
    match dashboard {
        Dashboard::Ready {
            credentials,
            notices,
            ..
        } => {
            assert!(credentials.is_empty());
            assert!(notices.is_empty());
        }
        other => panic!("expected ready dashboard, got {:?}", other),
    }
}

// =========================================================================
// Scenario C: unknown user — new-user dashboard, no crash
// =========================================================================

#[tokio::test]
async fn test_unknown_user_yields_new_user_dashboard() {
    let store = Arc::new(StoreHarness::new());
    let dashboard = portal(store)
        .load_dashboard(&session_for("missing"))
        .await
        .unwrap();
    assert!(matches!(dashboard, Dashboard::NewUser { .. }));
}

#[tokio::test]
async fn test_signed_out_session_yields_signed_out_dashboard() {
    let store = Arc::new(StoreHarness::new());
    let dashboard = portal(store)
        .load_dashboard(&SessionContext::new())
        .await
        .unwrap();
    assert!(matches!(dashboard, Dashboard::SignedOut));
}

// =========================================================================
// Scenario D: slow and faulting lookups
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_timed_out_lookup_drops_single_notice_emitted() {
    let store = Arc::new(StoreHarness::new());
    store.seed_credential(make_credential("c1", "degree", "u1")).await;
    store.seed_credential(make_credential("c2", "diploma", "u1")).await;
    store.seed_credential(make_credential("c3", "degree", "u1")).await;
    // c2 hangs past the lookup timeout; c3 faults outright
    store.delay_credential("c2", Duration::from_secs(60));
    store.fail_credential("c3");
    store.seed_profile(make_profile("u1", &["c1", "c2", "c3"])).await;

    let dashboard = portal(store).load_dashboard(&session_for("u1")).await.unwrap();

    let resolved: Vec<&str> = dashboard
        .credentials()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(resolved, vec!["c1"]);
    // One cumulative notice for both dropped lookups, not one per id
    assert_eq!(
        dashboard.notices(),
        &[Notice::CredentialsLoadFailed { count: 2 }]
    );
}

#[tokio::test]
async fn test_profile_store_down_is_transient_error() {
    let store = Arc::new(StoreHarness::new());
    store.seed_profile(make_profile("u1", &["c1"])).await;
    store.set_profiles_down(true);

    let result = portal(store).load_dashboard(&session_for("u1")).await;
    match result {
        Err(e) => assert!(e.is_transient(), "expected transient error, got {}", e),
        Ok(d) => panic!("expected store error, got {:?}", d),
    }
}

// =========================================================================
// Concurrency and idempotence properties
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_aggregate_latency_bounded_by_slowest_lookup() {
    let store = Arc::new(StoreHarness::new());
    let ids = ["c1", "c2", "c3", "c4", "c5"];
    for id in ids {
        store.seed_credential(make_credential(id, "degree", "u1")).await;
        store.delay_credential(id, Duration::from_millis(50));
    }
    store.seed_profile(make_profile("u1", &ids)).await;
    let portal = portal(store);

    let started = tokio::time::Instant::now();
    let dashboard = portal.load_dashboard(&session_for("u1")).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(dashboard.credentials().len(), 5);
    // Five 50ms lookups resolve concurrently: ~50ms total, not 250ms
    assert!(
        elapsed < Duration::from_millis(100),
        "aggregate took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_resolution_idempotent_against_unchanged_store() {
    let store = Arc::new(StoreHarness::new());
    store.seed_credential(make_credential("c1", "degree", "u1")).await;
    store.seed_credential(make_credential("c3", "diploma", "u1")).await;
    store.seed_profile(make_profile("u1", &["c1", "c2", "c3"])).await;
    let portal = portal(store);
    let session = session_for("u1");

    let first: HashSet<String> = portal
        .load_dashboard(&session)
        .await
        .unwrap()
        .credentials()
        .iter()
        .map(|c| c.id.as_str().to_string())
        .collect();
    let second: HashSet<String> = portal
        .load_dashboard(&session)
        .await
        .unwrap()
        .credentials()
        .iter()
        .map(|c| c.id.as_str().to_string())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, HashSet::from(["c1".to_string(), "c3".to_string()]));
}

// =========================================================================
// Cancellation on view teardown
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_view_teardown_cancels_in_flight_lookups() {
    let store = Arc::new(StoreHarness::new());
    store.seed_credential(make_credential("c1", "degree", "u1")).await;
    store.delay_credential("c1", Duration::from_secs(30));
    store.seed_profile(make_profile("u1", &["c1"])).await;
    let portal = portal(store);

    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        cancel.cancel();
    });

    let result = portal
        .load_dashboard_cancellable(&session_for("u1"), token)
        .await;
    assert!(matches!(result, Err(PortalError::Cancelled)));
}
