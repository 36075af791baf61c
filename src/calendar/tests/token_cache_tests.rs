//! Tests for expiry-aware token caching.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::TimeDelta;
use rstest::rstest;

use crate::calendar::{
    adapters::token_cache::CachedTokenSource,
    domain::AccessToken,
    ports::{MockTokenSource, TokenSource, TokenSourceError},
};
use crate::test_support::FixedClock;

/// Issues tokens valid for ten minutes and counts refreshes.
struct CountingSource {
    clock: Arc<FixedClock>,
    refreshes: Arc<AtomicUsize>,
}

#[async_trait]
impl TokenSource for CountingSource {
    async fn refresh(&self) -> Result<AccessToken, TokenSourceError> {
        let issued = self.refreshes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let expiry = mockable::Clock::utc(&*self.clock) + TimeDelta::minutes(10);
        Ok(AccessToken::new(format!("token-{issued}"))
            .expect("non-empty secret")
            .expiring_at(expiry))
    }
}

fn counting_cache() -> (
    Arc<CachedTokenSource<CountingSource, FixedClock>>,
    Arc<FixedClock>,
    Arc<AtomicUsize>,
) {
    let clock = Arc::new(FixedClock::at(2025, 4, 7, 9, 0));
    let refreshes = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        clock: Arc::clone(&clock),
        refreshes: Arc::clone(&refreshes),
    };
    let cache = Arc::new(CachedTokenSource::new(source, Arc::clone(&clock)));
    (cache, clock, refreshes)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fresh_token_is_reused() {
    let (cache, _clock, refreshes) = counting_cache();

    let first = cache.refresh().await.expect("token");
    let second = cache.refresh().await.expect("token");

    assert_eq!(first, second);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn token_near_expiry_is_replaced() {
    let (cache, clock, refreshes) = counting_cache();

    let first = cache.refresh().await.expect("token");
    clock.advance(TimeDelta::minutes(9) + TimeDelta::seconds(30));
    let second = cache.refresh().await.expect("token");

    assert_ne!(first.secret(), second.secret());
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_callers_share_one_refresh() {
    let (cache, _clock, refreshes) = counting_cache();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&cache);
            tokio::spawn(async move { shared.refresh().await })
        })
        .collect();
    for handle in handles {
        let token = handle.await.expect("task joins").expect("token");
        assert_eq!(token.secret(), "token-0");
    }

    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_failures_are_not_cached() {
    let attempts = AtomicUsize::new(0);
    let mut inner = MockTokenSource::new();
    inner.expect_refresh().times(2).returning(move || {
        if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(TokenSourceError::MissingCredentials)
        } else {
            Ok(AccessToken::new("recovered").expect("non-empty secret"))
        }
    });
    let cache = CachedTokenSource::new(inner, Arc::new(FixedClock::at(2025, 4, 7, 9, 0)));

    let failed = cache.refresh().await;
    let recovered = cache.refresh().await.expect("second refresh succeeds");

    assert!(matches!(failed, Err(TokenSourceError::MissingCredentials)));
    assert_eq!(recovered.secret(), "recovered");
}
