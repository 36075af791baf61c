//! Expiry-aware caching in front of a token source.

use async_trait::async_trait;
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::calendar::{
    domain::AccessToken,
    ports::{TokenSource, TokenSourceError},
};

/// Default margin before expiry at which a cached token is replaced.
pub const DEFAULT_REFRESH_LEEWAY_SECONDS: i64 = 60;

/// Caches the token from an inner source until it is about to expire.
///
/// Refreshes are serialized: concurrent callers wait on one refresh and then
/// reuse its token instead of each hitting the inner source.
pub struct CachedTokenSource<S, C>
where
    S: TokenSource,
    C: Clock + Send + Sync,
{
    inner: S,
    clock: Arc<C>,
    leeway: TimeDelta,
    cached: Mutex<Option<AccessToken>>,
}

impl<S, C> CachedTokenSource<S, C>
where
    S: TokenSource,
    C: Clock + Send + Sync,
{
    /// Wraps `inner` with the default refresh leeway.
    #[must_use]
    pub fn new(inner: S, clock: Arc<C>) -> Self {
        Self {
            inner,
            clock,
            leeway: TimeDelta::seconds(DEFAULT_REFRESH_LEEWAY_SECONDS),
            cached: Mutex::new(None),
        }
    }

    /// Replaces the refresh leeway.
    #[must_use]
    pub const fn with_leeway(mut self, leeway: TimeDelta) -> Self {
        self.leeway = leeway;
        self
    }
}

#[async_trait]
impl<S, C> TokenSource for CachedTokenSource<S, C>
where
    S: TokenSource,
    C: Clock + Send + Sync,
{
    async fn refresh(&self) -> Result<AccessToken, TokenSourceError> {
        let mut cached = self.cached.lock().await;
        let now = self.clock.utc();
        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh(now, self.leeway)) {
            return Ok(token.clone());
        }

        let token = self.inner.refresh().await?;
        debug!(expires_at = ?token.expires_at(), "calendar token refreshed");
        *cached = Some(token.clone());
        Ok(token)
    }
}
