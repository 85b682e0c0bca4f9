use std::{num::NonZeroU32, sync::Arc};

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use super::{Endpoint, Middleware, endpoint};
use crate::domain::error::EndpointError;

/// Token bucket shared by every endpoint it guards.
pub type Limiter = Arc<DefaultDirectRateLimiter>;

/// Bucket refilled at `per_second` tokens per second, holding at most `burst`.
pub fn token_bucket(per_second: NonZeroU32, burst: NonZeroU32) -> Limiter {
    Arc::new(RateLimiter::direct(
        Quota::per_second(per_second).allow_burst(burst),
    ))
}

/// Takes one token per call and fails fast with [`EndpointError::Limited`]
/// when the bucket is empty. Never waits for a refill.
pub fn rate_limit<Req, Resp>(limiter: Limiter) -> Middleware<Req, Resp>
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    Box::new(move |next: Endpoint<Req, Resp>| {
        let limiter = Arc::clone(&limiter);
        endpoint(move |request: Req| {
            let limiter = Arc::clone(&limiter);
            let next = Arc::clone(&next);
            async move {
                // the token is taken on first poll, not when the future is built
                if limiter.check().is_err() {
                    tracing::warn!("request rejected by rate limiter");
                    return Err(EndpointError::Limited);
                }
                next(request).await
            }
        })
    })
}
