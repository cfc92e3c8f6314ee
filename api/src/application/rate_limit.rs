use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroU32,
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::warn;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again after a minute.";

/// Per-client quota on analysis requests. Clients are keyed by peer address;
/// requests without connection info share one bucket.
#[derive(Clone)]
pub struct AnalysisRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<Option<IpAddr>>>,
}

impl AnalysisRateLimiter {
    /// `None` when `per_minute` is zero.
    pub fn per_minute(per_minute: u32) -> Option<Self> {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute)?);

        Some(Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        })
    }

    pub fn check(&self, client: Option<IpAddr>) -> Result<(), ApiError> {
        self.limiter.check_key(&client).map_err(|_| {
            warn!(client = ?client, "Analysis rate limit exceeded");
            ApiError::TooManyRequests(RATE_LIMIT_MESSAGE.to_string())
        })
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<AnalysisRateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    limiter.check(client)?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_the_limit() {
        assert!(AnalysisRateLimiter::per_minute(0).is_none());
    }

    #[test]
    fn clients_have_separate_quotas() {
        let limiter = AnalysisRateLimiter::per_minute(1).unwrap();
        let alice = Some(IpAddr::from([10, 0, 0, 1]));
        let bob = Some(IpAddr::from([10, 0, 0, 2]));

        assert!(limiter.check(alice).is_ok());
        assert_eq!(
            limiter.check(alice),
            Err(ApiError::TooManyRequests(RATE_LIMIT_MESSAGE.to_string()))
        );
        assert!(limiter.check(bob).is_ok());
    }
}
