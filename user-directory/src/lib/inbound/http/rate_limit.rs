use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use axum::extract::ConnectInfo;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use dashmap::DashMap;

use crate::config::RateLimitConfig;

/// Plain-text body sent with 429 responses.
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests, please try again later.";

/// Fixed-window request counter keyed by client IP.
///
/// Each client gets `max_requests` requests per window. The window opens on
/// the client's first request and resets once it has fully elapsed.
pub struct RateLimiter {
    windows: DashMap<IpAddr, Window>,
    window: Duration,
    max_requests: u32,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    hits: u32,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            windows: DashMap::new(),
            window,
            max_requests,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(Duration::from_secs(config.window_secs), config.max_requests)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Count a request from `client`.
    ///
    /// # Errors
    /// Time left until the client's window resets, when the limit is exceeded
    pub fn check(&self, client: IpAddr) -> Result<(), Duration> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> Result<(), Duration> {
        let mut entry = self.windows.entry(client).or_insert(Window {
            started: now,
            hits: 0,
        });

        let elapsed = now.saturating_duration_since(entry.started);
        if elapsed >= self.window {
            *entry = Window {
                started: now,
                hits: 0,
            };
        }

        entry.hits = entry.hits.saturating_add(1);

        if entry.hits > self.max_requests {
            let elapsed = now.saturating_duration_since(entry.started);
            return Err(self.window.saturating_sub(elapsed));
        }

        Ok(())
    }

    /// Drop the counters of windows that have elapsed.
    pub fn prune(&self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&self, now: Instant) {
        self.windows
            .retain(|_, window| now.saturating_duration_since(window.started) < self.window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

/// Middleware rejecting clients that exceed their request budget with 429.
///
/// Clients are identified by peer address; requests served without connection
/// info share one budget.
pub async fn limit_requests(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(address)| address.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    match limiter.check(client) {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            tracing::warn!(client = %client, uri = %req.uri(), "Rate limit exceeded");

            let retry_after_secs =
                retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);

            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                TOO_MANY_REQUESTS_MESSAGE,
            )
                .into_response()
        }
    }
}
