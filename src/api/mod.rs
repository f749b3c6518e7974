//! Authenticated API gateway
//!
//! Owns the HTTP transport, the bearer token lifecycle, and error
//! classification. Every response passes through a 401 interceptor that
//! refreshes the token (guarded against re-entrancy and runaway retry
//! loops) so that *subsequent* requests succeed; the failed request itself
//! is never replayed.

mod auth;
mod error;
mod service;

pub use error::{ApiError, ErrorBody};

use crate::config::Config;
use crate::models::{AuthTokens, RefreshTokenRequest};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

/// Extra attempts after the first try, for transport failures and 502/503/504.
const TRANSPORT_RETRIES: u32 = 2;
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Guard state for the token refresh protocol.
///
/// `begin` applies both guards from the refresh contract: no refresh while
/// one is already in flight, and at most three consecutive attempts before
/// the counter resets and the 401 is surfaced untouched.
#[derive(Debug, Default)]
pub struct RefreshGuard {
    is_refreshing: bool,
    attempts: u8,
}

impl RefreshGuard {
    const MAX_ATTEMPTS: u8 = 3;

    /// Try to enter the refresh critical section.
    pub fn begin(&mut self) -> bool {
        if self.is_refreshing {
            return false;
        }
        if self.attempts >= Self::MAX_ATTEMPTS {
            self.attempts = 0;
            return false;
        }
        self.is_refreshing = true;
        self.attempts += 1;
        true
    }

    /// Leave the critical section. A successful refresh resets the counter.
    pub fn finish(&mut self, success: bool) {
        self.is_refreshing = false;
        if success {
            self.attempts = 0;
        }
    }

    #[cfg(test)]
    fn attempts(&self) -> u8 {
        self.attempts
    }
}

/// Mutable authentication state, protected by the client's one mutex.
#[derive(Debug, Default)]
struct AuthSession {
    bearer: Option<String>,
    refresh: RefreshGuard,
}

/// Releases the refresh guard on every exit path, including early returns.
struct RefreshInFlight<'a> {
    session: &'a Mutex<AuthSession>,
    success: bool,
}

impl Drop for RefreshInFlight<'_> {
    fn drop(&mut self) {
        if let Ok(mut session) = self.session.lock() {
            session.refresh.finish(self.success);
        }
    }
}

/// The API client.
///
/// Cheap to share behind an `Arc`; the session mutex is never held across
/// an await point.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    config: Config,
    session: Mutex<AuthSession>,
}

impl Client {
    /// Create a client from configuration, picking up any stored token.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout())
            .build()?;
        let base_url = config.api_url().trim_end_matches('/').to_string();
        let bearer = config.token();
        Ok(Self {
            http,
            base_url,
            config,
            session: Mutex::new(AuthSession {
                bearer,
                refresh: RefreshGuard::default(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the in-memory bearer token.
    pub fn set_token(&self, token: String) {
        if let Ok(mut session) = self.session.lock() {
            session.bearer = Some(token);
        }
    }

    /// Drop the in-memory bearer token.
    pub fn clear_token(&self) {
        if let Ok(mut session) = self.session.lock() {
            session.bearer = None;
        }
    }

    fn bearer(&self) -> Option<String> {
        self.session.lock().ok().and_then(|s| s.bearer.clone())
    }

    /// Perform a request and return the raw response.
    ///
    /// Transport failures and 502/503/504 are retried a bounded number of
    /// times; error statuses come back classified. A 401 additionally runs
    /// the refresh interceptor before being returned.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        if !matches!(
            method,
            Method::GET | Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        ) {
            return Err(ApiError::UnsupportedMethod(method.to_string()));
        }

        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0u32;
        loop {
            let mut request = self.http.request(method.clone(), &url);
            if let Some(body) = body {
                request = request.json(body);
            }
            if let Some(token) = self.bearer() {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    if attempt < TRANSPORT_RETRIES {
                        attempt += 1;
                        tracing::debug!(%url, attempt, "transport error, retrying: {e}");
                        tokio::time::sleep(RETRY_BACKOFF).await;
                        continue;
                    }
                    return Err(ApiError::from_network_error(e));
                }
            };

            let status = response.status();

            // The interceptor runs on every 401, whether or not the caller
            // will retry. It only renews the token for later requests.
            if status == StatusCode::UNAUTHORIZED {
                self.handle_unauthorized().await;
            }

            if status.is_success() {
                return Ok(response);
            }

            if matches!(status.as_u16(), 502 | 503 | 504) && attempt < TRANSPORT_RETRIES {
                attempt += 1;
                tracing::debug!(%url, %status, attempt, "upstream error, retrying");
                tokio::time::sleep(RETRY_BACKOFF).await;
                continue;
            }

            return Err(Self::classify(response).await);
        }
    }

    /// Decode an error response into the taxonomy.
    async fn classify(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<ErrorBody>(&bytes).ok())
            .unwrap_or_default();
        ApiError::from_status(status, &body)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    /// POST a JSON body, decoding a JSON result.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// POST with no meaningful response body.
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.execute(Method::POST, path, body).await?;
        Ok(())
    }

    /// DELETE a resource.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The 401 interceptor: refresh the token so subsequent requests succeed.
    ///
    /// The refresh call itself goes through `execute`, so its own 401 lands
    /// back here and is rejected by the re-entrancy guard; boxing breaks the
    /// resulting recursive future type.
    fn handle_unauthorized(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            {
                let mut session = match self.session.lock() {
                    Ok(session) => session,
                    Err(_) => return,
                };
                if !session.refresh.begin() {
                    return;
                }
            }
            // From here on, the guard must be released on every path.
            let mut in_flight = RefreshInFlight {
                session: &self.session,
                success: false,
            };

            let Some(refresh_token) = self.config.refresh_token() else {
                tracing::debug!("no refresh token stored, leaving 401 as-is");
                return;
            };

            let request = RefreshTokenRequest { refresh_token };
            let tokens: AuthTokens = match self.post("/api/v1/auth/refresh", &request).await {
                Ok(tokens) => tokens,
                Err(e) => {
                    tracing::debug!("token refresh failed: {e}");
                    return;
                }
            };

            self.set_token(tokens.access_token.clone());
            if let Err(e) = self
                .config
                .save_tokens(&tokens.access_token, &tokens.refresh_token)
            {
                tracing::warn!("refreshed token could not be persisted: {e}");
                return;
            }

            tracing::debug!("access token refreshed");
            in_flight.success = true;
        })
    }

    /// Health check endpoint.
    pub async fn health(&self) -> Result<crate::models::HealthCheck, ApiError> {
        self.get("/health").await
    }

    /// Remote API version.
    pub async fn api_version(&self) -> Result<crate::models::VersionInfo, ApiError> {
        self.get("/version").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_guard_blocks_reentry() {
        let mut guard = RefreshGuard::default();
        assert!(guard.begin());
        // A second 401 while the refresh is in flight performs no refresh.
        assert!(!guard.begin());
        assert!(!guard.begin());
        guard.finish(true);
        assert!(guard.begin());
    }

    #[test]
    fn refresh_guard_ceiling_resets_counter() {
        let mut guard = RefreshGuard::default();
        for _ in 0..3 {
            assert!(guard.begin());
            guard.finish(false);
        }
        // Fourth consecutive failure: no refresh, counter back to zero.
        assert!(!guard.begin());
        assert_eq!(guard.attempts(), 0);
        // The reset re-arms the guard for the next 401.
        assert!(guard.begin());
    }

    #[test]
    fn successful_refresh_resets_attempts() {
        let mut guard = RefreshGuard::default();
        assert!(guard.begin());
        guard.finish(false);
        assert!(guard.begin());
        guard.finish(true);
        assert_eq!(guard.attempts(), 0);
    }

    #[test]
    fn in_flight_release_runs_on_drop() {
        let session = Mutex::new(AuthSession::default());
        assert!(session.lock().unwrap().refresh.begin());
        {
            let _in_flight = RefreshInFlight {
                session: &session,
                success: false,
            };
            // Simulated early return: the drop must clear is_refreshing.
        }
        assert!(session.lock().unwrap().refresh.begin());
    }

    #[test]
    fn unsupported_method_fails_fast() {
        let config = Config::default();
        let client = Client::new(config).unwrap();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt
            .block_on(client.execute::<()>(Method::HEAD, "/health", None))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMethod(_)));
    }
}
