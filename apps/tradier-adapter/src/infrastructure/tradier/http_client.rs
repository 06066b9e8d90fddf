//! Request executor: one authenticated round trip per call.

use std::time::{Duration, Instant};

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use super::config::{AccessToken, TradierConfig};
use super::error::{TradierError, TransportFailure};
use super::params::{Param, encode};
use super::session::{Session, SessionStats};

/// HTTP executor for the Tradier REST API.
///
/// Stateless between calls and safe to share across concurrent tasks.
/// Never retries; every failure is classified and returned.
#[derive(Debug, Clone)]
pub struct TradierHttpClient {
    session: Session,
    access_token: AccessToken,
    api_root: String,
    timeout: Duration,
}

impl TradierHttpClient {
    /// Create an executor over `session`.
    ///
    /// Fails with a login error when the configured token is blank.
    pub fn new(config: &TradierConfig, session: Session) -> Result<Self, TradierError> {
        if config.access_token.is_blank() {
            return Err(TradierError::Login("access token is empty".to_string()));
        }

        Ok(Self {
            session,
            access_token: config.access_token.clone(),
            api_root: config.api_root(),
            timeout: config.timeout,
        })
    }

    /// `<base-url>/<api-version>` prefix.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ephemeral session counters.
    #[must_use]
    pub fn session_stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// Returns true if the executor runs on a caller-supplied session.
    #[must_use]
    pub const fn is_session_borrowed(&self) -> bool {
        self.session.is_borrowed()
    }

    /// GET `path` with the encoded `params`.
    pub async fn get(&self, path: &str, params: &[Param]) -> Result<Value, TradierError> {
        self.execute(Method::GET, path, &encode(params), None::<&()>)
            .await
    }

    /// POST `body` as JSON to `path`.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, TradierError> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    /// Perform one request and decode the body as JSON.
    ///
    /// `query` is sent as given; callers drop absent parameters first.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value, TradierError> {
        let url = self.url(path);

        tracing::debug!(
            method = %method,
            path = %path,
            params = ?query,
            has_body = body.is_some(),
            "Tradier request"
        );

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(TransportFailure::Encode)?;

        // Dropped on every return below; owned sessions are released and
        // borrowed slots returned then.
        let session = self.session.acquire().await?;

        let mut request = session
            .request(method.clone(), &url)
            .bearer_auth(self.access_token.expose())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(bytes) = payload {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            let failure = TransportFailure::from_reqwest(e);
            tracing::warn!(method = %method, path = %path, error = %failure, "Tradier request failed");
            failure
        })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if !status.is_success() => {
                tracing::warn!(
                    path = %path,
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read error response body"
                );
                String::new()
            }
            Err(e) => return Err(TransportFailure::from_reqwest(e).into()),
        };

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            bytes = text.len(),
            "Tradier response"
        );

        if !status.is_success() {
            let err = TradierError::from_status(status, text);
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                kind = err.kind().as_str(),
                "Tradier returned an error status"
            );
            return Err(err);
        }

        match serde_json::from_str(&text) {
            Ok(document) => Ok(document),
            Err(source) => {
                tracing::error!(path = %path, body = %text, "Problems decoding response");
                Err(TransportFailure::Decode { source, body: text }.into())
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}
