//! HTTP calls to the chat backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning `RequestError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `RequestError` value. Callers decide how to
//! surface it; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;

use super::types::{ChatResponse, RequestError};
use crate::config::ClientConfig;

/// Seam between the submission controller and the network.
pub trait ChatTransport {
    /// POST `body` as JSON to `path` and decode a [`ChatResponse`].
    fn post_chat<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<ChatResponse, RequestError>>;
}

/// Join an endpoint path onto the configured base.
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    format!("{api_base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn decode_chat_body(status: u16, ok: bool, body: &str) -> Result<ChatResponse, RequestError> {
    if !ok {
        return Err(RequestError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    api_base: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self { api_base: config.api_base.clone() }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.api_base, path)
    }
}

impl ChatTransport for HttpTransport {
    async fn post_chat<B: Serialize>(&self, path: &str, body: &B) -> Result<ChatResponse, RequestError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(path);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| RequestError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            let text = resp
                .text()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            decode_chat_body(resp.status(), resp.ok(), &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(RequestError::Unavailable)
        }
    }
}

/// Ask `GET /health` whether the backend is up.
///
/// # Errors
///
/// Returns a `RequestError` if the request fails, the status is not 2xx, or
/// the body is not the expected JSON.
pub async fn check_health(transport: &HttpTransport) -> Result<bool, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&transport.url("/health"))
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestError::Status(resp.status()));
        }
        let text = resp
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let health: super::types::HealthResponse = serde_json::from_str(&text)?;
        Ok(health.is_ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = transport;
        Err(RequestError::Unavailable)
    }
}
