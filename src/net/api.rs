//! REST API client for the fan-site backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, FetchError>` so panels can log the failure
//! and degrade to an unchanged list or an inline message without crashing
//! hydration. No retries; the user retries via Refresh/Seed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Batmobile, Gadget, SeedOutcome};

/// A failed API call. Panels treat both variants as one generic failure;
/// the distinction only shows up in logs.
#[derive(Clone, Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Http(u16),
}

/// REST client with an explicitly injected base URL.
///
/// An empty base means same-origin requests. Injecting the base rather than
/// reading it from ambient globals keeps the client testable.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Build a client from the compile-time `BACKEND_URL` setting,
    /// defaulting to same-origin.
    pub fn from_env() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(""))
    }

    /// Join the base URL with an absolute API path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }

    /// Fetch the full gadget list from `GET /api/gadgets`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on network failure or a non-2xx response.
    pub async fn fetch_gadgets(&self) -> Result<Vec<Gadget>, FetchError> {
        self.get_json::<Vec<Gadget>>("/api/gadgets").await
    }

    /// Fetch the full Batmobile list from `GET /api/batmobiles`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on network failure or a non-2xx response.
    pub async fn fetch_batmobiles(&self) -> Result<Vec<Batmobile>, FetchError> {
        self.get_json::<Vec<Batmobile>>("/api/batmobiles").await
    }

    /// Ask the server to insert sample gadget records via
    /// `POST /api/seed/gadgets`. No request body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on network failure or a non-2xx response.
    pub async fn seed_gadgets(&self) -> Result<SeedOutcome, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/api/seed/gadgets"))
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Http(resp.status()));
            }
            resp.json::<SeedOutcome>()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(FetchError::Network("not available on server".to_owned()))
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Http(resp.status()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(FetchError::Network("not available on server".to_owned()))
        }
    }
}
