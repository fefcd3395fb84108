//! Low-level HTTP client — `CryptowatchHttp`.
//!
//! One blocking GET per call. The path and query string are built by the
//! domain layer; this layer only attaches the origin and the fixed headers,
//! and maps the response to a decoded value or an error.

use crate::error::HttpError;
use crate::network;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

/// Low-level blocking HTTP client for the Cryptowatch REST API.
///
/// Holds a reusable connection pool and the two fixed request headers.
/// Safe to share across calls; each call is a single independent request.
#[derive(Clone)]
pub struct CryptowatchHttp {
    base_url: String,
    client: Client,
}

impl CryptowatchHttp {
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .default_headers(headers)
                .user_agent(network::USER_AGENT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET for `{base_url}/{path}` and decode the JSON body.
    ///
    /// A non-2xx status maps to [`HttpError::Api`] without touching the body;
    /// a 2xx body that is not valid JSON maps to [`HttpError::InvalidResponse`]
    /// carrying the raw text.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let resp = self.client.get(&url).send()?;
        let status = resp.status();

        if !status.is_success() {
            return Err(HttpError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|_| HttpError::InvalidResponse { body })
    }
}
