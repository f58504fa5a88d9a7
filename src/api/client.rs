//! Generic HTTP request helper.
//!
//! Every endpoint wrapper funnels through [`ApiClient::request`], which owns
//! the base-URL joining, bearer authentication, JSON encoding, and the
//! uniform mapping of non-2xx responses into [`ApiError::Server`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ApiConfig;
use crate::errors::ApiError;

use super::auth::AccessToken;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Blocking client for the BankDash REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// Non-2xx statuses become [`ApiError::Server`] with the body's `message`
    /// field when the server sent one; undecodable 2xx bodies become
    /// [`ApiError::Unexpected`]. An empty 2xx body decodes as JSON `null`.
    pub fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&AccessToken>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "API request");

        let mut request = self.http.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }

        decode_body(&text)
    }

    /// POST with a JSON body, no authentication.
    pub fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, None, Some(body))
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let payload = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(payload).map_err(|err| ApiError::Unexpected(err.to_string()))
}

/// Pulls the `message` field out of a structured error body, if any.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}
