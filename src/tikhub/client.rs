//! TikHub HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TikHubError};

/// HTTP methods used by TikHub endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Connection parameters for the TikHub API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub api_key: String,
    pub base_url: String,
}

impl Credential {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

/// A fully prepared API call: method, path, optional JSON body and query
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub query: Map<String, Value>,
}

impl ApiRequest {
    /// Create a GET request with an empty query
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
            query: Map::new(),
        }
    }
}

/// TikHub API client
pub struct TikHubClient {
    client: Client,
    credential: Credential,
}

impl TikHubClient {
    /// Create a new client with connection timeouts applied
    pub fn new(credential: Credential) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, credential }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.credential.base_url.trim_end_matches('/')
    }

    /// Build the absolute URL for a path and query
    ///
    /// Null query values are skipped; everything else is rendered as text.
    pub(crate) fn build_url(&self, path: &str, query: &Map<String, Value>) -> String {
        let pairs: Vec<String> = query
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&query_value_to_string(v))
                )
            })
            .collect();

        if pairs.is_empty() {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}{}?{}", self.base_url(), path, pairs.join("&"))
        }
    }

    /// Issue one authenticated call and parse the JSON response
    ///
    /// Non-success responses become [`TikHubError::Api`] with the message taken
    /// from the body's `message`, `error` or `detail` field. Failures before a
    /// response arrives become [`TikHubError::Http`]. Nothing is retried.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &Map<String, Value>,
    ) -> Result<Value> {
        let url = self.build_url(path, query);
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.as_reqwest(), &url)
            .header("Authorization", format!("Bearer {}", self.credential.api_key))
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status.to_string()
            } else {
                extract_error_message(&text)
            };
            debug!("{} {} failed with {}: {}", method, path, status, message);
            return Err(TikHubError::Api {
                status: status.as_u16(),
                method: method.to_string(),
                path: path.to_string(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            TikHubError::Json(format!(
                "Failed to parse response from {} {}: {}",
                method, path, e
            ))
        })
    }

    /// Execute a prepared request
    pub async fn send(&self, request: &ApiRequest) -> Result<Value> {
        self.execute(
            request.method,
            &request.path,
            request.body.as_ref(),
            &request.query,
        )
        .await
    }

    /// Validate the credential against the health endpoint
    pub async fn health_check(&self) -> Result<Value> {
        self.send(&ApiRequest::get(api::HEALTH_CHECK)).await
    }
}

/// Render a scalar JSON value as a query-string value
pub(crate) fn query_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Pick a human-readable message out of an error body
///
/// First non-empty of `message`, `error`, `detail`; otherwise the whole body.
fn extract_error_message(body: &str) -> String {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return body.trim().to_string(),
    };

    for key in ["message", "error", "detail"] {
        match parsed.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Null) | Some(Value::String(_)) | None => continue,
            Some(other) => return other.to_string(),
        }
    }

    parsed.to_string()
}

#[cfg(test)]
impl TikHubClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(Credential::new("test-key", base_url))
    }

    /// Test client whose requests give up after `timeout`
    pub fn test_client_with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("test client should build");
        Self {
            client,
            credential: Credential::new("test-key", base_url),
        }
    }
}
