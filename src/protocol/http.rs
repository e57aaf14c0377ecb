// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Blynk pin API.

use std::time::Duration;

use reqwest::Client;

use crate::command::PinRequest;
use crate::error::{ParseError, ProtocolError, Result};
use crate::types::PinValue;

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for the HTTP transport.
///
/// # Examples
///
/// ```
/// use blynkctl::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("http://blynk-cloud.com")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    server: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the specified server base URL.
    #[must_use]
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the server base URL.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn into_client(self) -> std::result::Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.server.trim_end_matches('/').to_string(),
            client,
        })
    }
}

// ============================================================================
// HttpClient - One GET per pin read or write
// ============================================================================

/// HTTP client for pin reads and writes.
///
/// # Examples
///
/// ```no_run
/// use blynkctl::protocol::HttpClient;
///
/// # async fn example() -> blynkctl::Result<()> {
/// let client = HttpClient::new("http://blynk-cloud.com")?;
/// let value = client.read_pin("auth-token", "V3").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the specified server with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(server: impl Into<String>) -> std::result::Result<Self, ProtocolError> {
        HttpConfig::new(server).into_client()
    }

    /// Returns the server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, token: &str, request: &PinRequest) -> String {
        format!("{}/{}", self.base_url, request.to_path(token))
    }

    /// Reads the current physical value of a pin.
    ///
    /// The server answers with a JSON array whose first element is the
    /// value, numeric or string-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response that is not a non-empty numeric array.
    pub async fn read_pin(&self, token: &str, pin: &str) -> Result<PinValue> {
        let request = PinRequest::read(pin);
        let body = self.send(token, &request).await?;
        Ok(parse_value_array(&body)?)
    }

    /// Writes a physical value to a pin.
    ///
    /// The response body carries no information and is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn write_pin(&self, token: &str, pin: &str, value: PinValue) -> Result<()> {
        let request = PinRequest::write(pin, value);
        self.send(token, &request).await?;
        Ok(())
    }

    async fn send(
        &self,
        token: &str,
        request: &PinRequest,
    ) -> std::result::Result<String, ProtocolError> {
        let url = self.build_url(token, request);

        tracing::debug!(pin = %request.pin(), url = %url, "sending pin request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed(
                request.pin().to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(ProtocolError::Status {
                status: response.status().as_u16(),
                pin: request.pin().to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "received pin response");

        Ok(body)
    }
}

/// Parses the value array a pin read returns.
///
/// Element 0 carries the value; the server encodes it either as a JSON
/// number or as a numeric string.
fn parse_value_array(body: &str) -> std::result::Result<PinValue, ParseError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    let first = json
        .as_array()
        .and_then(|values| values.first())
        .ok_or_else(|| ParseError::NotAnArray(body.to_string()))?;

    match first {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(PinValue::from)
            .ok_or_else(|| ParseError::NotNumeric(n.to_string())),
        serde_json::Value::String(s) => s
            .parse::<PinValue>()
            .map_err(|_| ParseError::NotNumeric(s.clone())),
        other => Err(ParseError::NotNumeric(other.to_string())),
    }
}
