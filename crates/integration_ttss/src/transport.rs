//! HTTP transport boundary
//!
//! The client facade only needs "send this request, give me status and
//! body". Keeping that behind a trait lets tests control status codes
//! without a server.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use reqwest::{Method, blocking::Client};
use tracing::debug;

use crate::{config::TtssConfig, error::TtssError};

/// An outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters for GET, form fields otherwise
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    /// A request without parameters
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// A GET request without parameters
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// A POST request without parameters; parameters go into a form body
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Append a parameter
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    #[must_use]
    pub fn param_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Value of the first parameter named `key`
    #[must_use]
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// A received response; any status, including errors, is a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Synchronous request/response capability
#[cfg_attr(test, automock)]
pub trait Transport {
    /// Send one request and wait for the complete response
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received at all.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TtssError>;
}

/// Blocking reqwest transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with the configured timeout and user agent
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TtssConfig) -> Result<Self, TtssError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TtssError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, error: &reqwest::Error) -> TtssError {
        if error.is_timeout() {
            TtssError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            TtssError::ConnectionFailed(error.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TtssError> {
        let builder = self.client.request(request.method.clone(), &request.url);
        let builder = if request.method == Method::GET {
            builder.query(&request.params)
        } else {
            builder.form(&request.params)
        };

        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = builder.send().map_err(|e| self.map_send_error(&e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.map_send_error(&e))?;

        Ok(HttpResponse { status, body })
    }
}
