use crate::client::config::Config;
use crate::error::RpcError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use nexus_types::{RpcRequest, RpcResponse};

// The raw `result` value stops at `NexusClient`, which decodes it into the
// adapter's result type.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RpcTransport {
    /// Sends one envelope and returns the raw `result` value.
    async fn call(&self, request: RpcRequest) -> Result<serde_json::Value, RpcError>;
}

/// POSTs envelopes as JSON to the configured endpoint.
pub struct HttpTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            url: config.endpoint_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(&self, request: RpcRequest) -> Result<serde_json::Value, RpcError> {
        let action = request.action();
        tracing::debug!("Calling action {} at {}", action, self.url);

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Action {} failed with status {}", action, status);
            return Err(RpcError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope: RpcResponse =
            serde_json::from_slice(&body).map_err(|source| RpcError::Json {
                status: Some(status.as_u16()),
                source,
            })?;
        Ok(envelope.result)
    }
}
