//! HTTP client for the Bitrix24 REST API.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::response::BitrixResponse;

/// Client for a Bitrix24 inbound-webhook REST endpoint.
///
/// One instance is shared across all requests; `reqwest` pools the
/// underlying connections. The configured timeout bounds each call as a
/// whole, including connect time and body download.
#[derive(Debug, Clone)]
pub struct BitrixClient {
    client: Client,
    webhook_url: String,
}

impl BitrixClient {
    /// Create a client for the given webhook base URL.
    ///
    /// A missing trailing slash on the base is tolerated; method names are
    /// appended as path segments either way.
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::BuildFailed)?;

        let mut webhook_url = webhook_url.into();
        if !webhook_url.ends_with('/') {
            webhook_url.push('/');
        }

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Call one REST method with form-encoded parameters.
    ///
    /// Never fails: transport errors, non-success statuses, and non-JSON
    /// bodies are logged and rendered into the `{"error": message}` shape.
    /// Parameters are any `Serialize` value that form-encodes to pairs,
    /// typically a slice of tuples so bracketed keys like
    /// `filter[OWNER_TYPE]` keep their order.
    pub async fn call<T: Serialize + ?Sized>(&self, method: &str, params: &T) -> BitrixResponse {
        match self.execute(method, params).await {
            Ok(body) => BitrixResponse::ok(body),
            Err(err) => {
                tracing::error!(method = %method, error = %err, "Upstream call failed");
                BitrixResponse::error(err.to_string())
            }
        }
    }

    async fn execute<T: Serialize + ?Sized>(
        &self,
        method: &str,
        params: &T,
    ) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.method_url(method))
            .form(params)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed {
                method: method.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamStatus {
                method: method.to_string(),
                status,
            });
        }

        response.json().await.map_err(|e| ClientError::InvalidJson {
            method: method.to_string(),
            source: e,
        })
    }

    /// The URL a REST method is posted to.
    fn method_url(&self, method: &str) -> String {
        format!("{}{}.json", self.webhook_url, method)
    }
}
