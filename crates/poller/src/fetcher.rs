//! Upstream review-status API client.
//!
//! Only transport and HTTP-status concerns live here; the shape of the body
//! is the validator's job, so each error kind stays attributable to exactly
//! one failure class.

use serde_json::Value;

use reviewbot_common::error::BotError;

/// Fetches review statuses updated since a cursor timestamp.
pub struct StatusFetcher {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl StatusFetcher {
    pub fn new(endpoint: String, token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            auth_header: format!("OAuth {token}"),
        }
    }

    /// GET the endpoint with `from_date = cursor`.
    ///
    /// Transport failures map to [`BotError::EndpointUnavailable`], non-success
    /// statuses to [`BotError::UpstreamStatus`]. The parsed JSON body is
    /// returned as-is, unvalidated.
    pub async fn fetch(&self, cursor: i64) -> Result<Value, BotError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", &self.auth_header)
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(|e| BotError::EndpointUnavailable {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.endpoint, status = status.as_u16(), "Upstream returned non-success status");
            return Err(BotError::UpstreamStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(BotError::MalformedBody)
    }
}
