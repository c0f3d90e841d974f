//! HTTP implementation of [`KamService`].
//!
//! Talks JSON to the KAM web service with `reqwest`. The per-request
//! timeout comes from [`Configuration::timeout_seconds`]; there is no retry
//! policy, a failed request is reported to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use kamnav_core::Configuration;

use crate::error::{Error, Result};
use crate::model::{BelStatement, BelTerm, EdgeDirection, KamEdge};
use crate::service::KamService;

/// HTTP client for the KAM web service.
#[derive(Clone, Debug)]
pub struct HttpKamService {
    base_url: String,
    http: reqwest::Client,
}

/// Response of the service version endpoint.
#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

impl HttpKamService {
    /// Builds a client from the given configuration.
    pub fn new(config: &Configuration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            base_url: config.service_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Query the service version. Used as the reachability probe.
    pub async fn version(&self) -> Result<String> {
        let response = self.http.get(self.endpoint("version")).send().await?;
        let response = check_status(response).await?;
        let body: VersionResponse = response.json().await?;
        Ok(body.version)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());
    Err(Error::service(status.as_u16(), message))
}

#[async_trait]
impl KamService for HttpKamService {
    async fn supporting_terms(&self, node_id: &str) -> Result<Vec<BelTerm>> {
        log::debug!("Fetching supporting terms for node {node_id}");
        self.get_json("node/terms", &[("id", node_id.to_string())])
            .await
    }

    async fn supporting_statements(&self, edge_id: &str) -> Result<Vec<BelStatement>> {
        log::debug!("Fetching supporting statements for edge {edge_id}");
        self.get_json("edge/statements", &[("id", edge_id.to_string())])
            .await
    }

    async fn adjacent_edges(
        &self,
        node_id: &str,
        direction: EdgeDirection,
        limit: Option<usize>,
    ) -> Result<Vec<KamEdge>> {
        log::debug!(
            "Fetching {} edges adjacent to node {node_id}",
            direction.status_label()
        );
        let mut query = vec![
            ("id", node_id.to_string()),
            ("direction", direction.as_str().to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json("node/adjacent", &query).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Configuration::new("http://kam.example.org/ws/", 30);
        let service = HttpKamService::new(&config).unwrap();
        assert_eq!(service.base_url(), "http://kam.example.org/ws");
        assert_eq!(
            service.endpoint("node/adjacent"),
            "http://kam.example.org/ws/node/adjacent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        // Nothing listens on this port; the request must fail with a
        // transport error, not a panic or an empty result.
        let config = Configuration::new("http://127.0.0.1:9/ws/", 5);
        let service = HttpKamService::new(&config).unwrap();
        let result = service.supporting_terms("n1").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
