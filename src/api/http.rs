//! HTTP Documentation Service Client
//!
//! Thin reqwest client over the service's three endpoints. Non-2xx responses
//! and transport failures map to `Error::ExternalCall`; a 2xx response whose
//! body lacks the expected content maps to `Error::EmptyResult`. There are no
//! retries here: pacing between calls is the pipeline's job.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::ApiConfig;
use crate::types::{Error, Result};

use super::DocService;

pub struct HttpDocService {
    base_url: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl std::fmt::Debug for HttpDocService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDocService")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpDocService {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().map(SecretString::from),
            client,
        })
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}/{path}", self.base_url);
        debug!("POST {url}");

        let mut request = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| Error::external(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::external_status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| Error::external(format!("malformed response body: {e}")))
    }
}

#[async_trait]
impl DocService for HttpDocService {
    async fn document(&self, code: &str) -> Result<Value> {
        self.post_json("doc/", &json!({ "code": code })).await
    }

    async fn merge_charts(&self, flowcharts: &[String]) -> Result<String> {
        let value = self
            .post_json("chart", &json!({ "flowcharts": flowcharts }))
            .await?;

        match value.get("flowchart").and_then(Value::as_str) {
            Some(chart) if !chart.trim().is_empty() => Ok(chart.to_string()),
            _ => Err(Error::EmptyResult { what: "flowchart" }),
        }
    }

    async fn readme(&self, summary: &Value) -> Result<String> {
        let value = self.post_json("readme", summary).await?;

        match value.get("markdown").and_then(Value::as_str) {
            Some(markdown) if !markdown.trim().is_empty() => Ok(markdown.to_string()),
            _ => Err(Error::EmptyResult { what: "markdown" }),
        }
    }
}
