use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Answer from the gateway's health probe.
#[derive(Debug, Deserialize)]
pub struct HealthReply {
    pub status: String,
    /// Milliseconds since the Unix epoch on the gateway's clock.
    pub timestamp: u64,
}

pub struct GatewayClient {
    client: Client,
    gateway_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check gateway liveness.
    pub async fn health(&self) -> Result<HealthReply, Box<dyn std::error::Error>> {
        let body = self
            .read_json(format!("{}/health", self.gateway_url), &[])
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch the forwarded posts listing, or one post by `id`.
    pub async fn posts(&self, id: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
        let mut query = Vec::new();
        if let Some(id) = id {
            query.push(("id", id));
        }
        self.read_json(format!("{}/api/posts", self.gateway_url), &query)
            .await
    }

    /// List blobs through the gateway. Both arguments fall back to the
    /// gateway's own configuration when omitted.
    pub async fn blobs(
        &self,
        prefix: Option<&str>,
        token: Option<&str>,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let mut query = Vec::new();
        if let Some(prefix) = prefix {
            query.push(("prefix", prefix));
        }
        if let Some(token) = token {
            query.push(("token", token));
        }
        self.read_json(format!("{}/api/blobs", self.gateway_url), &query)
            .await
    }

    async fn read_json(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let resp = self.client.get(url).query(query).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Gateway returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }
}
