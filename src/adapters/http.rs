use crate::domain::model::Payload;
use crate::domain::ports::{WebhookResponse, WebhookTransport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Posts payloads with reqwest. No timeout and no retries are configured.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("review-seo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<WebhookResponse> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("Webhook response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(WebhookResponse { status, body })
    }
}
