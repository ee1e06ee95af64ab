use crate::domain::model::Payload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw webhook reply; status interpretation happens in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<WebhookResponse>;
}

pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn webhook_endpoint(&self) -> &str;
    fn output_directory(&self) -> Option<&str>;
}
