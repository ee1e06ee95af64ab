pub mod copy_state;
pub mod form;
pub mod render;
pub mod submission;

pub use crate::domain::model::{AnalysisResult, CopyItem, Payload, SelectedFile};
pub use crate::domain::ports::{ClipboardPort, ConfigProvider, WebhookResponse, WebhookTransport};
pub use crate::utils::error::Result;
