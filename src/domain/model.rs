use serde::{Deserialize, Serialize};
use std::fmt;

pub const CSV_MIME_TYPE: &str = "text/csv";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Accepted upload kinds, serialised as the payload's `fileType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Pdf,
}

impl FileKind {
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type {
            CSV_MIME_TYPE => Some(FileKind::Csv),
            PDF_MIME_TYPE => Some(FileKind::Pdf),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "pdf" => Some(FileKind::Pdf),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FileKind::Csv => CSV_MIME_TYPE,
            FileKind::Pdf => PDF_MIME_TYPE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Pdf => "pdf",
        }
    }
}

/// A file chosen for upload, as reported by whoever picked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
}

impl SelectedFile {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            filename: filename.into(),
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_mime_type(&self.mime_type)
    }
}

/// The one input a submission is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionInput<'a> {
    File(&'a SelectedFile),
    Asin(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    pub file_type: FileKind,
    pub file_content_base64: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsinPayload {
    pub asin: String,
}

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    File(FilePayload),
    Asin(AsinPayload),
}

impl Payload {
    pub fn describe(&self) -> String {
        match self {
            Payload::File(file) => format!(
                "{} file '{}' ({} base64 chars)",
                file.file_type.as_str(),
                file.filename,
                file.file_content_base64.len()
            ),
            Payload::Asin(asin) => format!("ASIN '{}'", asin.asin),
        }
    }
}

/// (theme identifier, mention count), sent as a two-element array.
pub type Theme = (String, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sentiments {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl Sentiments {
    /// Sum of all three counts. Summed as `f64` since the counts come from
    /// the server and may not fit a `u64` together.
    pub fn total(&self) -> f64 {
        self.positive as f64 + self.negative as f64 + self.neutral as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub themes: Vec<Theme>,
    pub sentiments: Sentiments,
    pub top_keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoContent {
    pub title: String,
    pub bullets: Vec<String>,
    pub description: String,
}

/// Webhook response. `analysis` and `seoContent` are only guaranteed when
/// `success` is true; anything else the server sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_content: Option<SeoContent>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisResult {
    /// Failure text supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        ["message", "error"]
            .iter()
            .filter_map(|key| self.extra.get(*key))
            .find_map(|value| value.as_str())
            .filter(|message| !message.trim().is_empty())
    }
}

/// Identifiers of the copyable blocks of generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CopyItem {
    Title,
    Bullets,
    Description,
}

impl CopyItem {
    pub const ALL: [CopyItem; 3] = [CopyItem::Title, CopyItem::Bullets, CopyItem::Description];

    pub fn as_str(self) -> &'static str {
        match self {
            CopyItem::Title => "title",
            CopyItem::Bullets => "bullets",
            CopyItem::Description => "description",
        }
    }
}

impl fmt::Display for CopyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_asin_payload_shape() {
        let payload = Payload::Asin(AsinPayload {
            asin: "B08N5WRWNW".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "asin": "B08N5WRWNW" })
        );
    }

    #[test]
    fn test_file_payload_uses_camel_case_keys() {
        let payload = Payload::File(FilePayload {
            file_type: FileKind::Pdf,
            file_content_base64: "JVBERi0=".to_string(),
            filename: "reviews.pdf".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "fileType": "pdf",
                "fileContentBase64": "JVBERi0=",
                "filename": "reviews.pdf"
            })
        );
    }

    #[test]
    fn test_analysis_result_parses_theme_pairs() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "success": true,
            "analysis": {
                "themes": [["battery_life", 12], ["build_quality", 7]],
                "sentiments": { "positive": 3, "negative": 1, "neutral": 0 },
                "topKeywords": [{ "keyword": "durable", "frequency": 12 }]
            },
            "seoContent": {
                "title": "Durable Widget",
                "bullets": ["Lasts long"],
                "description": "A widget."
            },
            "requestId": "abc"
        }))
        .unwrap();

        let analysis = result.analysis.as_ref().unwrap();
        assert_eq!(analysis.themes[0], ("battery_life".to_string(), 12));
        assert_eq!(analysis.sentiments.total(), 4.0);
        assert_eq!(result.extra.get("requestId"), Some(&json!("abc")));
    }

    #[test]
    fn test_server_message_prefers_message_then_error() {
        let result: AnalysisResult =
            serde_json::from_value(json!({ "success": false, "error": "ASIN not found" }))
                .unwrap();
        assert_eq!(result.server_message(), Some("ASIN not found"));

        let silent: AnalysisResult = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(silent.server_message(), None);
    }

    #[test]
    fn test_file_kind_mapping() {
        assert_eq!(FileKind::from_mime_type("text/csv"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_mime_type("application/pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_mime_type("text/plain"), None);
        assert_eq!(FileKind::from_extension("CSV"), Some(FileKind::Csv));
    }
}
