use crate::domain::model::{
    AsinPayload, FileKind, FilePayload, Payload, SelectedFile, SubmissionInput,
};
use crate::utils::error::{AppError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload a CSV or PDF file";
pub const MISSING_INPUT_MESSAGE: &str = "Please provide either a file or ASIN";

/// Form state for one page session: a file or an ASIN, never both.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    file: Option<SelectedFile>,
    asin: String,
    error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `candidate` if its declared MIME type is CSV or PDF.
    ///
    /// A rejected candidate leaves the current file untouched and sets the
    /// validation error instead.
    pub fn select_file(&mut self, candidate: SelectedFile) -> Result<()> {
        if FileKind::from_mime_type(&candidate.mime_type).is_none() {
            tracing::debug!(
                "Rejected '{}' with declared type '{}'",
                candidate.filename,
                candidate.mime_type
            );
            self.error = Some(UNSUPPORTED_FILE_MESSAGE.to_string());
            return Err(AppError::validation(UNSUPPORTED_FILE_MESSAGE));
        }

        tracing::debug!(
            "Selected '{}' ({}, {} bytes)",
            candidate.filename,
            candidate.mime_type,
            candidate.bytes.len()
        );
        self.file = Some(candidate);
        self.asin.clear();
        self.error = None;
        Ok(())
    }

    /// Stores the ASIN verbatim and drops any selected file.
    pub fn set_asin(&mut self, text: impl Into<String>) {
        self.asin = text.into();
        self.file = None;
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn asin(&self) -> &str {
        &self.asin
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn input(&self) -> Option<SubmissionInput<'_>> {
        match &self.file {
            Some(file) => Some(SubmissionInput::File(file)),
            None if !self.asin.is_empty() => Some(SubmissionInput::Asin(&self.asin)),
            None => None,
        }
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self, in_flight: bool) -> bool {
        !in_flight && self.input().is_some()
    }

    pub fn build_payload(&self) -> Result<Payload> {
        match self.input() {
            Some(SubmissionInput::File(file)) => {
                let file_type = file
                    .kind()
                    .ok_or_else(|| AppError::validation(UNSUPPORTED_FILE_MESSAGE))?;
                Ok(Payload::File(FilePayload {
                    file_type,
                    file_content_base64: encode_file_content(file),
                    filename: file.filename.clone(),
                }))
            }
            Some(SubmissionInput::Asin(asin)) => Ok(Payload::Asin(AsinPayload {
                asin: asin.to_string(),
            })),
            None => Err(AppError::validation(MISSING_INPUT_MESSAGE)),
        }
    }
}

/// Base64 content of `file` with no data-URI prefix.
pub fn encode_file_content(file: &SelectedFile) -> String {
    let data_url = format!(
        "data:{};base64,{}",
        file.mime_type,
        STANDARD.encode(&file.bytes)
    );
    strip_data_uri_prefix(&data_url).to_string()
}

/// Drops everything up to and including the first comma.
pub fn strip_data_uri_prefix(encoded: &str) -> &str {
    match encoded.split_once(',') {
        Some((_, content)) => content,
        None => encoded,
    }
}
