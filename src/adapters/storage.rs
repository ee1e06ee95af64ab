use crate::domain::model::{AnalysisResult, FileKind, SelectedFile, UNKNOWN_MIME_TYPE};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// MIME type a file picker would report for `path`, judged by extension.
pub fn guess_mime_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(FileKind::from_extension)
        .map(FileKind::mime_type)
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// Reads `path` into a `SelectedFile`. `declared_mime_type` overrides the
/// extension-based guess.
pub async fn read_selected_file(
    path: &Path,
    declared_mime_type: Option<&str>,
) -> Result<SelectedFile> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = declared_mime_type.unwrap_or_else(|| guess_mime_type(path));

    Ok(SelectedFile::new(bytes, mime_type, filename))
}

/// Number of data rows in a CSV upload (header excluded).
pub fn count_csv_records(bytes: &[u8]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

pub fn result_filename(now: DateTime<Utc>) -> String {
    format!("analysis-{}.json", now.format("%Y%m%dT%H%M%SZ"))
}

/// Writes `result` as pretty JSON into `directory`, creating it if needed.
pub async fn save_result(
    directory: &Path,
    result: &AnalysisResult,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(directory).await?;

    let path = directory.join(result_filename(now));
    let json = serde_json::to_vec_pretty(result)?;
    tokio::fs::write(&path, json).await?;

    tracing::debug!("Saved analysis result to {}", path.display());
    Ok(path)
}
