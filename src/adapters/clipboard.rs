use crate::domain::ports::ClipboardPort;
use crate::utils::error::{AppError, Result};
use std::sync::Mutex;

/// The desktop clipboard. A context is opened per write so nothing
/// platform-specific is held across threads.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "cli")]
impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        use clipboard_rs::{Clipboard, ClipboardContext};

        let ctx = ClipboardContext::new().map_err(|e| AppError::ClipboardError {
            message: e.to_string(),
        })?;
        ctx.set_text(text.to_string())
            .map_err(|e| AppError::ClipboardError {
                message: e.to_string(),
            })
    }
}

/// Keeps every write in memory. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::ClipboardError {
                message: message.clone(),
            });
        }
        let mut writes = self.writes.lock().map_err(|e| AppError::ClipboardError {
            message: e.to_string(),
        })?;
        writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();
        assert_eq!(clipboard.writes(), vec!["one", "two"]);
        assert_eq!(clipboard.last().as_deref(), Some("two"));
    }

    #[test]
    fn test_failing_clipboard() {
        let clipboard = MemoryClipboard::failing("no display");
        assert!(matches!(
            clipboard.write_text("x"),
            Err(AppError::ClipboardError { .. })
        ));
        assert!(clipboard.writes().is_empty());
    }
}
