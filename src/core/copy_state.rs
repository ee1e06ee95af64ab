use crate::domain::model::{AnalysisResult, CopyItem};
use crate::domain::ports::ClipboardPort;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const COPY_RESET_AFTER: Duration = Duration::from_millis(2000);

/// Per-item "copied" flags that reset themselves.
///
/// Each mark stores a generation number; a reset timer only clears the flag
/// if no newer mark has happened since it was spawned.
#[derive(Debug, Clone)]
pub struct CopyState {
    flags: Arc<Mutex<HashMap<CopyItem, u64>>>,
    generation: Arc<AtomicU64>,
    reset_after: Duration,
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyState {
    pub fn new() -> Self {
        Self::with_reset_after(COPY_RESET_AFTER)
    }

    pub fn with_reset_after(reset_after: Duration) -> Self {
        Self {
            flags: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
            reset_after,
        }
    }

    pub fn is_copied(&self, item: CopyItem) -> bool {
        lock(&self.flags).contains_key(&item)
    }

    /// Sets the flag for `item` and schedules its reset. Must be called
    /// from within a tokio runtime.
    pub fn mark_copied(&self, item: CopyItem) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        lock(&self.flags).insert(item, generation);

        let flags = Arc::clone(&self.flags);
        let reset_after = self.reset_after;
        tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;
            let mut flags = lock(&flags);
            if flags.get(&item) == Some(&generation) {
                flags.remove(&item);
            }
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Text placed on the clipboard for `item`, if the result carries copy.
pub fn clipboard_text(result: &AnalysisResult, item: CopyItem) -> Option<String> {
    let seo = result.seo_content.as_ref()?;
    Some(match item {
        CopyItem::Title => seo.title.clone(),
        CopyItem::Bullets => seo.bullets.join("\n• "),
        CopyItem::Description => seo.description.clone(),
    })
}

/// Writes `text` to the clipboard and marks `item` copied.
///
/// Clipboard failures are logged and swallowed; the flag stays unset.
pub fn copy_text(clipboard: &dyn ClipboardPort, text: &str, item: CopyItem, state: &CopyState) {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::debug!("Copied {} ({} chars)", item, text.chars().count());
            state.mark_copied(item);
        }
        Err(e) => tracing::error!("Failed to copy {}: {}", item, e),
    }
}

pub fn copy_item(
    clipboard: &dyn ClipboardPort,
    result: &AnalysisResult,
    item: CopyItem,
    state: &CopyState,
) -> bool {
    match clipboard_text(result, item) {
        Some(text) => {
            copy_text(clipboard, &text, item, state);
            state.is_copied(item)
        }
        None => {
            tracing::warn!("Nothing to copy for {}: response has no generated content", item);
            false
        }
    }
}
