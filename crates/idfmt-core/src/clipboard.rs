//! Clipboard access behind an async port

use crate::error::ClipboardError;
use async_trait::async_trait;

/// Trait for clipboard backends
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, through `arboard`.
///
/// A fresh platform handle is opened per write on a blocking worker, so a
/// headless host surfaces as [`ClipboardError::Unavailable`] on the write
/// rather than at construction.
///
/// On Linux the selection is served by this process, so a write only returns
/// once a clipboard manager or another application has taken it over. A
/// successful write therefore always leaves pasteable contents behind, even
/// after the process exits.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            write_and_hand_over(&mut clipboard, text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(format!("clipboard worker failed: {}", e)))?
    }
}

#[cfg(all(feature = "system-clipboard", target_os = "linux"))]
fn write_and_hand_over(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    log::debug!(target: "idfmt::clipboard", "Holding clipboard selection until it is taken over");
    clipboard.set().wait().text(text)
}

#[cfg(all(feature = "system-clipboard", not(target_os = "linux")))]
fn write_and_hand_over(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

// ==================== Tests ====================
