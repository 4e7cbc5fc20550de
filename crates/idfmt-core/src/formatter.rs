//! Display formatting and clipboard copy for long identifiers
//!
//! Grouping runs from the least significant end, so with the default options
//! `1234567890123456789` reads as `123-4567-8901-2345-6789`.

use crate::clipboard::ClipboardPort;
use crate::error::{CoreError, CoreResult};
use crate::identifier::Identifier;
use idfmt_config::FormatterConfig;
use idfmt_utils::{group_from_right, strip_separator};

/// Formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Characters per group; values of at most this length are left as is
    pub group_size: usize,
    /// Inserted between groups
    pub separator: String,
    /// Treat a numeric zero as "no identifier"
    pub zero_is_absent: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            group_size: 4,
            separator: "-".to_string(),
            zero_is_absent: true,
        }
    }
}

impl From<&FormatterConfig> for FormatOptions {
    fn from(config: &FormatterConfig) -> Self {
        Self {
            group_size: config.group_size,
            separator: config.separator.clone(),
            zero_is_absent: config.zero_is_absent,
        }
    }
}

/// Stateless identifier formatter
#[derive(Debug, Clone, Default)]
pub struct IdFormatter {
    options: FormatOptions,
}

impl IdFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Whether `id` counts as "no identifier" under these options
    pub fn is_absent(&self, id: Option<&Identifier>) -> bool {
        id.map_or(true, |id| id.is_absent(self.options.zero_is_absent))
    }

    /// Format an identifier for display. Absent identifiers format as `""`.
    pub fn format(&self, id: Option<&Identifier>) -> String {
        match id {
            Some(id) if !self.is_absent(Some(id)) => {
                group_from_right(&id.raw(), self.options.group_size, &self.options.separator)
            }
            _ => String::new(),
        }
    }

    /// Undo [`format`](Self::format): drop the separators again
    pub fn unformat(&self, formatted: &str) -> String {
        strip_separator(formatted, &self.options.separator)
    }

    /// Write the raw, ungrouped identifier to `clipboard`.
    ///
    /// Absent identifiers fail with [`CoreError::EmptyInput`] without touching
    /// the clipboard. A backend failure is logged once and returned as
    /// [`CoreError::ClipboardDenied`].
    pub async fn copy_to_clipboard(
        &self,
        clipboard: &dyn ClipboardPort,
        id: Option<&Identifier>,
    ) -> CoreResult<()> {
        let id = match id {
            Some(id) if !self.is_absent(Some(id)) => id,
            _ => return Err(CoreError::EmptyInput),
        };

        let raw = id.raw();
        match clipboard.write_text(&raw).await {
            Ok(()) => {
                log::debug!(target: "idfmt::clipboard", "Copied ID {} to clipboard", raw);
                Ok(())
            }
            Err(source) => {
                log::error!(target: "idfmt::clipboard", "Failed to copy ID to clipboard: {}", source);
                Err(CoreError::ClipboardDenied { source })
            }
        }
    }
}

/// Format with the default options (groups of 4, `-` separator)
pub fn format_snowflake_id(id: Option<&Identifier>) -> String {
    IdFormatter::default().format(id)
}

/// Copy with the default options, reporting only whether the write happened
pub async fn copy_id_to_clipboard(clipboard: &dyn ClipboardPort, id: Option<&Identifier>) -> bool {
    IdFormatter::default().copy_to_clipboard(clipboard, id).await.is_ok()
}

// ==================== Tests ====================
