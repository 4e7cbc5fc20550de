//! Identifier formatting, clipboard copy and Snowflake decoding
//!
//! Long numeric identifiers are hard to read and easy to mistype. This crate
//! renders them in hyphenated groups for display, copies the raw value to the
//! clipboard, and splits Snowflake identifiers into their fields.

pub mod clipboard;
pub mod error;
pub mod formatter;
pub mod identifier;
pub mod snowflake;

pub use clipboard::ClipboardPort;
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use error::{ClipboardError, CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use formatter::{copy_id_to_clipboard, format_snowflake_id, FormatOptions, IdFormatter};
pub use identifier::Identifier;
pub use snowflake::{SnowflakeLayout, SnowflakeParts, DEFAULT_EPOCH_MS};
