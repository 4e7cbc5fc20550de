//! Snowflake identifier decoding
//!
//! Layout, most significant bit first: 41 bits of milliseconds since the
//! generator epoch, 5 bits data-center id, 5 bits worker id, 12 bits
//! per-millisecond sequence.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use idfmt_config::SnowflakeConfig;
use serde::Serialize;

/// 2024-01-01T00:00:00Z in Unix milliseconds
pub const DEFAULT_EPOCH_MS: u64 = 1_704_067_200_000;

const SEQUENCE_BITS: u32 = 12;
const WORKER_ID_BITS: u32 = 5;
const DATA_CENTER_ID_BITS: u32 = 5;

const WORKER_ID_SHIFT: u32 = SEQUENCE_BITS;
const DATA_CENTER_ID_SHIFT: u32 = SEQUENCE_BITS + WORKER_ID_BITS;
const TIMESTAMP_SHIFT: u32 = SEQUENCE_BITS + WORKER_ID_BITS + DATA_CENTER_ID_BITS;

const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;
const WORKER_ID_MASK: u64 = (1 << WORKER_ID_BITS) - 1;
const DATA_CENTER_ID_MASK: u64 = (1 << DATA_CENTER_ID_BITS) - 1;

/// Bit layout of the generator that produced an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeLayout {
    /// Generator epoch in Unix milliseconds
    pub epoch_ms: u64,
}

impl Default for SnowflakeLayout {
    fn default() -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
        }
    }
}

impl From<&SnowflakeConfig> for SnowflakeLayout {
    fn from(config: &SnowflakeConfig) -> Self {
        Self {
            epoch_ms: config.epoch_ms,
        }
    }
}

/// Components of a decoded identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnowflakeParts {
    pub id: u64,
    /// Creation time in Unix milliseconds
    pub timestamp_ms: u64,
    pub datetime: DateTime<Utc>,
    pub data_center_id: u8,
    pub worker_id: u8,
    pub sequence: u16,
}

impl SnowflakeLayout {
    pub fn new(epoch_ms: u64) -> Self {
        Self { epoch_ms }
    }

    /// Split `id` into its timestamp, data-center, worker and sequence fields
    pub fn decode(&self, id: u64) -> CoreResult<SnowflakeParts> {
        let out_of_range = || CoreError::OutOfRange { value: id.to_string() };

        let timestamp_ms = self
            .epoch_ms
            .checked_add(id >> TIMESTAMP_SHIFT)
            .ok_or_else(out_of_range)?;
        let millis = i64::try_from(timestamp_ms).map_err(|_| out_of_range())?;
        let datetime = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(out_of_range)?;

        Ok(SnowflakeParts {
            id,
            timestamp_ms,
            datetime,
            data_center_id: ((id >> DATA_CENTER_ID_SHIFT) & DATA_CENTER_ID_MASK) as u8,
            worker_id: ((id >> WORKER_ID_SHIFT) & WORKER_ID_MASK) as u8,
            sequence: (id & SEQUENCE_MASK) as u16,
        })
    }
}

// ==================== Tests ====================
