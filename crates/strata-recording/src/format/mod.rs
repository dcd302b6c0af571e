// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Recording file formats.

pub mod strata;

pub use strata::{FileHeader, FormatError, StrataReader, StrataWriter, FORMAT_VERSION, MAGIC};

use serde::{Deserialize, Serialize};
use ::strata::SerializedBatch as CoreBatch;

/// One recorded batch: an owned copy of a serialized batch's descriptor,
/// offset table and payload.
///
/// The descriptor's archetype name lives on the enclosing message; only the
/// field and component type names are stored per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBatch {
    /// Field name within the archetype.
    pub field: String,
    /// Component type name.
    pub component_type: String,
    /// End offset of every instance within the payload.
    pub value_ends: Vec<u32>,
    /// Encoded payload.
    pub payload: Vec<u8>,
}

impl RecordedBatch {
    /// Number of instances in this batch.
    pub fn num_instances(&self) -> usize {
        self.value_ends.len()
    }

    /// Check if this is an archetype indicator.
    pub fn is_indicator(&self) -> bool {
        self.field == ::strata::descriptor::INDICATOR_FIELD
    }
}

impl From<&CoreBatch> for RecordedBatch {
    fn from(batch: &CoreBatch) -> Self {
        Self {
            field: batch.descriptor().field.to_owned(),
            component_type: batch.descriptor().component_type.to_owned(),
            value_ends: batch.value_ends().to_vec(),
            payload: batch.payload().to_vec(),
        }
    }
}

/// One recorded logging call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    /// Timestamp in nanoseconds since recording start.
    pub timestamp_nanos: u64,

    /// Entity path the record was logged to.
    pub entity_path: String,

    /// Archetype name.
    pub archetype: String,

    /// Serialized batches in wire order (indicator last).
    pub batches: Vec<RecordedBatch>,
}

impl RecordedMessage {
    /// Build a message from a serialized archetype output.
    pub fn from_batches(
        timestamp_nanos: u64,
        entity_path: &str,
        archetype: &str,
        batches: &[CoreBatch],
    ) -> Self {
        Self {
            timestamp_nanos,
            entity_path: entity_path.to_owned(),
            archetype: archetype.to_owned(),
            batches: batches.iter().map(RecordedBatch::from).collect(),
        }
    }

    /// Total payload bytes across all batches.
    pub fn payload_bytes(&self) -> usize {
        self.batches.iter().map(|b| b.payload.len()).sum()
    }
}

/// Recording metadata, stored as a JSON trailer in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingMetadata {
    /// Recording start time, nanoseconds since the unix epoch.
    pub start_time_nanos: u64,

    /// SDK version used for recording.
    pub sdk_version: String,

    /// Entities seen in this recording.
    pub entities: Vec<EntityInfo>,

    /// Optional description.
    pub description: Option<String>,
}

/// Per-entity summary for metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Entity path.
    pub path: String,

    /// Archetype name.
    pub archetype: String,

    /// Message count in recording.
    pub message_count: u64,
}

impl Default for RecordingMetadata {
    fn default() -> Self {
        Self {
            start_time_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0),
            sdk_version: ::strata::VERSION.to_string(),
            entities: Vec::new(),
            description: None,
        }
    }
}
