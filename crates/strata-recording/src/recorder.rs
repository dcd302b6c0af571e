// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Archetype recorder.
//!
//! Serializes archetype records and appends them to a `.strata` file.

use crate::filter::EntityFilter;
use crate::format::{EntityInfo, RecordedMessage, RecordingMetadata, StrataWriter};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use strata::{columns, indicator_batch, Archetype};
use thiserror::Error;

/// Recorder configuration.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Output file path.
    pub output_path: PathBuf,

    /// Entity filter (None = record all entities).
    pub entity_filter: Option<EntityFilter>,

    /// Optional description for metadata.
    pub description: Option<String>,
}

impl RecorderConfig {
    /// Create a new recorder config with defaults.
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            entity_filter: None,
            description: None,
        }
    }

    /// Set entity filter.
    pub fn entity_filter(mut self, filter: EntityFilter) -> Self {
        self.entity_filter = Some(filter);
        self
    }

    /// Set description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Recorder errors.
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] crate::format::FormatError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] strata::SerializeError),

    #[error("Columnar error: {0}")]
    Columns(#[from] strata::ColumnsError),

    #[error("Timestamp count {timestamps} does not match row group count {groups}")]
    TimestampCountMismatch { timestamps: usize, groups: usize },

    #[error("Not recording")]
    NotRecording,

    #[error("Already recording")]
    AlreadyRecording,
}

/// Recording statistics.
#[derive(Debug, Clone, Default)]
pub struct RecordingStats {
    /// Total messages recorded.
    pub message_count: u64,

    /// Total payload bytes written.
    pub bytes_written: u64,

    /// Recording duration in seconds.
    pub duration_secs: f64,

    /// Entities recorded.
    pub entity_count: usize,
}

/// Archetype recorder.
pub struct Recorder {
    config: RecorderConfig,
    writer: Option<StrataWriter>,
    start_time: Option<Instant>,
    entity_stats: HashMap<(String, String), u64>,
    stats: RecordingStats,
}

impl Recorder {
    /// Create a new recorder.
    pub fn new(config: RecorderConfig) -> Self {
        Self {
            config,
            writer: None,
            start_time: None,
            entity_stats: HashMap::new(),
            stats: RecordingStats::default(),
        }
    }

    /// Start recording.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        if self.writer.is_some() {
            return Err(RecorderError::AlreadyRecording);
        }

        let metadata = RecordingMetadata {
            description: self.config.description.clone(),
            ..Default::default()
        };

        let writer = StrataWriter::create(&self.config.output_path, metadata)?;
        self.writer = Some(writer);
        self.start_time = Some(Instant::now());
        self.entity_stats.clear();
        self.stats = RecordingStats::default();

        tracing::info!("Started recording to {}", self.config.output_path.display());

        Ok(())
    }

    /// Stop recording and finalize the file.
    pub fn stop(&mut self) -> Result<RecordingStats, RecorderError> {
        let mut writer = self.writer.take().ok_or(RecorderError::NotRecording)?;

        let entities: Vec<EntityInfo> = self
            .entity_stats
            .iter()
            .map(|((path, archetype), count)| EntityInfo {
                path: path.clone(),
                archetype: archetype.clone(),
                message_count: *count,
            })
            .collect();
        writer.metadata_mut().entities = entities;
        writer.finalize()?;

        if let Some(start) = self.start_time.take() {
            self.stats.duration_secs = start.elapsed().as_secs_f64();
        }
        self.stats.entity_count = self.entity_stats.len();

        tracing::info!(
            "Stopped recording: {} messages, {:.1}s",
            self.stats.message_count,
            self.stats.duration_secs
        );

        Ok(self.stats.clone())
    }

    /// Serialize and record one archetype at the current time.
    pub fn log<A: Archetype>(
        &mut self,
        entity_path: &str,
        archetype: &A,
    ) -> Result<(), RecorderError> {
        if !self.accepts(entity_path) {
            return Ok(());
        }

        let batches = archetype.serialize()?;
        let msg =
            RecordedMessage::from_batches(self.elapsed_nanos(), entity_path, A::NAME, &batches);
        self.write(msg)
    }

    /// Record one archetype as a time-indexed column: the record is split
    /// into row groups (one per timestamp) and written as one message each.
    ///
    /// `lengths` gives the rows per group; when `None`, unit-length groups
    /// are inferred from the record's first present field. The indicator is
    /// re-attached to every row group so each message stays self-describing.
    pub fn log_columns<A: Archetype>(
        &mut self,
        entity_path: &str,
        timestamps: &[u64],
        archetype: &A,
        lengths: Option<&[usize]>,
    ) -> Result<(), RecorderError> {
        if !self.accepts(entity_path) {
            return Ok(());
        }

        let cols = columns(archetype, lengths)?;
        let groups = cols.first().map_or(0, |c| c.num_groups());
        if groups != timestamps.len() {
            return Err(RecorderError::TimestampCountMismatch {
                timestamps: timestamps.len(),
                groups,
            });
        }

        for (i, &timestamp) in timestamps.iter().enumerate() {
            let mut batches: Vec<_> = cols.iter().map(|c| c.row_groups[i].clone()).collect();
            batches.push(indicator_batch::<A>());
            let msg = RecordedMessage::from_batches(timestamp, entity_path, A::NAME, &batches);
            self.write(msg)?;
        }
        Ok(())
    }

    fn accepts(&self, entity_path: &str) -> bool {
        self.config
            .entity_filter
            .as_ref()
            .map_or(true, |f| f.matches(entity_path))
    }

    fn elapsed_nanos(&self) -> u64 {
        self.start_time
            .map(|t| t.elapsed().as_nanos() as u64)
            .unwrap_or(0)
    }

    fn write(&mut self, msg: RecordedMessage) -> Result<(), RecorderError> {
        let writer = self.writer.as_mut().ok_or(RecorderError::NotRecording)?;
        let payload_bytes = msg.payload_bytes() as u64;

        tracing::debug!(
            entity = %msg.entity_path,
            archetype = %msg.archetype,
            batches = msg.batches.len(),
            "recording message"
        );

        *self
            .entity_stats
            .entry((msg.entity_path.clone(), msg.archetype.clone()))
            .or_insert(0) += 1;

        writer.write_message(&msg)?;
        self.stats.message_count += 1;
        self.stats.bytes_written += payload_bytes;
        Ok(())
    }

    /// Check if currently recording.
    pub fn is_recording(&self) -> bool {
        self.writer.is_some()
    }

    /// Get current statistics.
    pub fn stats(&self) -> &RecordingStats {
        &self.stats
    }

    /// Get configuration.
    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata::archetypes::{Points3D, Scalars};
    use tempfile::tempdir;

    #[test]
    fn test_recorder_config_builder() {
        let config = RecorderConfig::new("/tmp/test.strata").description("Test recording");
        assert_eq!(config.description, Some("Test recording".into()));
        assert!(config.entity_filter.is_none());
    }

    #[test]
    fn test_recorder_start_stop() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("test.strata");

        let mut recorder = Recorder::new(RecorderConfig::new(&path));
        assert!(!recorder.is_recording());

        recorder.start().expect("start");
        assert!(recorder.is_recording());
        assert!(matches!(
            recorder.start(),
            Err(RecorderError::AlreadyRecording)
        ));

        let stats = recorder.stop().expect("stop");
        assert!(!recorder.is_recording());
        assert_eq!(stats.message_count, 0);
        assert!(matches!(recorder.stop(), Err(RecorderError::NotRecording)));
    }

    #[test]
    fn test_recorder_log_messages() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("test.strata");

        let mut recorder = Recorder::new(RecorderConfig::new(&path));
        recorder.start().expect("start");

        for i in 0..10 {
            recorder
                .log("/plots/loss", &Scalars::single(i as f64))
                .expect("log");
        }

        let stats = recorder.stop().expect("stop");
        assert_eq!(stats.message_count, 10);
        assert_eq!(stats.entity_count, 1);
    }

    #[test]
    fn test_recorder_entity_filter() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("test.strata");

        let config = RecorderConfig::new(&path)
            .entity_filter(EntityFilter::include(vec!["/camera/".into()]));
        let mut recorder = Recorder::new(config);
        recorder.start().expect("start");

        recorder
            .log("/camera/points", &Points3D::new([[0.0, 0.0, 0.0]]))
            .expect("log");
        recorder
            .log("/lidar/points", &Points3D::new([[0.0, 0.0, 0.0]]))
            .expect("log");

        let stats = recorder.stop().expect("stop");
        assert_eq!(stats.message_count, 1);
    }

    #[test]
    fn test_log_columns_timestamp_mismatch() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("test.strata");

        let mut recorder = Recorder::new(RecorderConfig::new(&path));
        recorder.start().expect("start");

        let scalars = Scalars::new([1.0, 2.0, 3.0]);
        let err = recorder
            .log_columns("/plots/loss", &[100, 200], &scalars, None)
            .expect_err("two timestamps for three rows must fail");
        assert!(matches!(
            err,
            RecorderError::TimestampCountMismatch {
                timestamps: 2,
                groups: 3
            }
        ));

        recorder.stop().expect("stop");
    }
}
