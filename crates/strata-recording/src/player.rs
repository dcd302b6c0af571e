// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Recording playback.
//!
//! Reads finalized `.strata` files back as recorded messages.

use crate::filter::EntityFilter;
use crate::format::{RecordedMessage, RecordingMetadata, StrataReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Player configuration.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Input file path.
    pub input_path: PathBuf,

    /// Entity filter (None = all entities).
    pub entity_filter: Option<EntityFilter>,

    /// Start offset (skip messages before N nanoseconds).
    pub start_offset_nanos: u64,
}

impl PlayerConfig {
    /// Create a new player config.
    pub fn new<P: AsRef<Path>>(input_path: P) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            entity_filter: None,
            start_offset_nanos: 0,
        }
    }

    /// Set entity filter.
    pub fn entity_filter(mut self, filter: EntityFilter) -> Self {
        self.entity_filter = Some(filter);
        self
    }

    /// Set start offset.
    pub fn start_offset_nanos(mut self, offset: u64) -> Self {
        self.start_offset_nanos = offset;
        self
    }
}

/// Player errors.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] crate::format::FormatError),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Recording player.
pub struct Player {
    config: PlayerConfig,
    reader: StrataReader,
}

impl Player {
    /// Open a recording for playback.
    pub fn open(config: PlayerConfig) -> Result<Self, PlayerError> {
        if !config.input_path.exists() {
            return Err(PlayerError::FileNotFound(config.input_path.clone()));
        }

        let reader = StrataReader::open(&config.input_path)?;
        tracing::info!(
            "Opened {} ({} messages)",
            config.input_path.display(),
            reader.header().message_count
        );

        Ok(Self { config, reader })
    }

    /// Recording metadata.
    pub fn metadata(&self) -> &RecordingMetadata {
        self.reader.metadata()
    }

    /// Total message count (before filtering).
    pub fn message_count(&self) -> u64 {
        self.reader.header().message_count
    }

    /// Recording duration in nanoseconds.
    pub fn duration_nanos(&self) -> u64 {
        self.reader.header().duration_nanos
    }

    /// Read the next message passing the filter, or `None` at end of file.
    pub fn next_message(&mut self) -> Result<Option<RecordedMessage>, PlayerError> {
        while let Some(msg) = self.reader.read_message()? {
            if msg.timestamp_nanos < self.config.start_offset_nanos {
                continue;
            }
            if let Some(ref filter) = self.config.entity_filter {
                if !filter.matches(&msg.entity_path) {
                    continue;
                }
            }
            return Ok(Some(msg));
        }
        Ok(None)
    }

    /// Read all remaining messages passing the filter.
    pub fn read_all(&mut self) -> Result<Vec<RecordedMessage>, PlayerError> {
        let mut out = Vec::new();
        while let Some(msg) = self.next_message()? {
            out.push(msg);
        }
        Ok(out)
    }
}
