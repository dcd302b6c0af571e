// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Strata Recording Sink
//!
//! Persist serialized archetype records to a self-contained `.strata` file
//! and read them back:
//! - [`Recorder`] - serialize-and-append sink with entity filtering
//! - [`Player`] - playback of finalized recordings
//! - CRC-checked, length-prefixed records with a JSON metadata trailer
//!
//! # Quick Start
//!
//! ```no_run
//! use strata::archetypes::Scalars;
//! use strata_recording::{Recorder, RecorderConfig};
//!
//! # fn main() -> Result<(), strata_recording::RecorderError> {
//! let mut recorder = Recorder::new(RecorderConfig::new("run.strata"));
//! recorder.start()?;
//! recorder.log("/plots/loss", &Scalars::single(0.25))?;
//! recorder.stop()?;
//! # Ok(())
//! # }
//! ```
//!
//! Inspect a capture from the command line:
//!
//! ```bash
//! strata-cat run.strata
//! strata-cat run.strata --entity /plots/
//! ```

pub mod filter;
pub mod format;
pub mod player;
pub mod recorder;

pub use filter::EntityFilter;
pub use format::{
    FormatError, RecordedBatch, RecordedMessage, RecordingMetadata, StrataReader, StrataWriter,
};
pub use player::{Player, PlayerConfig, PlayerError};
pub use recorder::{Recorder, RecorderConfig, RecorderError, RecordingStats};
