// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! # Strata - Columnar data-logging SDK
//!
//! Typed archetype records serialized into ordered, named component batches
//! for columnar transports and recording sinks.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::archetypes::Points3D;
//! use strata::Archetype;
//!
//! let points = Points3D::new([[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
//!     .with_radii([0.5])
//!     .with_colors([0xff0000ff_u32]);
//!
//! // Present fields in declared order, indicator batch last.
//! let batches = points.serialize().expect("serialize");
//! assert!(batches.last().expect("non-empty").is_indicator());
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ComponentDescriptor`] | Wire-stable `(archetype, field, component type)` identity |
//! | [`Component`] | One encodable component value type |
//! | [`SerializedBatch`] | One encoded, named column with per-instance offsets |
//! | [`Archetype`] | A loggable record of optional component batches |
//! | [`SerializedColumn`] | One field re-expressed as time-partitioned row groups |
//!
//! ## Modules Overview
//!
//! - [`descriptor`] - field identity triples
//! - [`encode`] - little-endian columnar payload encoding
//! - [`batch`] - component trait and serialized batches
//! - [`archetype`] - the ordered serializer contract
//! - [`columns`] - columnar partitioning for bulk submission
//! - [`components`] / [`archetypes`] - the generated schema surface

/// Archetype contract and the ordered field serializer.
pub mod archetype;
/// Archetype record types generated from the schema.
pub mod archetypes;
/// Component trait and serialized batches.
pub mod batch;
/// Columnar partitioning for bulk, time-indexed submission.
pub mod columns;
/// Component value types generated from the schema.
pub mod components;
/// Component descriptors: wire-stable field identity.
pub mod descriptor;
/// Columnar payload encoding.
pub mod encode;

pub use archetype::{indicator_batch, Archetype, SerializeError, SerializeResult};
pub use batch::{serialize_batch, Component, SerializedBatch};
pub use columns::{columns, partition, ColumnsError, PartitionError, SerializedColumn};
pub use descriptor::ComponentDescriptor;
pub use encode::{EncodeError, EncodeResult, PayloadEncoder};

/// Strata SDK version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
