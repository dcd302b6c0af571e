// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Component trait and serialized batches.

use crate::descriptor::ComponentDescriptor;
use crate::encode::{EncodeResult, PayloadEncoder};

/// The smallest named, typed unit of loggable data.
///
/// Implementations are generated from the schema definition; `TYPE_NAME`
/// must match the component type name used in field descriptors.
pub trait Component: Sized {
    /// Wire-stable component type name.
    const TYPE_NAME: &'static str;

    /// Encode one value into the payload encoder.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value cannot be represented in the columnar
    /// encoding (oversized string, shape/buffer mismatch).
    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()>;
}

/// One encoded, named, homogeneous column of component values.
///
/// Holds the descriptor, the contiguous little-endian payload, and the end
/// offset of every instance within it. A zero-instance batch is valid and is
/// distinct from an absent field (absent fields never produce a batch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedBatch {
    descriptor: ComponentDescriptor,
    payload: Vec<u8>,
    value_ends: Vec<u32>,
}

impl SerializedBatch {
    /// Assemble a batch from encoder output.
    pub fn new(descriptor: ComponentDescriptor, payload: Vec<u8>, value_ends: Vec<u32>) -> Self {
        debug_assert!(value_ends.windows(2).all(|w| w[0] <= w[1]));
        debug_assert_eq!(
            payload.len(),
            value_ends.last().copied().unwrap_or(0) as usize
        );
        Self {
            descriptor,
            payload,
            value_ends,
        }
    }

    /// The zero-instance, zero-payload indicator batch for `descriptor`.
    pub fn indicator(descriptor: ComponentDescriptor) -> Self {
        Self {
            descriptor,
            payload: Vec::new(),
            value_ends: Vec::new(),
        }
    }

    pub fn descriptor(&self) -> &ComponentDescriptor {
        &self.descriptor
    }

    /// Number of instances in this batch.
    pub fn num_instances(&self) -> usize {
        self.value_ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_ends.is_empty()
    }

    /// Check if this is an archetype indicator.
    pub fn is_indicator(&self) -> bool {
        self.descriptor.is_indicator()
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// End offset (exclusive) of every instance within the payload.
    pub fn value_ends(&self) -> &[u32] {
        &self.value_ends
    }

    /// Byte range of instance `index` within the payload.
    pub fn instance_range(&self, index: usize) -> Option<(usize, usize)> {
        let end = *self.value_ends.get(index)? as usize;
        let start = match index {
            0 => 0,
            i => self.value_ends[i - 1] as usize,
        };
        Some((start, end))
    }

    /// Copy out `len` instances starting at `start`, rebasing offsets.
    ///
    /// Panics if the range is out of bounds; callers validate lengths first
    /// (see [`crate::columns::partition`]).
    pub fn slice_instances(&self, start: usize, len: usize) -> Self {
        let byte_start = match start {
            0 => 0,
            i => self.value_ends[i - 1] as usize,
        };
        let byte_end = match start + len {
            0 => 0,
            i => self.value_ends[i - 1] as usize,
        };

        let value_ends = self.value_ends[start..start + len]
            .iter()
            .map(|&e| e - byte_start as u32)
            .collect();

        Self {
            descriptor: self.descriptor,
            payload: self.payload[byte_start..byte_end].to_vec(),
            value_ends,
        }
    }
}

/// Encode a slice of component values into one batch.
pub fn serialize_batch<C: Component>(
    descriptor: ComponentDescriptor,
    values: &[C],
) -> EncodeResult<SerializedBatch> {
    let mut enc = PayloadEncoder::with_capacity(values.len(), 8);
    for value in values {
        value.encode(&mut enc)?;
        enc.end_value()?;
    }
    let (payload, value_ends) = enc.into_parts();
    Ok(SerializedBatch::new(descriptor, payload, value_ends))
}
