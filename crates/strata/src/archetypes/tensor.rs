// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: an n-dimensional tensor.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::TensorData;
use crate::descriptor::ComponentDescriptor;

/// A single n-dimensional tensor (image-like data, feature maps, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tensor {
    /// Tensor payload. Primary field; at most one instance is meaningful.
    pub data: Option<Vec<TensorData>>,
}

impl Tensor {
    /// Descriptor for the `data` field.
    pub const DESC_DATA: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Tensor",
        "data",
        "strata.components.TensorData",
    );

    /// Create a record holding one tensor.
    pub fn new(data: TensorData) -> Self {
        Self {
            data: Some(vec![data]),
        }
    }

    /// All fields absent.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty.
    pub fn clear_fields() -> Self {
        Self {
            data: Some(Vec::new()),
        }
    }

    /// Replace the `data` field (last write wins).
    pub fn with_data(mut self, data: TensorData) -> Self {
        self.data = Some(vec![data]);
        self
    }
}

impl Archetype for Tensor {
    const NAME: &'static str = "strata.archetypes.Tensor";
    const INDICATOR_TYPE: &'static str = "strata.indicator.Tensor";

    fn num_instances(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(2);
        serialize_field(&mut out, Self::DESC_DATA, self.data.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::SerializeError;
    use crate::encode::EncodeError;

    #[test]
    fn test_tensor_serializes() {
        let tensor = Tensor::new(
            TensorData::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0])
                .with_dim_names(vec!["rows", "cols"]),
        );
        let batches = tensor.serialize().expect("serialize");
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].num_instances(), 1);
        assert!(batches[1].is_indicator());
    }

    #[test]
    fn test_bad_shape_aborts_serialization() {
        let tensor = Tensor::new(TensorData::new(vec![4], vec![1.0]));
        let err = tensor.serialize().expect_err("shape mismatch must fail");
        let SerializeError::Field { descriptor, source } = err;
        assert_eq!(descriptor, Tensor::DESC_DATA);
        assert!(matches!(source, EncodeError::ShapeMismatch { .. }));
    }
}
