// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Multi-dimensional tensor component.

use crate::batch::Component;
use crate::encode::{EncodeError, EncodeResult, PayloadEncoder};

/// An n-dimensional tensor with optional dimension names.
///
/// Row-major element order. The element buffer length must equal the product
/// of the shape; that is validated hard at encode time. Dimension-name
/// mismatches are a recoverable data-quality issue handled at construction
/// (see [`with_dim_names`]).
///
/// [`with_dim_names`]: TensorData::with_dim_names
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TensorData {
    /// Extent of each dimension, outermost first.
    pub shape: Vec<u64>,
    /// Optional per-dimension names (same rank as `shape`).
    pub names: Option<Vec<String>>,
    /// Element buffer, row-major.
    pub data: Vec<f64>,
}

impl TensorData {
    pub fn new(shape: Vec<u64>, data: Vec<f64>) -> Self {
        Self {
            shape,
            names: None,
            data,
        }
    }

    /// Attach dimension names.
    ///
    /// If the name count disagrees with the shape rank this reports the
    /// problem and continues without names rather than failing the record:
    /// the tensor still renders acceptably, it just loses its axis labels.
    pub fn with_dim_names(mut self, names: Vec<impl Into<String>>) -> Self {
        if names.len() == self.shape.len() {
            self.names = Some(names.into_iter().map(Into::into).collect());
        } else {
            log::warn!(
                "dimension name count {} does not match tensor rank {}; dropping names",
                names.len(),
                self.shape.len()
            );
            self.names = None;
        }
        self
    }

    /// Total element count implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product::<u64>() as usize
    }
}

impl Component for TensorData {
    const TYPE_NAME: &'static str = "strata.components.TensorData";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        let expected = self.num_elements();
        if expected != self.data.len() {
            return Err(EncodeError::ShapeMismatch {
                expected,
                got: self.data.len(),
            });
        }

        enc.write_u32(self.shape.len() as u32);
        for &dim in &self.shape {
            enc.write_u64(dim);
        }

        match &self.names {
            Some(names) => {
                enc.write_u8(1);
                for name in names {
                    enc.write_str(name)?;
                }
            }
            None => enc.write_u8(0),
        }

        enc.write_u64(self.data.len() as u64);
        for &v in &self.data {
            enc.write_f64(v);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_is_hard_error() {
        let tensor = TensorData::new(vec![2, 3], vec![0.0; 5]);
        let mut enc = PayloadEncoder::new();
        match tensor.encode(&mut enc) {
            Err(EncodeError::ShapeMismatch { expected, got }) => {
                assert_eq!(expected, 6);
                assert_eq!(got, 5);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_dim_name_mismatch_drops_names() {
        let tensor = TensorData::new(vec![2, 3], vec![0.0; 6]).with_dim_names(vec!["rows"]);
        assert!(tensor.names.is_none(), "mismatched names must be dropped");

        let tensor = TensorData::new(vec![2, 3], vec![0.0; 6]).with_dim_names(vec!["rows", "cols"]);
        assert_eq!(
            tensor.names,
            Some(vec!["rows".to_string(), "cols".to_string()])
        );
    }

    #[test]
    fn test_tensor_encoding_layout() {
        let tensor = TensorData::new(vec![2], vec![1.0, 2.0]);
        let mut enc = PayloadEncoder::new();
        tensor.encode(&mut enc).expect("encode");
        enc.end_value().expect("end");

        let (payload, _) = enc.into_parts();
        // rank (4) + shape (8) + names flag (1) + len (8) + data (16)
        assert_eq!(payload.len(), 37);
        assert_eq!(payload[0..4], 1u32.to_le_bytes());
        assert_eq!(payload[4..12], 2u64.to_le_bytes());
        assert_eq!(payload[12], 0);
    }
}
