// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Columnar payload encoding for component batches.
//!
//! Values are appended little-endian into a single growing buffer; the
//! encoder records the end offset of every instance so a finished payload
//! can later be re-sliced at instance boundaries (see [`crate::columns`]).

use std::fmt;

/// Errors raised while encoding a single component value.
#[derive(Debug, Clone)]
pub enum EncodeError {
    /// A string exceeds the u32 length prefix.
    StringTooLong { len: usize },
    /// A tensor buffer does not match the product of its shape.
    ShapeMismatch { expected: usize, got: usize },
    /// The encoded payload exceeds the u32 offset table.
    PayloadTooLarge { len: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StringTooLong { len } => {
                write!(f, "string too long for length prefix: {} bytes", len)
            }
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "buffer length does not match shape: expected {} elements, got {}",
                    expected, got
                )
            }
            Self::PayloadTooLarge { len } => {
                write!(f, "payload too large for offset table: {} bytes", len)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

pub type EncodeResult<T> = core::result::Result<T, EncodeError>;

/// Little-endian columnar payload encoder.
///
/// One encoder produces the payload of one component batch. Component impls
/// append their primitive parts; the batch serializer calls [`end_value`]
/// after each instance to close its offset range.
///
/// [`end_value`]: PayloadEncoder::end_value
#[derive(Debug, Default)]
pub struct PayloadEncoder {
    buffer: Vec<u8>,
    value_ends: Vec<u32>,
}

impl PayloadEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for an expected instance count and per-instance byte size.
    pub fn with_capacity(instances: usize, bytes_per_instance: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(instances * bytes_per_instance),
            value_ends: Vec::with_capacity(instances),
        }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buffer.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f32(&mut self, v: f32) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f64(&mut self, v: f64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a length-prefixed UTF-8 string (u32 byte length, no padding).
    pub fn write_str(&mut self, s: &str) -> EncodeResult<()> {
        let len = s.len();
        let prefix = u32::try_from(len).map_err(|_| EncodeError::StringTooLong { len })?;
        self.buffer.extend_from_slice(&prefix.to_le_bytes());
        self.buffer.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Close the current instance: record its end offset.
    pub fn end_value(&mut self) -> EncodeResult<()> {
        let len = self.buffer.len();
        let end = u32::try_from(len).map_err(|_| EncodeError::PayloadTooLarge { len })?;
        self.value_ends.push(end);
        Ok(())
    }

    /// Number of closed instances so far.
    pub fn num_values(&self) -> usize {
        self.value_ends.len()
    }

    /// Consume the encoder, yielding the payload and the instance end table.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u32>) {
        (self.buffer, self.value_ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_values() {
        let mut enc = PayloadEncoder::new();
        enc.write_f32(1.5);
        enc.end_value().expect("end");
        enc.write_f32(-2.0);
        enc.end_value().expect("end");

        let (payload, ends) = enc.into_parts();
        assert_eq!(payload.len(), 8);
        assert_eq!(ends, vec![4, 8]);
        assert_eq!(payload[0..4], 1.5f32.to_le_bytes());
    }

    #[test]
    fn test_string_prefix() {
        let mut enc = PayloadEncoder::new();
        enc.write_str("hello").expect("write");
        enc.end_value().expect("end");

        let (payload, ends) = enc.into_parts();
        assert_eq!(ends, vec![9]);
        assert_eq!(payload[0..4], 5u32.to_le_bytes());
        assert_eq!(&payload[4..], b"hello");
    }

    #[test]
    fn test_empty_value_is_valid() {
        // A zero-byte instance still closes an offset range.
        let mut enc = PayloadEncoder::new();
        enc.end_value().expect("end");
        let (payload, ends) = enc.into_parts();
        assert!(payload.is_empty());
        assert_eq!(ends, vec![0]);
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::ShapeMismatch {
            expected: 6,
            got: 5,
        };
        assert_eq!(
            err.to_string(),
            "buffer length does not match shape: expected 6 elements, got 5"
        );
    }
}
