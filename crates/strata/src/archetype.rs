// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Archetype contract and the ordered field serializer.
//!
//! An archetype record is a fixed, schema-declared set of optional component
//! batches. Serialization walks the fields in declared order (part of the
//! wire contract, independent of setter call order), skips absent fields,
//! encodes present ones, and always appends the indicator batch last.

use crate::batch::{serialize_batch, Component, SerializedBatch};
use crate::descriptor::ComponentDescriptor;
use crate::encode::EncodeError;
use std::fmt;

/// Errors raised while serializing an archetype record.
///
/// Serialization is all-or-nothing: the first field that fails to encode
/// aborts the call and nothing partial is returned.
#[derive(Debug)]
pub enum SerializeError {
    /// A field's batch could not be encoded.
    Field {
        descriptor: ComponentDescriptor,
        source: EncodeError,
    },
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { descriptor, source } => {
                write!(f, "failed to encode {}: {}", descriptor, source)
            }
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field { source, .. } => Some(source),
        }
    }
}

pub type SerializeResult<T> = core::result::Result<T, SerializeError>;

/// A named, schema-defined record type representing one loggable entity shape.
///
/// Implementations are generated from the schema definition. Records have
/// value semantics: constructed fresh per logging call, populated through
/// `with_*` setters, consumed by [`serialize`], no persistent identity.
///
/// [`serialize`]: Archetype::serialize
pub trait Archetype {
    /// Wire-stable archetype name.
    const NAME: &'static str;

    /// Component type name of the zero-length indicator batch.
    const INDICATOR_TYPE: &'static str;

    /// Emit the present fields as batches in declared order, indicator last.
    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>>;

    /// Length of the designated primary field (0 when absent).
    fn num_instances(&self) -> usize;
}

/// Encode one optional field and append it, skipping absent slots.
pub fn serialize_field<C: Component>(
    out: &mut Vec<SerializedBatch>,
    descriptor: ComponentDescriptor,
    field: Option<&[C]>,
) -> SerializeResult<()> {
    if let Some(values) = field {
        let batch = serialize_batch(descriptor, values)
            .map_err(|source| SerializeError::Field { descriptor, source })?;
        out.push(batch);
    }
    Ok(())
}

/// The indicator batch for archetype `A`.
pub fn indicator_batch<A: Archetype>() -> SerializedBatch {
    SerializedBatch::indicator(ComponentDescriptor::indicator(A::NAME, A::INDICATOR_TYPE))
}

/// Terminate a serialization: append the indicator, unconditionally last.
pub fn finish_serialize<A: Archetype>(mut batches: Vec<SerializedBatch>) -> Vec<SerializedBatch> {
    batches.push(indicator_batch::<A>());
    log::trace!("{}: serialized {} batches", A::NAME, batches.len());
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{EncodeResult, PayloadEncoder};

    struct Unencodable;

    impl Component for Unencodable {
        const TYPE_NAME: &'static str = "test.Unencodable";

        fn encode(&self, _enc: &mut PayloadEncoder) -> EncodeResult<()> {
            Err(EncodeError::ShapeMismatch {
                expected: 1,
                got: 0,
            })
        }
    }

    const DESC: ComponentDescriptor =
        ComponentDescriptor::new("test.Archetype", "bad", "test.Unencodable");

    #[test]
    fn test_serialize_field_skips_absent() {
        let mut out = Vec::new();
        serialize_field::<Unencodable>(&mut out, DESC, None).expect("absent field never encodes");
        assert!(out.is_empty());
    }

    #[test]
    fn test_serialize_field_fails_fast() {
        let mut out = Vec::new();
        let err = serialize_field(&mut out, DESC, Some(&[Unencodable])).expect_err("must fail");
        assert!(out.is_empty(), "no partial output on failure");
        let SerializeError::Field { descriptor, .. } = err;
        assert_eq!(descriptor, DESC);
    }

    #[test]
    fn test_serialize_error_display() {
        let err = SerializeError::Field {
            descriptor: DESC,
            source: EncodeError::StringTooLong {
                len: u32::MAX as usize,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("test.Archetype:bad"));
        assert!(msg.contains("string too long"));
    }
}
