// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Columnar partitioning of serialized batches.
//!
//! Re-expresses each present field of a record as a sequence of row groups
//! for bulk, time-indexed submission. Group lengths must account for every
//! instance: a partition that does not sum to the batch length is a usage
//! error, never silently truncated or padded.

use crate::archetype::{Archetype, SerializeError};
use crate::batch::SerializedBatch;
use crate::descriptor::ComponentDescriptor;
use std::fmt;

/// Errors raised at the columnar partitioning boundary.
#[derive(Debug)]
pub enum PartitionError {
    /// Group lengths do not sum to a present field's instance count.
    LengthMismatch {
        descriptor: ComponentDescriptor,
        batch_len: usize,
        partition_len: usize,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                descriptor,
                batch_len,
                partition_len,
            } => write!(
                f,
                "invalid partition for {}: group lengths sum to {}, batch has {} instances",
                descriptor, partition_len, batch_len
            ),
        }
    }
}

impl std::error::Error for PartitionError {}

/// Errors raised by [`columns`]: serialization or partitioning can fail.
#[derive(Debug)]
pub enum ColumnsError {
    Serialize(SerializeError),
    Partition(PartitionError),
}

impl fmt::Display for ColumnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "{}", e),
            Self::Partition(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ColumnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            Self::Partition(e) => Some(e),
        }
    }
}

impl From<SerializeError> for ColumnsError {
    fn from(e: SerializeError) -> Self {
        Self::Serialize(e)
    }
}

impl From<PartitionError> for ColumnsError {
    fn from(e: PartitionError) -> Self {
        Self::Partition(e)
    }
}

/// One present field re-expressed as a sequence of row groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedColumn {
    pub descriptor: ComponentDescriptor,
    pub row_groups: Vec<SerializedBatch>,
}

impl SerializedColumn {
    /// Number of row groups (shared across all columns of one call).
    pub fn num_groups(&self) -> usize {
        self.row_groups.len()
    }
}

/// Split one batch into row groups of the given lengths.
///
/// The lengths must sum to the batch's instance count; concatenating the
/// resulting groups reconstructs the original batch.
pub fn partition(
    batch: &SerializedBatch,
    lengths: &[usize],
) -> Result<Vec<SerializedBatch>, PartitionError> {
    let total: usize = lengths.iter().sum();
    if total != batch.num_instances() {
        return Err(PartitionError::LengthMismatch {
            descriptor: *batch.descriptor(),
            batch_len: batch.num_instances(),
            partition_len: total,
        });
    }

    let mut groups = Vec::with_capacity(lengths.len());
    let mut start = 0;
    for &len in lengths {
        groups.push(batch.slice_instances(start, len));
        start += len;
    }
    Ok(groups)
}

/// Partition every present data field of `record` into row groups.
///
/// With explicit `lengths`, every present field's instance count must equal
/// the sum of the group lengths; the first mismatching field aborts the call.
/// Without lengths, the partition is inferred as unit-length groups from the
/// first present field (in declared order), then validated against the rest
/// the same way. An all-absent record yields an empty result.
///
/// The indicator carries no rows and is excluded; the bulk submission path
/// re-attaches it per row group at the sink.
pub fn columns<A: Archetype>(
    record: &A,
    lengths: Option<&[usize]>,
) -> Result<Vec<SerializedColumn>, ColumnsError> {
    let batches = record.serialize()?;
    let data: Vec<SerializedBatch> = batches.into_iter().filter(|b| !b.is_indicator()).collect();

    let Some(first) = data.first() else {
        return Ok(Vec::new());
    };

    let lengths: Vec<usize> = match lengths {
        Some(lengths) => lengths.to_vec(),
        None => {
            log::debug!(
                "{}: inferring unit-length partition of {} rows from {}",
                A::NAME,
                first.num_instances(),
                first.descriptor()
            );
            vec![1; first.num_instances()]
        }
    };

    let mut out = Vec::with_capacity(data.len());
    for batch in &data {
        out.push(SerializedColumn {
            descriptor: *batch.descriptor(),
            row_groups: partition(batch, &lengths)?,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{serialize_batch, Component};
    use crate::encode::{EncodeResult, PayloadEncoder};

    const DESC: ComponentDescriptor = ComponentDescriptor::new("test.Archetype", "xs", "test.U32");

    struct TestValue(u32);

    impl Component for TestValue {
        const TYPE_NAME: &'static str = "test.U32";

        fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
            enc.write_u32(self.0);
            Ok(())
        }
    }

    fn batch(n: u32) -> SerializedBatch {
        let values: Vec<TestValue> = (0..n).map(TestValue).collect();
        serialize_batch(DESC, &values).expect("serialize")
    }

    #[test]
    fn test_partition_reconstructs() {
        let b = batch(5);
        let groups = partition(&b, &[2, 1, 2]).expect("partition");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].num_instances(), 2);
        assert_eq!(groups[1].num_instances(), 1);
        assert_eq!(groups[2].num_instances(), 2);

        // Concatenating the groups reconstructs the original payload.
        let rejoined: Vec<u8> = groups.iter().flat_map(|g| g.payload().to_vec()).collect();
        assert_eq!(rejoined, b.payload());
        let total: usize = groups.iter().map(SerializedBatch::num_instances).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_partition_sum_mismatch_fails() {
        let b = batch(5);
        let err = partition(&b, &[2, 2]).expect_err("must not truncate");
        match err {
            PartitionError::LengthMismatch {
                batch_len,
                partition_len,
                ..
            } => {
                assert_eq!(batch_len, 5);
                assert_eq!(partition_len, 4);
            }
        }
    }

    #[test]
    fn test_partition_zero_length_groups() {
        let b = batch(3);
        let groups = partition(&b, &[0, 3, 0]).expect("partition");
        assert_eq!(groups[0].num_instances(), 0);
        assert_eq!(groups[1].num_instances(), 3);
        assert_eq!(groups[2].num_instances(), 0);
    }

    #[test]
    fn test_partition_empty_batch() {
        let b = batch(0);
        let groups = partition(&b, &[]).expect("partition");
        assert!(groups.is_empty());
    }
}
