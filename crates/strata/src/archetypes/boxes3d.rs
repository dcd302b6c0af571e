// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: a batch of 3D boxes.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::{ClassId, Color, HalfSize3D, Position3D};
use crate::descriptor::ComponentDescriptor;

/// A batch of axis-aligned 3D boxes, defined by half-extents around centers.
///
/// `half_sizes` is the primary field. Centers default to the scene origin
/// when absent; optional fields of length 1 broadcast to all instances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boxes3D {
    /// Box half-extents. Primary field.
    pub half_sizes: Option<Vec<HalfSize3D>>,
    /// Optional per-box centers.
    pub centers: Option<Vec<Position3D>>,
    /// Optional per-box colors.
    pub colors: Option<Vec<Color>>,
    /// Optional per-box class ids.
    pub class_ids: Option<Vec<ClassId>>,
}

impl Boxes3D {
    /// Descriptor for the `half_sizes` field.
    pub const DESC_HALF_SIZES: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Boxes3D",
        "half_sizes",
        "strata.components.HalfSize3D",
    );

    /// Descriptor for the `centers` field.
    pub const DESC_CENTERS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Boxes3D",
        "centers",
        "strata.components.Position3D",
    );

    /// Descriptor for the `colors` field.
    pub const DESC_COLORS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Boxes3D",
        "colors",
        "strata.components.Color",
    );

    /// Descriptor for the `class_ids` field.
    pub const DESC_CLASS_IDS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Boxes3D",
        "class_ids",
        "strata.components.ClassId",
    );

    /// Create a record with the given half-extents.
    pub fn from_half_sizes(
        half_sizes: impl IntoIterator<Item = impl Into<HalfSize3D>>,
    ) -> Self {
        Self::update_fields().with_half_sizes(half_sizes)
    }

    /// Create a record from centers and half-extents.
    pub fn from_centers_and_half_sizes(
        centers: impl IntoIterator<Item = impl Into<Position3D>>,
        half_sizes: impl IntoIterator<Item = impl Into<HalfSize3D>>,
    ) -> Self {
        Self::update_fields()
            .with_half_sizes(half_sizes)
            .with_centers(centers)
    }

    /// All fields absent.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty.
    pub fn clear_fields() -> Self {
        Self {
            half_sizes: Some(Vec::new()),
            centers: Some(Vec::new()),
            colors: Some(Vec::new()),
            class_ids: Some(Vec::new()),
        }
    }

    /// Replace the `half_sizes` field (last write wins).
    pub fn with_half_sizes(
        mut self,
        half_sizes: impl IntoIterator<Item = impl Into<HalfSize3D>>,
    ) -> Self {
        self.half_sizes = Some(half_sizes.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `centers` field (last write wins).
    pub fn with_centers(
        mut self,
        centers: impl IntoIterator<Item = impl Into<Position3D>>,
    ) -> Self {
        self.centers = Some(centers.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `colors` field (last write wins).
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = impl Into<Color>>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `class_ids` field (last write wins).
    pub fn with_class_ids(
        mut self,
        class_ids: impl IntoIterator<Item = impl Into<ClassId>>,
    ) -> Self {
        self.class_ids = Some(class_ids.into_iter().map(Into::into).collect());
        self
    }
}

impl Archetype for Boxes3D {
    const NAME: &'static str = "strata.archetypes.Boxes3D";
    const INDICATOR_TYPE: &'static str = "strata.indicator.Boxes3D";

    fn num_instances(&self) -> usize {
        self.half_sizes.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(5);
        serialize_field(&mut out, Self::DESC_HALF_SIZES, self.half_sizes.as_deref())?;
        serialize_field(&mut out, Self::DESC_CENTERS, self.centers.as_deref())?;
        serialize_field(&mut out, Self::DESC_COLORS, self.colors.as_deref())?;
        serialize_field(&mut out, Self::DESC_CLASS_IDS, self.class_ids.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_follow_half_sizes_in_output() {
        let boxes = Boxes3D::from_centers_and_half_sizes(
            [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            [[0.5, 0.5, 0.5], [1.0, 1.0, 1.0]],
        );
        let batches = boxes.serialize().expect("serialize");
        assert_eq!(batches[0].descriptor(), &Boxes3D::DESC_HALF_SIZES);
        assert_eq!(batches[1].descriptor(), &Boxes3D::DESC_CENTERS);
        assert!(batches[2].is_indicator());
        assert_eq!(boxes.num_instances(), 2);
    }

    #[test]
    fn test_clear_fields_emits_all_fields_empty() {
        let batches = Boxes3D::clear_fields().serialize().expect("serialize");
        assert_eq!(batches.len(), 5);
        for batch in &batches[..4] {
            assert_eq!(batch.num_instances(), 0);
            assert!(!batch.is_indicator());
        }
        assert!(batches[4].is_indicator());
    }
}
