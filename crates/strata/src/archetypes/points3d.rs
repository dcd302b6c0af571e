// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: a batch of 3D points.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::{ClassId, Color, Position3D, Radius};
use crate::descriptor::ComponentDescriptor;

/// A batch of 3D points with optional per-point attributes.
///
/// `positions` is the primary field; optional fields of length 1 broadcast
/// to all instances downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Points3D {
    /// Point positions. Primary field: its length is the instance count.
    pub positions: Option<Vec<Position3D>>,
    /// Optional per-point radii.
    pub radii: Option<Vec<Radius>>,
    /// Optional per-point colors.
    pub colors: Option<Vec<Color>>,
    /// Optional per-point class ids.
    pub class_ids: Option<Vec<ClassId>>,
}

impl Points3D {
    /// Descriptor for the `positions` field.
    pub const DESC_POSITIONS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Points3D",
        "positions",
        "strata.components.Position3D",
    );

    /// Descriptor for the `radii` field.
    pub const DESC_RADII: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Points3D",
        "radii",
        "strata.components.Radius",
    );

    /// Descriptor for the `colors` field.
    pub const DESC_COLORS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Points3D",
        "colors",
        "strata.components.Color",
    );

    /// Descriptor for the `class_ids` field.
    pub const DESC_CLASS_IDS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Points3D",
        "class_ids",
        "strata.components.ClassId",
    );

    /// Create a record with the given positions.
    pub fn new(positions: impl IntoIterator<Item = impl Into<Position3D>>) -> Self {
        Self::update_fields().with_positions(positions)
    }

    /// All fields absent: update only the fields set afterwards, leaving the
    /// rest at their previous value in the consuming store.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty: erases all fields at the consuming
    /// store, as opposed to leaving them unspecified.
    pub fn clear_fields() -> Self {
        Self {
            positions: Some(Vec::new()),
            radii: Some(Vec::new()),
            colors: Some(Vec::new()),
            class_ids: Some(Vec::new()),
        }
    }

    /// Replace the `positions` field (last write wins).
    pub fn with_positions(
        mut self,
        positions: impl IntoIterator<Item = impl Into<Position3D>>,
    ) -> Self {
        self.positions = Some(positions.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `radii` field (last write wins).
    pub fn with_radii(mut self, radii: impl IntoIterator<Item = impl Into<Radius>>) -> Self {
        self.radii = Some(radii.into_iter().map(Into::into).collect());
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

impl Archetype for Points3D {
    const NAME: &'static str = "strata.archetypes.Points3D";
    const INDICATOR_TYPE: &'static str = "strata.indicator.Points3D";

    fn num_instances(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(5);
        serialize_field(&mut out, Self::DESC_POSITIONS, self.positions.as_deref())?;
        serialize_field(&mut out, Self::DESC_RADII, self.radii.as_deref())?;
        serialize_field(&mut out, Self::DESC_COLORS, self.colors.as_deref())?;
        serialize_field(&mut out, Self::DESC_CLASS_IDS, self.class_ids.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}
