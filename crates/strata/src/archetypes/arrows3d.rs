// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: a batch of 3D arrows.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::{Color, Position3D, Radius, Vector3D};
use crate::descriptor::ComponentDescriptor;

/// A batch of 3D arrows, each defined by a vector rooted at an origin.
///
/// `vectors` is the primary field. Origins default to the scene origin when
/// absent; optional fields of length 1 broadcast to all instances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrows3D {
    /// Arrow directions and magnitudes. Primary field.
    pub vectors: Option<Vec<Vector3D>>,
    /// Optional per-arrow base positions.
    pub origins: Option<Vec<Position3D>>,
    /// Optional per-arrow shaft radii.
    pub radii: Option<Vec<Radius>>,
    /// Optional per-arrow colors.
    pub colors: Option<Vec<Color>>,
}

impl Arrows3D {
    /// Descriptor for the `vectors` field.
    pub const DESC_VECTORS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Arrows3D",
        "vectors",
        "strata.components.Vector3D",
    );

    /// Descriptor for the `origins` field.
    pub const DESC_ORIGINS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Arrows3D",
        "origins",
        "strata.components.Position3D",
    );

    /// Descriptor for the `radii` field.
    pub const DESC_RADII: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Arrows3D",
        "radii",
        "strata.components.Radius",
    );

    /// Descriptor for the `colors` field.
    pub const DESC_COLORS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Arrows3D",
        "colors",
        "strata.components.Color",
    );

    /// Create a record with the given vectors.
    pub fn from_vectors(vectors: impl IntoIterator<Item = impl Into<Vector3D>>) -> Self {
        Self::update_fields().with_vectors(vectors)
    }

    /// All fields absent.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty.
    pub fn clear_fields() -> Self {
        Self {
            vectors: Some(Vec::new()),
            origins: Some(Vec::new()),
            radii: Some(Vec::new()),
            colors: Some(Vec::new()),
        }
    }

    /// Replace the `vectors` field (last write wins).
    pub fn with_vectors(mut self, vectors: impl IntoIterator<Item = impl Into<Vector3D>>) -> Self {
        self.vectors = Some(vectors.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `origins` field (last write wins).
    pub fn with_origins(
        mut self,
        origins: impl IntoIterator<Item = impl Into<Position3D>>,
    ) -> Self {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
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
}

impl Archetype for Arrows3D {
    const NAME: &'static str = "strata.archetypes.Arrows3D";
    const INDICATOR_TYPE: &'static str = "strata.indicator.Arrows3D";

    fn num_instances(&self) -> usize {
        self.vectors.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(5);
        serialize_field(&mut out, Self::DESC_VECTORS, self.vectors.as_deref())?;
        serialize_field(&mut out, Self::DESC_ORIGINS, self.origins.as_deref())?;
        serialize_field(&mut out, Self::DESC_RADII, self.radii.as_deref())?;
        serialize_field(&mut out, Self::DESC_COLORS, self.colors.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_present_fields_only() {
        let arrows = Arrows3D::from_vectors([[1.0, 0.0, 0.0]]).with_origins([[0.0, 0.0, 1.0]]);
        let batches = arrows.serialize().expect("serialize");
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].descriptor(), &Arrows3D::DESC_VECTORS);
        assert_eq!(batches[1].descriptor(), &Arrows3D::DESC_ORIGINS);
        assert!(batches[2].is_indicator());
    }

    #[test]
    fn test_update_fields_serializes_to_indicator_only() {
        let batches = Arrows3D::update_fields().serialize().expect("serialize");
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_indicator());
    }
}
