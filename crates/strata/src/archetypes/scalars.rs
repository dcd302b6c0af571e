// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: scalar samples for time-series plots.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::{Color, Scalar};
use crate::descriptor::ComponentDescriptor;

/// One or more scalar samples, typically logged over time and plotted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scalars {
    /// Sample values. Primary field.
    pub scalars: Option<Vec<Scalar>>,
    /// Optional per-series colors.
    pub colors: Option<Vec<Color>>,
}

impl Scalars {
    /// Descriptor for the `scalars` field.
    pub const DESC_SCALARS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Scalars",
        "scalars",
        "strata.components.Scalar",
    );

    /// Descriptor for the `colors` field.
    pub const DESC_COLORS: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Scalars",
        "colors",
        "strata.components.Color",
    );

    /// Create a record with the given samples.
    pub fn new(scalars: impl IntoIterator<Item = impl Into<Scalar>>) -> Self {
        Self::update_fields().with_scalars(scalars)
    }

    /// Create a record with a single sample.
    pub fn single(value: impl Into<Scalar>) -> Self {
        Self::new([value])
    }

    /// All fields absent.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty.
    pub fn clear_fields() -> Self {
        Self {
            scalars: Some(Vec::new()),
            colors: Some(Vec::new()),
        }
    }

    /// Replace the `scalars` field (last write wins).
    pub fn with_scalars(mut self, scalars: impl IntoIterator<Item = impl Into<Scalar>>) -> Self {
        self.scalars = Some(scalars.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `colors` field (last write wins).
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = impl Into<Color>>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }
}

impl Archetype for Scalars {
    const NAME: &'static str = "strata.archetypes.Scalars";
    const INDICATOR_TYPE: &'static str = "strata.indicator.Scalars";

    fn num_instances(&self) -> usize {
        self.scalars.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(3);
        serialize_field(&mut out, Self::DESC_SCALARS, self.scalars.as_deref())?;
        serialize_field(&mut out, Self::DESC_COLORS, self.colors.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sample() {
        let batches = Scalars::single(3.25).serialize().expect("serialize");
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].num_instances(), 1);
        assert_eq!(batches[0].payload(), 3.25f64.to_le_bytes());
        assert!(batches[1].is_indicator());
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let scalars = Scalars::new([1.0, 2.0, 3.0]).with_colors([Color::from_rgb(0, 255, 0)]);
        let a = scalars.serialize().expect("first");
        let b = scalars.serialize().expect("second");
        assert_eq!(a, b);
    }
}
