// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Generated archetype: a text log entry.

use crate::archetype::{finish_serialize, serialize_field, Archetype, SerializeResult};
use crate::batch::SerializedBatch;
use crate::components::{Color, Text, TextLogLevel};
use crate::descriptor::ComponentDescriptor;

/// A textual log entry with optional severity and color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLog {
    /// Log body. Primary field.
    pub text: Option<Vec<Text>>,
    /// Optional severity label.
    pub level: Option<Vec<TextLogLevel>>,
    /// Optional rendering color.
    pub color: Option<Vec<Color>>,
}

impl TextLog {
    /// Descriptor for the `text` field.
    pub const DESC_TEXT: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.TextLog",
        "text",
        "strata.components.Text",
    );

    /// Descriptor for the `level` field.
    pub const DESC_LEVEL: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.TextLog",
        "level",
        "strata.components.TextLogLevel",
    );

    /// Descriptor for the `color` field.
    pub const DESC_COLOR: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.TextLog",
        "color",
        "strata.components.Color",
    );

    /// Create a record with the given body.
    pub fn new(text: impl Into<Text>) -> Self {
        Self::update_fields().with_text([text.into()])
    }

    /// All fields absent.
    pub fn update_fields() -> Self {
        Self::default()
    }

    /// Every field present but empty.
    pub fn clear_fields() -> Self {
        Self {
            text: Some(Vec::new()),
            level: Some(Vec::new()),
            color: Some(Vec::new()),
        }
    }

    /// Replace the `text` field (last write wins).
    pub fn with_text(mut self, text: impl IntoIterator<Item = impl Into<Text>>) -> Self {
        self.text = Some(text.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the `level` field (last write wins).
    pub fn with_level(mut self, level: impl Into<TextLogLevel>) -> Self {
        self.level = Some(vec![level.into()]);
        self
    }

    /// Replace the `color` field (last write wins).
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(vec![color.into()]);
        self
    }
}

impl Archetype for TextLog {
    const NAME: &'static str = "strata.archetypes.TextLog";
    const INDICATOR_TYPE: &'static str = "strata.indicator.TextLog";

    fn num_instances(&self) -> usize {
        self.text.as_ref().map_or(0, Vec::len)
    }

    fn serialize(&self) -> SerializeResult<Vec<SerializedBatch>> {
        let mut out = Vec::with_capacity(4);
        serialize_field(&mut out, Self::DESC_TEXT, self.text.as_deref())?;
        serialize_field(&mut out, Self::DESC_LEVEL, self.level.as_deref())?;
        serialize_field(&mut out, Self::DESC_COLOR, self.color.as_deref())?;
        Ok(finish_serialize::<Self>(out))
    }
}
