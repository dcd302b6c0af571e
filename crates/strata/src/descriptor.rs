// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Component descriptors: wire-stable field identity.

use std::fmt;

/// Field name used by indicator batches.
pub const INDICATOR_FIELD: &str = "indicator";

/// Identifies one named component batch on the wire.
///
/// The `(archetype, field, component_type)` triple is generated from the
/// schema definition and acts as a versioned identifier: renaming any of the
/// three breaks wire compatibility with existing consumers. Descriptors are
/// definition-time constants and never constructed from runtime input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentDescriptor {
    /// Owning archetype name (e.g. `strata.archetypes.Points3D`).
    pub archetype: &'static str,
    /// Field name within the archetype (e.g. `positions`).
    pub field: &'static str,
    /// Component type name (e.g. `strata.components.Position3D`).
    pub component_type: &'static str,
}

impl ComponentDescriptor {
    /// Create a descriptor for a data field.
    pub const fn new(
        archetype: &'static str,
        field: &'static str,
        component_type: &'static str,
    ) -> Self {
        Self {
            archetype,
            field,
            component_type,
        }
    }

    /// Create the descriptor for an archetype's indicator batch.
    ///
    /// The indicator carries no data; its component type name encodes the
    /// archetype so downstream consumers can discriminate record types.
    pub const fn indicator(archetype: &'static str, indicator_type: &'static str) -> Self {
        Self {
            archetype,
            field: INDICATOR_FIELD,
            component_type: indicator_type,
        }
    }

    /// Check if this descriptor names an indicator batch.
    pub fn is_indicator(&self) -> bool {
        self.field == INDICATOR_FIELD
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} [{}]",
            self.archetype, self.field, self.component_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESC: ComponentDescriptor = ComponentDescriptor::new(
        "strata.archetypes.Points3D",
        "positions",
        "strata.components.Position3D",
    );

    #[test]
    fn test_descriptor_identity() {
        assert_eq!(DESC.archetype, "strata.archetypes.Points3D");
        assert_eq!(DESC.field, "positions");
        assert!(!DESC.is_indicator());

        let same = ComponentDescriptor::new(
            "strata.archetypes.Points3D",
            "positions",
            "strata.components.Position3D",
        );
        assert_eq!(DESC, same);
    }

    #[test]
    fn test_indicator_descriptor() {
        let ind = ComponentDescriptor::indicator(
            "strata.archetypes.Points3D",
            "strata.indicator.Points3D",
        );
        assert!(ind.is_indicator());
        assert_eq!(ind.field, INDICATOR_FIELD);
        assert_eq!(ind.component_type, "strata.indicator.Points3D");
    }

    #[test]
    fn test_descriptor_display() {
        assert_eq!(
            DESC.to_string(),
            "strata.archetypes.Points3D:positions [strata.components.Position3D]"
        );
    }
}
