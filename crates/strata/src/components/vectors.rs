// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! 3D vector-valued components (3x f32, 12 bytes each).

use crate::batch::Component;
use crate::encode::{EncodeResult, PayloadEncoder};

macro_rules! vec3_component {
    ($(#[$doc:meta])* $name:ident, $type_name:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(pub [f32; 3]);

        impl $name {
            pub const fn new(x: f32, y: f32, z: f32) -> Self {
                Self([x, y, z])
            }

            pub fn x(&self) -> f32 {
                self.0[0]
            }

            pub fn y(&self) -> f32 {
                self.0[1]
            }

            pub fn z(&self) -> f32 {
                self.0[2]
            }
        }

        impl From<[f32; 3]> for $name {
            fn from(xyz: [f32; 3]) -> Self {
                Self(xyz)
            }
        }

        impl From<(f32, f32, f32)> for $name {
            fn from((x, y, z): (f32, f32, f32)) -> Self {
                Self([x, y, z])
            }
        }

        impl Component for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
                enc.write_f32(self.0[0]);
                enc.write_f32(self.0[1]);
                enc.write_f32(self.0[2]);
                Ok(())
            }
        }
    };
}

vec3_component!(
    /// A position in 3D space.
    Position3D,
    "strata.components.Position3D"
);

vec3_component!(
    /// A direction vector in 3D space.
    Vector3D,
    "strata.components.Vector3D"
);

vec3_component!(
    /// Half-extents of a 3D box, measured from its center.
    HalfSize3D,
    "strata.components.HalfSize3D"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::serialize_batch;
    use crate::descriptor::ComponentDescriptor;

    #[test]
    fn test_vec3_encoding() {
        let desc = ComponentDescriptor::new("test.A", "positions", Position3D::TYPE_NAME);
        let b = serialize_batch(desc, &[Position3D::new(1.0, 2.0, 3.0)]).expect("serialize");
        assert_eq!(b.num_instances(), 1);
        assert_eq!(b.payload().len(), 12);
        assert_eq!(b.payload()[4..8], 2.0f32.to_le_bytes());
    }

    #[test]
    fn test_vec3_conversions() {
        let a: Vector3D = [1.0, 0.0, 0.0].into();
        let b: Vector3D = (1.0, 0.0, 0.0).into();
        assert_eq!(a, b);
        assert_eq!(a.x(), 1.0);
    }
}
