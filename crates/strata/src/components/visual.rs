// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Visual attribute components (color, radius, class id).

use crate::batch::Component;
use crate::encode::{EncodeResult, PayloadEncoder};

/// An RGBA color, packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    /// Opaque color from RGB.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_unmultiplied_rgba(r, g, b, 0xff)
    }

    pub const fn from_unmultiplied_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 24) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        )
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl Component for Color {
    const TYPE_NAME: &'static str = "strata.components.Color";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_u32(self.0);
        Ok(())
    }
}

/// A radius in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Radius(pub f32);

impl From<f32> for Radius {
    fn from(r: f32) -> Self {
        Self(r)
    }
}

impl Component for Radius {
    const TYPE_NAME: &'static str = "strata.components.Radius";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_f32(self.0);
        Ok(())
    }
}

/// A 16-bit class id, resolved against an annotation context downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassId(pub u16);

impl From<u16> for ClassId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl Component for ClassId {
    const TYPE_NAME: &'static str = "strata.components.ClassId";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_u16(self.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_packing() {
        let c = Color::from_unmultiplied_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x12345678);
        assert_eq!(c.rgba(), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn test_color_from_rgb_is_opaque() {
        let c = Color::from_rgb(255, 0, 0);
        assert_eq!(c.rgba().3, 0xff);
    }

    #[test]
    fn test_fixed_width_encoding() {
        let mut enc = PayloadEncoder::new();
        Color(0x01020304).encode(&mut enc).expect("color");
        enc.end_value().expect("end");
        ClassId(7).encode(&mut enc).expect("class id");
        enc.end_value().expect("end");

        let (payload, ends) = enc.into_parts();
        assert_eq!(ends, vec![4, 6]);
        assert_eq!(payload[0..4], 0x01020304u32.to_le_bytes());
        assert_eq!(payload[4..6], 7u16.to_le_bytes());
    }
}
