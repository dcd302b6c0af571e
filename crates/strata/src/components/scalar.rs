// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Scalar component for time-series plots.

use crate::batch::Component;
use crate::encode::{EncodeResult, PayloadEncoder};

/// A double-precision scalar sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar(pub f64);

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}

impl Component for Scalar {
    const TYPE_NAME: &'static str = "strata.components.Scalar";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_f64(self.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_encoding() {
        let mut enc = PayloadEncoder::new();
        Scalar(2.5).encode(&mut enc).expect("encode");
        enc.end_value().expect("end");
        let (payload, ends) = enc.into_parts();
        assert_eq!(ends, vec![8]);
        assert_eq!(payload, 2.5f64.to_le_bytes());
    }
}
